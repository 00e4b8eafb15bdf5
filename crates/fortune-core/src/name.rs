use crate::error::WheelError;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// A participant on the wheel. Compared by exact value.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Builds a name from user input, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, WheelError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(WheelError::EmptyName);
        }
        Ok(Self::new(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
