use crate::name::Name;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WheelError {
    #[error("name is empty")]
    EmptyName,
    #[error("'{0}' is already on the wheel")]
    DuplicateName(Name),
    #[error("No names left to spin!")]
    NoSegments,
}
