use crate::name::Name;
use crate::registry::Registry;
use crate::shuffle::shuffle;
use derive_more::Deref;
use rand::Rng;

/// Shuffled wheel slices derived from a [`Registry`]. Always rebuilt, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Segments(Vec<Name>);

impl Segments {
    pub fn rebuild<R: Rng + ?Sized>(registry: &Registry, rng: &mut R) -> Self {
        let mut names: Vec<Name> = registry.eligible().cloned().collect();
        shuffle(&mut names, rng);
        Self(names)
    }

    pub fn names(&self) -> &[Name] {
        &self.0
    }
}
