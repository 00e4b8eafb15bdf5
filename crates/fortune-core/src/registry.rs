use crate::error::WheelError;
use crate::name::Name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEntry {
    pub name: Name,
    pub active: bool,
}

/// Default names plus user-added ones. A custom name appears at most once.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    fixed: Vec<Name>,
    custom: Vec<CustomEntry>,
}

impl Registry {
    pub fn new(fixed: Vec<Name>) -> Self {
        Self {
            fixed,
            custom: Vec::new(),
        }
    }

    pub fn fixed(&self) -> &[Name] {
        &self.fixed
    }

    pub fn custom(&self) -> &[CustomEntry] {
        &self.custom
    }

    pub fn active_custom(&self) -> impl Iterator<Item = &Name> {
        self.custom.iter().filter(|c| c.active).map(|c| &c.name)
    }

    /// Names eligible for the wheel: fixed first, then active custom names.
    pub fn eligible(&self) -> impl Iterator<Item = &Name> {
        self.fixed.iter().chain(self.active_custom())
    }

    pub fn contains_custom(&self, name: &Name) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &Name) -> Option<usize> {
        self.custom.iter().position(|c| &c.name == name)
    }

    pub fn add_custom(&mut self, input: &str) -> Result<Name, WheelError> {
        let name = Name::parse(input)?;
        if self.contains_custom(&name) {
            return Err(WheelError::DuplicateName(name));
        }
        self.custom.push(CustomEntry {
            name: name.clone(),
            active: true,
        });
        Ok(name)
    }

    /// Returns `false` when the name is not a custom name.
    pub fn set_active(&mut self, name: &Name, active: bool) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.custom[idx].active = active;
                true
            }
            None => false,
        }
    }

    pub fn remove_custom(&mut self, name: &Name) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.custom.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn replace_fixed(&mut self, fixed: Vec<Name>) {
        self.fixed = fixed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new(vec![Name::from("X"), Name::from("Y")])
    }

    #[test]
    fn blank_input_leaves_custom_unchanged() {
        let mut reg = registry();
        reg.add_custom("Z").unwrap();
        for input in ["", "  ", "\t"] {
            assert_eq!(reg.add_custom(input), Err(WheelError::EmptyName));
            assert_eq!(reg.custom().len(), 1);
        }
    }

    #[test]
    fn duplicate_custom_is_rejected() {
        let mut reg = registry();
        reg.add_custom("Z").unwrap();
        assert_eq!(
            reg.add_custom(" Z "),
            Err(WheelError::DuplicateName(Name::from("Z")))
        );
        assert_eq!(reg.custom().len(), 1);
    }

    #[test]
    fn fixed_and_custom_may_share_a_name() {
        let mut reg = registry();
        reg.add_custom("X").unwrap();
        assert_eq!(reg.eligible().filter(|n| n.as_str() == "X").count(), 2);
    }

    #[test]
    fn toggling_unknown_name_is_noop() {
        let mut reg = registry();
        assert!(!reg.set_active(&Name::from("nobody"), false));
        assert!(!reg.set_active(&Name::from("X"), false));
        assert_eq!(reg.eligible().count(), 2);
    }

    #[test]
    fn remove_ignores_active_flag() {
        let mut reg = registry();
        reg.add_custom("Z").unwrap();
        reg.set_active(&Name::from("Z"), false);
        assert!(reg.remove_custom(&Name::from("Z")));
        assert!(reg.custom().is_empty());
        assert!(!reg.remove_custom(&Name::from("Z")));
    }

    #[test]
    fn eligible_keeps_registry_order() {
        let mut reg = registry();
        reg.add_custom("A").unwrap();
        reg.add_custom("B").unwrap();
        reg.set_active(&Name::from("A"), false);
        let names: Vec<_> = reg.eligible().map(Name::as_str).collect();
        assert_eq!(names, ["X", "Y", "B"]);
    }
}
