//! Lightweight handles issued by a solver backend.
//!
//! Handles are plain copies; the backend that issued them owns the
//! underlying variable or constraint.

macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Position assigned by the issuing backend.
            pub const fn inner(self) -> u32 {
                self.0
            }
        }
    };
}

define_id_type!(VariableId);
define_id_type!(ConstraintId);

const PLACEHOLDER: u32 = u32::MAX;

impl VariableId {
    /// Handle that no backend has registered.
    ///
    /// Independent variable groups are filled with placeholders until the
    /// caller binds real handles into them.
    pub const fn placeholder() -> Self {
        Self(PLACEHOLDER)
    }

    pub const fn is_placeholder(self) -> bool {
        self.0 == PLACEHOLDER
    }
}

impl Default for VariableId {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_placeholder() {
            write!(f, "x?")
        } else {
            write!(f, "x{}", self.0)
        }
    }
}

impl std::fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConstraintId, VariableId};

    #[test]
    fn variable_id_roundtrip() {
        let id = VariableId::new(7);
        assert_eq!(id.inner(), 7);
        assert!(!id.is_placeholder());
    }

    #[test]
    fn constraint_id_roundtrip() {
        let id = ConstraintId::new(11);
        assert_eq!(id.inner(), 11);
    }

    #[test]
    fn default_variable_is_placeholder() {
        assert!(VariableId::default().is_placeholder());
        assert_eq!(VariableId::placeholder().to_string(), "x?");
        assert_eq!(VariableId::new(3).to_string(), "x3");
    }
}
