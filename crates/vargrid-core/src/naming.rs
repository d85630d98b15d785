//! Display names for variables and constraints.
//!
//! Name construction is measurable once models reach thousands of rows, so
//! it is switched off in release builds. [`NAMES_ENABLED`] is a compile-time
//! constant: debug builds (or the `names` feature) turn it on. The switch is
//! carried by a [`Naming`] value handed to the factory and constraint helpers;
//! a `Naming` built from the constant folds to an empty string when disabled.

use std::fmt::{Display, Write as _};

/// Whether this build produces names.
pub const NAMES_ENABLED: bool = cfg!(any(debug_assertions, feature = "names"));

/// Name generator with an explicit on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Naming {
    enabled: bool,
}

impl Naming {
    /// Naming as configured for this build.
    pub const fn from_build() -> Self {
        Self {
            enabled: NAMES_ENABLED,
        }
    }

    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `base[i0,i1,...]`, or `base` alone when `indices` is empty.
    ///
    /// Returns an empty string without touching the inputs when disabled.
    #[inline]
    pub fn name_nd(&self, base: &str, indices: &[usize]) -> String {
        if !self.enabled {
            return String::new();
        }
        if indices.is_empty() {
            return base.to_string();
        }
        let mut name = String::with_capacity(base.len() + 2 + indices.len() * 3);
        name.push_str(base);
        name.push('[');
        for (pos, index) in indices.iter().enumerate() {
            if pos > 0 {
                name.push(',');
            }
            let _ = write!(name, "{index}");
        }
        name.push(']');
        name
    }

    /// Concatenate the display form of each part, in order.
    #[inline]
    pub fn make_name(&self, parts: &[&dyn Display]) -> String {
        if !self.enabled {
            return String::new();
        }
        let mut name = String::new();
        for part in parts {
            let _ = write!(name, "{part}");
        }
        name
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Build a name from display parts with a [`Naming`]: `make_name!(naming; "cap_", k, "_", t)`.
#[macro_export]
macro_rules! make_name {
    ($naming:expr; $($part:expr),+ $(,)?) => {
        $naming.make_name(&[$(&$part as &dyn ::std::fmt::Display),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_naming_is_empty() {
        let naming = Naming::disabled();
        assert_eq!(naming.name_nd("x", &[2, 3]), "");
        assert_eq!(naming.name_nd("x", &[]), "");
        assert_eq!(naming.make_name(&[&"a", &1]), "");
    }

    #[test]
    fn enabled_naming_formats_indices() {
        let naming = Naming::enabled();
        assert_eq!(naming.name_nd("x", &[2, 3]), "x[2,3]");
        assert_eq!(naming.name_nd("x", &[7]), "x[7]");
        assert_eq!(naming.name_nd("x", &[]), "x");
    }

    #[test]
    fn make_name_concatenates_parts() {
        let naming = Naming::enabled();
        assert_eq!(naming.make_name(&[&"cap_", &3, &"_", &1.5]), "cap_3_1.5");
        assert_eq!(make_name!(naming; "link", '_', 4), "link_4");
    }

    #[test]
    fn build_default_follows_constant() {
        assert_eq!(Naming::default().is_enabled(), NAMES_ENABLED);
    }
}
