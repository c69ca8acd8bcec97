//! Keyboard activation bindings.
//!
//! The table only reacts to keys in two places: confirming a typed page number
//! and activating a focused sortable header. Both use the `activate` binding,
//! which defaults to Enter.
//!
//! # Example
//!
//! ```rust
//! use collapsible_table::key::{Binding, KeyMap, matches};
//!
//! let keys = KeyMap::default();
//! assert!(matches("enter", &[&keys.activate]));
//! assert!(!matches("a", &[&keys.activate]));
//!
//! let space = Binding::new().keys(&["space"]);
//! assert!(matches("space", &[&keys.activate, &space]));
//! ```

/// A set of key names that trigger the same action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<String>,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Creates a disabled binding.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns whether the binding is enabled and has at least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }
}

/// Checks whether `key` triggers any of the given bindings.
///
/// Key names compare case-insensitively so that `"Enter"` (as reported by
/// browsers) and `"enter"` (as reported by terminals) both match.
#[must_use]
pub fn matches(key: &str, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|binding| {
        binding.enabled() && binding.keys.iter().any(|k| k.eq_ignore_ascii_case(key))
    })
}

/// Key bindings understood by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    /// Confirms a typed page number and activates a focused header.
    pub activate: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            activate: Binding::new().keys(&["enter"]),
        }
    }
}
