//! Semantics configuration - evaluation options threaded through a load.
//!
//! The bundle is opaque to the consistency check itself: it is captured from
//! the original load and handed unchanged to the standalone reload so both
//! loads interpret package definitions identically.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An opaque bundle of language-evaluation flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemanticsConfig {
    flags: BTreeMap<String, String>,
}

impl SemanticsConfig {
    /// Create an empty configuration (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag, returning the updated configuration.
    pub fn with_flag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.insert(key.into(), value.into());
        self
    }

    /// Get a flag value.
    pub fn flag(&self, key: &str) -> Option<&str> {
        self.flags.get(key).map(String::as_str)
    }

    /// Check if a boolean-valued flag is enabled.
    pub fn is_enabled(&self, key: &str) -> bool {
        matches!(self.flag(key), Some("true") | Some("1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_access() {
        let config = SemanticsConfig::new()
            .with_flag("strict_visibility", "true")
            .with_flag("max_depth", "4");

        assert_eq!(config.flag("max_depth"), Some("4"));
        assert!(config.is_enabled("strict_visibility"));
        assert!(!config.is_enabled("missing"));
    }

    #[test]
    fn test_clone_is_identical() {
        let config = SemanticsConfig::new().with_flag("a", "b");
        assert_eq!(config, config.clone());
    }
}
