//! Target - a named, labelable entity declared inside a package.
//!
//! Only the name (and the label derived from it) matters to the consistency
//! check; the rule class is carried along opaquely.

use crate::core::label::Label;
use crate::core::package_id::PackageIdentifier;

/// A target declared in a package's build definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Target name (unique within its package)
    name: String,

    /// Rule class this target was declared with (e.g. "library", "binary").
    /// Opaque to the consistency check.
    rule_class: String,
}

impl Target {
    /// Create a new target.
    pub fn new(name: impl Into<String>, rule_class: impl Into<String>) -> Self {
        Target {
            name: name.into(),
            rule_class: rule_class.into(),
        }
    }

    /// Get the target name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the rule class.
    pub fn rule_class(&self) -> &str {
        &self.rule_class
    }

    /// Derive the label of this target within the given package.
    pub fn label(&self, package: &PackageIdentifier) -> Label {
        Label::new(package.clone(), &self.name)
    }
}
