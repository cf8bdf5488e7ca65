//! Label - globally unique target identity (repository + package path + name).
//!
//! Labels are the only target attribute the consistency check compares, so
//! they are value-comparable and orderable for use in ordinary set containers.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::core::package_id::PackageIdentifier;

/// A globally unique identifier for a target.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
    package: PackageIdentifier,
    name: String,
}

impl Label {
    /// Create a label for a target inside the given package.
    pub fn new(package: PackageIdentifier, name: impl Into<String>) -> Self {
        Label {
            package,
            name: name.into(),
        }
    }

    /// Get the identifier of the package this label points into.
    pub fn package(&self) -> &PackageIdentifier {
        &self.package
    }

    /// Get the target name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package, self.name)
    }
}

impl Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize in canonical display form
        serializer.collect_str(self)
    }
}
