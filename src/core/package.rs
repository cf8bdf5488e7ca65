//! Package - the loaded representation of one build-definition unit.
//!
//! A Package combines its identifier and on-disk location with the set of
//! targets the loader produced for it. The consistency check never mutates
//! a package; it only reads identities out of it.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::core::label::Label;
use crate::core::package_id::PackageIdentifier;
use crate::core::target::Target;

/// File name of a package's build definition within its directory.
pub const BUILD_FILE_NAME: &str = "BUILD.toml";

/// A fully loaded package.
#[derive(Debug, Clone)]
pub struct Package {
    /// The package identifier
    identifier: PackageIdentifier,

    /// Absolute path of the build-definition file this package was read from
    build_file: PathBuf,

    /// Targets by name. Names are unique within a package, so the map keys
    /// double as the target identity within the package.
    targets: BTreeMap<String, Target>,
}

impl Package {
    /// Create a new package from its targets.
    ///
    /// Later targets with a duplicate name replace earlier ones, matching
    /// loader last-declaration-wins behavior.
    pub fn new(
        identifier: PackageIdentifier,
        build_file: PathBuf,
        targets: impl IntoIterator<Item = Target>,
    ) -> Self {
        let targets = targets
            .into_iter()
            .map(|t| (t.name().to_string(), t))
            .collect();

        Package {
            identifier,
            build_file,
            targets,
        }
    }

    /// Get the package identifier.
    pub fn identifier(&self) -> &PackageIdentifier {
        &self.identifier
    }

    /// Get the absolute path of the build-definition file.
    pub fn build_file(&self) -> &Path {
        &self.build_file
    }

    /// Get all targets, keyed by name.
    pub fn targets(&self) -> &BTreeMap<String, Target> {
        &self.targets
    }

    /// Get a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    /// Collect the labels of all targets in this package.
    pub fn target_labels(&self) -> BTreeSet<Label> {
        self.targets
            .values()
            .map(|t| t.label(&self.identifier))
            .collect()
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)
    }
}
