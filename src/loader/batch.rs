//! Batch loader - the standalone, offline package-loading implementation.
//!
//! Unlike the primary pipeline, the batch loader has no graph state and no
//! incrementality: each `load_package` call reads the package's build
//! definition from disk, interprets it, and returns a fresh `Package`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::core::{Package, PackageIdentifier, SemanticsConfig, Target, BUILD_FILE_NAME};
use crate::loader::{LoadError, LoaderConfig, LoaderFactory, PackageLoader, RuleClassProvider};

/// Semantics flag that disables rule-class validation during loading.
pub const ALLOW_UNKNOWN_RULE_CLASSES: &str = "allow_unknown_rule_classes";

/// Schema of a build-definition file.
#[derive(Debug, Deserialize)]
struct BuildFile {
    /// Target declarations by name
    #[serde(default)]
    targets: std::collections::BTreeMap<String, TargetDecl>,
}

/// A single target declaration.
#[derive(Debug, Deserialize)]
struct TargetDecl {
    /// Rule class of the target
    kind: String,
}

/// A standalone loader scoped to one workspace root.
pub struct BatchLoader {
    workspace_root: PathBuf,
    rule_classes: Arc<dyn RuleClassProvider>,
    semantics: SemanticsConfig,
}

impl BatchLoader {
    /// Create a loader from a construction config.
    pub fn new(config: LoaderConfig) -> Self {
        BatchLoader {
            workspace_root: config.workspace_root,
            rule_classes: config.rule_classes,
            semantics: config.semantics,
        }
    }

    /// Get the workspace root this loader resolves packages against.
    pub fn workspace_root(&self) -> &std::path::Path {
        &self.workspace_root
    }

    fn build_file_path(&self, id: &PackageIdentifier) -> PathBuf {
        let mut path = self.workspace_root.clone();
        for segment in id.segments() {
            path.push(segment);
        }
        path.push(BUILD_FILE_NAME);
        path
    }
}

impl PackageLoader for BatchLoader {
    fn load_package(&self, id: &PackageIdentifier) -> Result<Package, LoadError> {
        if !id.repository().is_main() {
            return Err(LoadError::NoSuchPackage {
                package: id.clone(),
                reason: "batch loader only resolves packages in the main repository".to_string(),
            });
        }

        let build_file = self.build_file_path(id);
        let contents = std::fs::read_to_string(&build_file).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LoadError::NoSuchPackage {
                    package: id.clone(),
                    reason: format!("build definition not found at {}", build_file.display()),
                }
            } else {
                LoadError::Io {
                    package: id.clone(),
                    source: e,
                }
            }
        })?;

        let parsed: BuildFile = toml::from_str(&contents).map_err(|e| LoadError::Malformed {
            package: id.clone(),
            message: e.to_string(),
        })?;

        let validate = !self.semantics.is_enabled(ALLOW_UNKNOWN_RULE_CLASSES);
        let mut targets = Vec::with_capacity(parsed.targets.len());
        for (name, decl) in parsed.targets {
            if validate && !self.rule_classes.is_rule_class(&decl.kind) {
                return Err(LoadError::Malformed {
                    package: id.clone(),
                    message: format!("unknown rule class `{}` for target `{}`", decl.kind, name),
                });
            }
            targets.push(Target::new(name, decl.kind));
        }

        Ok(Package::new(id.clone(), build_file, targets))
    }
}

/// Factory producing `BatchLoader` instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchLoaderFactory;

impl LoaderFactory for BatchLoaderFactory {
    fn open(&self, config: LoaderConfig) -> anyhow::Result<Box<dyn PackageLoader>> {
        Ok(Box::new(BatchLoader::new(config)))
    }
}
