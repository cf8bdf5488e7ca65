//! Package loading contracts.
//!
//! The consistency check talks to loaders through two small capability
//! traits: `PackageLoader` (load one package by identifier) and
//! `LoaderFactory` (construct a fresh loader scoped to a workspace root).
//! The concrete `BatchLoader` in this module is the standalone, offline
//! implementation used for reloads.

pub mod batch;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::core::{Package, PackageIdentifier, SemanticsConfig};

pub use batch::{BatchLoader, BatchLoaderFactory, ALLOW_UNKNOWN_RULE_CLASSES};

/// Provider of the rule classes a loader accepts in build definitions.
///
/// Opaque to the consistency check; it only guarantees that the original
/// load and the reload are handed the same provider.
pub trait RuleClassProvider: Send + Sync {
    /// Check whether a rule class name is known.
    fn is_rule_class(&self, name: &str) -> bool;
}

/// The built-in rule classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRuleClasses;

impl RuleClassProvider for DefaultRuleClasses {
    fn is_rule_class(&self, name: &str) -> bool {
        matches!(name, "library" | "binary" | "test")
    }
}

/// Configuration for constructing a loader instance.
#[derive(Clone)]
pub struct LoaderConfig {
    /// Workspace root all package paths are resolved against
    pub workspace_root: PathBuf,

    /// Rule classes the loader accepts
    pub rule_classes: Arc<dyn RuleClassProvider>,

    /// Evaluation options for interpreting package definitions
    pub semantics: SemanticsConfig,
}

impl std::fmt::Debug for LoaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderConfig")
            .field("workspace_root", &self.workspace_root)
            .field("semantics", &self.semantics)
            .finish_non_exhaustive()
    }
}

/// Error from loading a single package.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no such package `{package}`: {reason}")]
    NoSuchPackage {
        package: PackageIdentifier,
        reason: String,
    },

    #[error("load of `{package}` was interrupted")]
    Interrupted { package: PackageIdentifier },

    #[error("malformed build definition for `{package}`: {message}")]
    Malformed {
        package: PackageIdentifier,
        message: String,
    },

    #[error("i/o error reading `{package}`")]
    Io {
        package: PackageIdentifier,
        #[source]
        source: std::io::Error,
    },
}

/// Loads packages by identifier.
pub trait PackageLoader {
    /// Load a single package.
    fn load_package(&self, id: &PackageIdentifier) -> Result<Package, LoadError>;
}

/// Constructs loader instances.
///
/// The consistency check builds a fresh loader per invocation and discards
/// it afterwards; nothing is cached across constructions.
pub trait LoaderFactory: Send + Sync {
    /// Construct a loader for the given configuration.
    fn open(&self, config: LoaderConfig) -> anyhow::Result<Box<dyn PackageLoader>>;
}
