//! On-disk workspace fixtures.
//!
//! A `WorkspaceFixture` owns a temporary directory laid out like a real
//! workspace, with one build-definition file per package. Tests drive drift
//! scenarios by rewriting or deleting definitions between loads.

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use crate::core::{Package, PackageIdentifier, SemanticsConfig, BUILD_FILE_NAME};
use crate::loader::{BatchLoader, DefaultRuleClasses, LoaderConfig, PackageLoader};

/// A temporary on-disk workspace.
pub struct WorkspaceFixture {
    dir: TempDir,
}

impl WorkspaceFixture {
    /// Create an empty workspace.
    pub fn new() -> Self {
        WorkspaceFixture {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Get the workspace root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a package's build definition and return its identifier.
    ///
    /// `targets` is a list of `(name, rule_class)` pairs.
    pub fn add_package(&self, path: &str, targets: &[(&str, &str)]) -> PackageIdentifier {
        let dir = self.root().join(path);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(BUILD_FILE_NAME), build_file_contents(targets)).unwrap();
        PackageIdentifier::in_main_repository(path)
    }

    /// Overwrite an existing package's build definition.
    pub fn rewrite_package(&self, path: &str, targets: &[(&str, &str)]) {
        let file = self.root().join(path).join(BUILD_FILE_NAME);
        std::fs::write(file, build_file_contents(targets)).unwrap();
    }

    /// Remove a package's build definition entirely.
    pub fn delete_package(&self, path: &str) {
        let file = self.root().join(path).join(BUILD_FILE_NAME);
        std::fs::remove_file(file).unwrap();
    }

    /// Load a package the way the primary pipeline would have, producing
    /// the "original" instance a check compares against.
    pub fn load_package(&self, id: &PackageIdentifier) -> Package {
        let loader = BatchLoader::new(LoaderConfig {
            workspace_root: self.root().to_path_buf(),
            rule_classes: Arc::new(DefaultRuleClasses),
            semantics: SemanticsConfig::new(),
        });
        loader.load_package(id).unwrap()
    }
}

impl Default for WorkspaceFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn build_file_contents(targets: &[(&str, &str)]) -> String {
    let mut contents = String::new();
    for (name, kind) in targets {
        contents.push_str(&format!("[targets.{name}]\nkind = \"{kind}\"\n\n"));
    }
    contents
}
