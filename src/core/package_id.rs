//! Package identification - WHICH package (repository + workspace-relative path).
//!
//! PackageIdentifier is the reload key for the standalone loader and the
//! discriminant the eligibility filter works on.

use std::fmt;

/// Path of the synthetic package that holds workspace-level repository
/// declarations. It has no ordinary build definition of its own.
pub const EXTERNAL_PACKAGE_PATH: &str = "external";

/// Path of the pseudo-package the primary pipeline uses for built-in default
/// configuration. It has no on-disk source.
pub const DEFAULTS_PACKAGE_PATH: &str = "tools/defaults";

/// The repository a package belongs to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RepositoryName {
    /// The main workspace repository.
    Main,
    /// A named external repository.
    External(String),
}

impl RepositoryName {
    /// Check if this is the main workspace repository.
    pub fn is_main(&self) -> bool {
        matches!(self, RepositoryName::Main)
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryName::Main => Ok(()),
            RepositoryName::External(name) => write!(f, "@{}", name),
        }
    }
}

/// A unique identifier for a package.
///
/// Combines a repository designator with a workspace-relative package path
/// (`/`-separated, no leading or trailing slash). The root package has an
/// empty path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageIdentifier {
    repository: RepositoryName,
    path: String,
}

impl PackageIdentifier {
    /// Create an identifier for a package in the main repository.
    pub fn in_main_repository(path: impl Into<String>) -> Self {
        Self::new(RepositoryName::Main, path)
    }

    /// Create an identifier for a package in the given repository.
    pub fn new(repository: RepositoryName, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = path.trim_matches('/').to_string();
        PackageIdentifier { repository, path }
    }

    /// Get the repository this package belongs to.
    pub fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Get the workspace-relative package path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Iterate over the path segments. The root package has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Number of path segments.
    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// Check if this is the synthetic `external` package.
    pub fn is_external_package(&self) -> bool {
        self.repository.is_main() && self.path == EXTERNAL_PACKAGE_PATH
    }

    /// Check if this is the pipeline's built-in defaults pseudo-package.
    pub fn is_defaults_package(&self) -> bool {
        self.repository.is_main() && self.path == DEFAULTS_PACKAGE_PATH
    }
}

impl fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}//{}", self.repository, self.path)
    }
}
