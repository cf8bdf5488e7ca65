//! Consistency-check error types.
//!
//! Every variant here is fatal by policy: the whole value of the check is
//! that divergence is loud. Inconclusive and skipped outcomes are not
//! errors and are reported through `CheckOutcome` instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::check::diff::DivergenceReport;
use crate::core::PackageIdentifier;
use crate::loader::LoadError;

/// Fatal outcome of a cross-implementation consistency check.
#[derive(Debug, Error)]
pub enum CrossCheckError {
    /// The two loader implementations produced different target sets.
    #[error(
        "package `{package}` loaded a different set of targets through the standalone \
         loader than through the primary pipeline ({report}); either the two loading \
         implementations have semantically diverged, or the invoking test did something \
         incompatible with the load-completion hook (such as mutating targets after load \
         completion, or changing the package's on-disk definition mid-test)"
    )]
    TargetSetDivergence {
        package: PackageIdentifier,
        report: DivergenceReport,
    },

    /// The standalone loader claims the package does not exist, even though
    /// the primary pipeline just finished loading it.
    #[error(
        "standalone reload reported `{package}` missing although the primary pipeline \
         just loaded it; the implementations disagree about package existence"
    )]
    PackageVanished {
        package: PackageIdentifier,
        #[source]
        source: LoadError,
    },

    /// The standalone reload failed for a reason other than absence or
    /// interruption. Escalated for the same reason as `PackageVanished`.
    #[error("standalone reload of `{package}` failed")]
    ReloadFailed {
        package: PackageIdentifier,
        #[source]
        source: LoadError,
    },

    /// The workspace root cannot be recovered from the package's file path.
    #[error(
        "cannot derive a workspace root for `{package}`: build file `{build_file}` has \
         {file_segments} path components, but the package path accounts for \
         {trailing_segments} trailing components"
    )]
    WorkspaceRoot {
        package: PackageIdentifier,
        build_file: PathBuf,
        file_segments: usize,
        trailing_segments: usize,
    },

    /// The standalone loader could not be constructed.
    #[error("failed to construct a standalone loader for `{package}`")]
    LoaderConstruction {
        package: PackageIdentifier,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CrossCheckError {
    /// The package the failed check was examining.
    pub fn package(&self) -> &PackageIdentifier {
        match self {
            CrossCheckError::TargetSetDivergence { package, .. }
            | CrossCheckError::PackageVanished { package, .. }
            | CrossCheckError::ReloadFailed { package, .. }
            | CrossCheckError::WorkspaceRoot { package, .. }
            | CrossCheckError::LoaderConstruction { package, .. } => package,
        }
    }
}
