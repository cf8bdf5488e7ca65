//! Workspace-root recovery from a package's own file path.
//!
//! The root is derived purely by path arithmetic: the package path is a
//! strict suffix of the build file's directory, so dropping the package's
//! segment count plus one (the build-definition file itself) from the end
//! of the file path yields the workspace root. No external configuration
//! is consulted.

use std::path::PathBuf;

use crate::check::errors::CrossCheckError;
use crate::core::Package;

/// Derive the workspace root of a loaded package.
///
/// Fails if the build-file path does not have enough components for the
/// arithmetic to leave a non-empty root. This can happen with symlinked or
/// otherwise non-standard layouts where the package path is not a suffix
/// of the file path; such inputs are malformed for the check, not evidence
/// of divergence.
pub fn derive_workspace_root(package: &Package) -> Result<PathBuf, CrossCheckError> {
    let trailing_segments = package.identifier().segment_count() + 1;
    let components: Vec<_> = package.build_file().components().collect();

    // The root must keep at least one component.
    if components.len() <= trailing_segments {
        return Err(CrossCheckError::WorkspaceRoot {
            package: package.identifier().clone(),
            build_file: package.build_file().to_path_buf(),
            file_segments: components.len(),
            trailing_segments,
        });
    }

    let keep = components.len() - trailing_segments;
    Ok(components[..keep].iter().collect())
}
