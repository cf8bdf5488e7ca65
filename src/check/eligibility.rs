//! Eligibility filter for the consistency check.
//!
//! Some identifiers name packages the standalone loader is known to model
//! differently for reasons unrelated to genuine bugs; checking them would
//! produce constant false positives, so they are skipped outright.

use crate::core::PackageIdentifier;

/// Decide whether a package is a valid cross-check candidate.
///
/// Excluded: the synthetic `external` package, anything outside the main
/// repository, and the pipeline's built-in defaults pseudo-package (which
/// has no on-disk source to reload from).
pub fn is_eligible(id: &PackageIdentifier) -> bool {
    if id.is_external_package() || !id.repository().is_main() || id.is_defaults_package() {
        return false;
    }
    true
}
