//! Core data structures for crosscheck.
//!
//! This module contains the foundational types the verifier works over:
//! - Identity values (PackageIdentifier, Label)
//! - Loaded package representations (Package, Target)
//! - The opaque semantics bundle threaded between loads

pub mod label;
pub mod package;
pub mod package_id;
pub mod semantics;
pub mod target;

pub use label::Label;
pub use package::{Package, BUILD_FILE_NAME};
pub use package_id::{
    PackageIdentifier, RepositoryName, DEFAULTS_PACKAGE_PATH, EXTERNAL_PACKAGE_PATH,
};
pub use semantics::SemanticsConfig;
pub use target::Target;
