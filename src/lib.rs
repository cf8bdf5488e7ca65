//! Crosscheck - cross-implementation consistency checking for package loaders
//!
//! After a package finishes loading through a primary, incremental loading
//! pipeline, this crate reloads the same package through a standalone batch
//! loader and fails loudly if the two implementations disagree on the
//! package's set of target labels. Registered as a load-completion hook in
//! test runs, it turns every loaded package into a loader-equivalence
//! regression test.

pub mod check;
pub mod core;
pub mod hook;
pub mod loader;

/// Test utilities for crosscheck unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides workspace fixtures and loader wrappers for
/// concurrency and interruption scenarios.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    label::Label, package::Package, package_id::PackageIdentifier,
    package_id::RepositoryName, semantics::SemanticsConfig, target::Target,
};

pub use check::{CheckOutcome, CrossCheck, CrossCheckError, DivergenceReport};
pub use hook::{LoadCompletionHook, NoopHook};
pub use loader::{
    BatchLoader, BatchLoaderFactory, DefaultRuleClasses, LoadError, LoaderConfig, LoaderFactory,
    PackageLoader, RuleClassProvider, ALLOW_UNKNOWN_RULE_CLASSES,
};
