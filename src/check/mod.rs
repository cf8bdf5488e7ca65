//! Cross-implementation load consistency checking.
//!
//! After the primary pipeline finishes loading a package, `CrossCheck`
//! independently reloads the same package through a standalone loader and
//! asserts that both implementations produced the same set of target
//! labels. Registered as a load-completion hook, it gives every package
//! loaded inside a test run a free loader-equivalence regression check.
//!
//! Control flow per invocation:
//!
//! 1. Eligibility filter (skip synthetic and out-of-workspace packages)
//! 2. Workspace-root derivation from the package's own file path
//! 3. Standalone reload by identifier
//! 4. Target-set comparison; any difference is fatal
//!
//! Nothing persists across invocations except the mutual-exclusion lock.

mod diff;
mod eligibility;
mod errors;
mod workspace;

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::core::{Package, SemanticsConfig};
use crate::hook::LoadCompletionHook;
use crate::loader::{LoadError, LoaderConfig, LoaderFactory, RuleClassProvider};

pub use self::diff::DivergenceReport;
pub use self::eligibility::is_eligible;
pub use self::errors::CrossCheckError;
pub use self::workspace::derive_workspace_root;

/// Non-fatal result of a single consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Both implementations agreed on the target set.
    Consistent,
    /// The package was not an eligible candidate; nothing was checked.
    Skipped,
    /// The reload was interrupted; the check was abandoned without a verdict.
    Inconclusive,
}

/// Verifies loader equivalence for every package it is notified about.
///
/// Owns the rule-class provider handed to each fresh standalone loader and
/// the process-wide lock that serializes the reload-and-compare region
/// (the semantics evaluator behind the loader is not reentrant).
pub struct CrossCheck {
    rule_classes: Arc<dyn RuleClassProvider>,
    loader_factory: Arc<dyn LoaderFactory>,
    reload_lock: Mutex<()>,
}

impl CrossCheck {
    /// Create a verifier that reloads through loaders built by `loader_factory`,
    /// configured with `rule_classes`.
    pub fn new(
        rule_classes: Arc<dyn RuleClassProvider>,
        loader_factory: Arc<dyn LoaderFactory>,
    ) -> Self {
        CrossCheck {
            rule_classes,
            loader_factory,
            reload_lock: Mutex::new(()),
        }
    }

    /// Run one consistency check.
    ///
    /// Returns the non-fatal outcome, or the fatal error a caller is
    /// expected to surface loudly. The hook implementation below panics on
    /// `Err`; callers that want the error value use this method directly.
    pub fn check_package(
        &self,
        package: &Package,
        semantics: &SemanticsConfig,
    ) -> Result<CheckOutcome, CrossCheckError> {
        let id = package.identifier();
        if !is_eligible(id) {
            debug!("skipping consistency check for `{}`", id);
            return Ok(CheckOutcome::Skipped);
        }

        // One reload-and-compare region at a time, process-wide. Released
        // on every exit path by guard scoping.
        let _region = self.reload_lock.lock().unwrap();

        let workspace_root = derive_workspace_root(package)?;
        debug!(
            "reloading `{}` standalone from workspace `{}`",
            id,
            workspace_root.display()
        );

        let loader = self
            .loader_factory
            .open(LoaderConfig {
                workspace_root,
                rule_classes: Arc::clone(&self.rule_classes),
                semantics: semantics.clone(),
            })
            .map_err(|source| CrossCheckError::LoaderConstruction {
                package: id.clone(),
                source: source.into(),
            })?;

        let reloaded = match loader.load_package(id) {
            Ok(pkg) => pkg,
            Err(LoadError::Interrupted { .. }) => {
                // Indistinguishable from environmental shutdown; abandon
                // this check without a verdict.
                debug!("reload of `{}` interrupted, check abandoned", id);
                return Ok(CheckOutcome::Inconclusive);
            }
            Err(source @ LoadError::NoSuchPackage { .. }) => {
                return Err(CrossCheckError::PackageVanished {
                    package: id.clone(),
                    source,
                });
            }
            Err(source) => {
                return Err(CrossCheckError::ReloadFailed {
                    package: id.clone(),
                    source,
                });
            }
        };

        let report = DivergenceReport::between(package, &reloaded);
        if report.is_empty() {
            Ok(CheckOutcome::Consistent)
        } else {
            Err(CrossCheckError::TargetSetDivergence {
                package: id.clone(),
                report,
            })
        }
    }
}

impl LoadCompletionHook for CrossCheck {
    /// Check the freshly loaded package, panicking on any fatal outcome so
    /// the failure propagates through the test runner.
    fn on_load_finished(&self, package: &Package, semantics: &SemanticsConfig) {
        if let Err(err) = self.check_package(package, semantics) {
            panic!("{}", err);
        }
    }
}
