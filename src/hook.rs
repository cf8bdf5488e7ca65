//! Load-completion hook contract.
//!
//! The primary pipeline notifies a hook once per successfully loaded
//! package. The hook is a capability injected into the pipeline's package
//! builder, not a base class; implementations must tolerate being called
//! from whichever thread finished the load.

use crate::core::{Package, SemanticsConfig};

/// Receives a notification after a package has fully finished loading.
pub trait LoadCompletionHook: Send + Sync {
    /// Called exactly once per successfully loaded package.
    ///
    /// `package` is complete and will not be mutated further by the
    /// pipeline; implementations must not mutate it either. `semantics` is
    /// the evaluation configuration the load ran under.
    fn on_load_finished(&self, package: &Package, semantics: &SemanticsConfig);
}

/// A hook that does nothing. The pipeline's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl LoadCompletionHook for NoopHook {
    fn on_load_finished(&self, _package: &Package, _semantics: &SemanticsConfig) {}
}
