//! Test utilities for crosscheck unit tests.
//!
//! Provides on-disk workspace fixtures plus loader wrappers that observe
//! or disturb the reload path (concurrency counting, injected
//! interruption).

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::{Package, PackageIdentifier};
use crate::loader::{LoadError, LoaderConfig, LoaderFactory, PackageLoader};

/// Wraps a factory so every produced loader counts concurrent
/// `load_package` entries. Used to observe the mutual-exclusion region.
pub struct CountingFactory<F> {
    inner: F,
    current_loads: Arc<AtomicUsize>,
    /// High-water mark of concurrent loads observed.
    pub max_concurrent_loads: Arc<AtomicUsize>,
}

impl<F> CountingFactory<F> {
    pub fn new(inner: F) -> Self {
        CountingFactory {
            inner,
            current_loads: Arc::new(AtomicUsize::new(0)),
            max_concurrent_loads: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<F: LoaderFactory> LoaderFactory for CountingFactory<F> {
    fn open(&self, config: LoaderConfig) -> anyhow::Result<Box<dyn PackageLoader>> {
        Ok(Box::new(CountingLoader {
            inner: self.inner.open(config)?,
            current_loads: Arc::clone(&self.current_loads),
            max_concurrent_loads: Arc::clone(&self.max_concurrent_loads),
        }))
    }
}

struct CountingLoader {
    inner: Box<dyn PackageLoader>,
    current_loads: Arc<AtomicUsize>,
    max_concurrent_loads: Arc<AtomicUsize>,
}

impl PackageLoader for CountingLoader {
    fn load_package(&self, id: &PackageIdentifier) -> Result<Package, LoadError> {
        let entered = self.current_loads.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_concurrent_loads
            .fetch_max(entered, Ordering::SeqCst);

        // Widen the race window so genuine interleaving would be caught.
        std::thread::sleep(Duration::from_millis(1));
        let result = self.inner.load_package(id);

        self.current_loads.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

/// Factory whose loaders always report an interrupted load.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterruptingFactory;

impl LoaderFactory for InterruptingFactory {
    fn open(&self, _config: LoaderConfig) -> anyhow::Result<Box<dyn PackageLoader>> {
        Ok(Box::new(InterruptingLoader))
    }
}

struct InterruptingLoader;

impl PackageLoader for InterruptingLoader {
    fn load_package(&self, id: &PackageIdentifier) -> Result<Package, LoadError> {
        Err(LoadError::Interrupted {
            package: id.clone(),
        })
    }
}
