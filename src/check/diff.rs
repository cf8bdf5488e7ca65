//! Target-set comparison between two loads of the same package.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::core::{Label, Package};

/// The symmetric difference between two loads' target-label sets.
///
/// Ephemeral: computed per check, discarded after reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DivergenceReport {
    /// Labels the primary pipeline saw that the standalone reload did not
    pub only_in_original: BTreeSet<Label>,

    /// Labels the standalone reload saw that the primary pipeline did not
    pub only_in_reloaded: BTreeSet<Label>,
}

impl DivergenceReport {
    /// Compare the target-label sets of two loads of the same package.
    pub fn between(original: &Package, reloaded: &Package) -> Self {
        let original_labels = original.target_labels();
        let reloaded_labels = reloaded.target_labels();

        DivergenceReport {
            only_in_original: original_labels
                .difference(&reloaded_labels)
                .cloned()
                .collect(),
            only_in_reloaded: reloaded_labels
                .difference(&original_labels)
                .cloned()
                .collect(),
        }
    }

    /// True when both loads agreed on every target label.
    pub fn is_empty(&self) -> bool {
        self.only_in_original.is_empty() && self.only_in_reloaded.is_empty()
    }
}

fn fmt_labels(f: &mut fmt::Formatter<'_>, labels: &BTreeSet<Label>) -> fmt::Result {
    if labels.is_empty() {
        return write!(f, "none");
    }
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", label)?;
    }
    Ok(())
}

impl fmt::Display for DivergenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "only in original load: [")?;
        fmt_labels(f, &self.only_in_original)?;
        write!(f, "], only in standalone reload: [")?;
        fmt_labels(f, &self.only_in_reloaded)?;
        write!(f, "]")
    }
}
