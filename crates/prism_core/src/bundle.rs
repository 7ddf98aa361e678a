//! Aggregate output of one submission.

use crate::{ArtifactKind, ArtifactResult};
use std::collections::BTreeMap;

/// Results keyed by artifact kind, iterated in generation order.
///
/// An absent kind was not requested. A present kind whose result failed was
/// attempted and failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultBundle {
    entries: BTreeMap<ArtifactKind, ArtifactResult>,
}

impl ResultBundle {
    /// An empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result under its own kind, replacing any earlier one.
    pub fn insert(&mut self, result: ArtifactResult) -> Option<ArtifactResult> {
        self.entries.insert(result.kind(), result)
    }

    /// Result for a kind, if it was attempted.
    pub fn get(&self, kind: ArtifactKind) -> Option<&ArtifactResult> {
        self.entries.get(&kind)
    }

    /// Whether the kind was attempted.
    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Number of attempted kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Results in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &ArtifactResult> {
        self.entries.values()
    }

    /// Attempted kinds in generation order.
    pub fn kinds(&self) -> impl Iterator<Item = ArtifactKind> + '_ {
        self.entries.keys().copied()
    }

    /// Failed results in generation order.
    pub fn failures(&self) -> impl Iterator<Item = &ArtifactResult> {
        self.iter().filter(|r| !r.is_success())
    }

    /// True when at least one artifact was produced.
    pub fn has_successes(&self) -> bool {
        self.iter().any(ArtifactResult::is_success)
    }

    /// True when every attempted artifact succeeded.
    pub fn is_complete_success(&self) -> bool {
        self.iter().all(ArtifactResult::is_success)
    }
}

impl IntoIterator for ResultBundle {
    type Item = ArtifactResult;
    type IntoIter = std::collections::btree_map::IntoValues<ArtifactKind, ArtifactResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}
