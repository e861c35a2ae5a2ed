use std::sync::Arc;

use oxlens_index::SourceIndex;
use tracing::{debug, trace};

use crate::config::HighlightConfig;
use crate::occurrences::{Occurrences, find_occurrences};

/// Stateful front of the resolver for an editor host.
///
/// The host moves the caret, calls [`run`](Self::run) against the latest index and reads
/// the result through [`occurrences`](Self::occurrences). Each run replaces the stored
/// result with a new snapshot; snapshots handed out earlier stay valid and unchanged.
#[derive(Debug, Clone)]
pub struct OccurrencesFinder {
    caret: usize,
    occurrences: Arc<Occurrences>,
    config: HighlightConfig,
}

impl OccurrencesFinder {
    pub fn new(config: HighlightConfig) -> Self {
        Self {
            caret: 0,
            occurrences: Arc::new(Occurrences::new()),
            config,
        }
    }

    pub fn caret_position(&self) -> usize {
        self.caret
    }

    /// Takes effect on the next [`run`](Self::run).
    pub fn set_caret_position(&mut self, offset: usize) {
        self.caret = offset;
    }

    pub fn run(&mut self, index: &SourceIndex) {
        let occurrences = if self.config.enabled {
            find_occurrences(index, self.caret)
        } else {
            debug!("occurrence highlighting disabled");
            Occurrences::new()
        };
        self.occurrences = Arc::new(occurrences);
    }

    /// The result of the last run; empty before the first one.
    pub fn occurrences(&self) -> Arc<Occurrences> {
        Arc::clone(&self.occurrences)
    }

    /// Resolution runs to completion synchronously, so there is nothing to interrupt.
    pub fn cancel(&self) {
        trace!(caret = self.caret, "cancel requested");
    }

    pub fn priority(&self) -> u32 {
        self.config.priority
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }
}

impl Default for OccurrencesFinder {
    fn default() -> Self {
        Self::new(HighlightConfig::default())
    }
}
