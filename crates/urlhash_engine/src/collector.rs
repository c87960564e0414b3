use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::ResultEntry;

/// Append-only result sink shared by every worker of a run.
#[derive(Debug, Default)]
pub struct ResultCollector {
    entries: Mutex<Vec<ResultEntry>>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn add(&self, entry: ResultEntry) {
        self.lock().push(entry);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes everything recorded so far, leaving the collector empty.
    pub fn drain(&self) -> Vec<ResultEntry> {
        std::mem::take(&mut *self.lock())
    }

    // Entries are plain values, so a panic while holding the lock cannot tear one.
    fn lock(&self) -> MutexGuard<'_, Vec<ResultEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
