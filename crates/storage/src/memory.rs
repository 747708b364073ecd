// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory store

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use talkers_core::Talker;

use crate::store::{StorageError, TalkerStore};

/// Talker collection held in process memory
///
/// Clones share the same collection.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<Talker>>>,
    failing: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Talker>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            ..Self::default()
        }
    }

    /// Copy of the current collection
    pub fn snapshot(&self) -> Vec<Talker> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Make every subsequent load and save fail
    #[cfg(any(test, feature = "test-support"))]
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of successful saves
    #[cfg(any(test, feature = "test-support"))]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Io(io::Error::other("store unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl TalkerStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<Talker>, StorageError> {
        self.check_available()?;
        Ok(self.snapshot())
    }

    async fn save_all(&self, records: &[Talker]) -> Result<(), StorageError> {
        self.check_available()?;
        *self.records.lock().unwrap_or_else(|e| e.into_inner()) = records.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
