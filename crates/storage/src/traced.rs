// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use async_trait::async_trait;
use talkers_core::Talker;
use tracing::Instrument;

use crate::store::{StorageError, TalkerStore};

/// Wrapper that adds tracing to any TalkerStore
#[derive(Clone)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: TalkerStore> TalkerStore for TracedStore<S> {
    async fn load_all(&self) -> Result<Vec<Talker>, StorageError> {
        let span = tracing::debug_span!("store.load_all");
        async {
            let start = std::time::Instant::now();
            let result = self.inner.load_all().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(records) => tracing::debug!(count = records.len(), elapsed_ms, "loaded"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "load failed"),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn save_all(&self, records: &[Talker]) -> Result<(), StorageError> {
        let span = tracing::debug_span!("store.save_all", count = records.len());
        async {
            let start = std::time::Instant::now();
            let result = self.inner.save_all(records).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::debug!(elapsed_ms, "saved"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "save failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
