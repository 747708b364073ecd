// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store accessor trait

use async_trait::async_trait;
use std::io;
use talkers_core::Talker;
use thiserror::Error;

/// Errors reading or writing the persisted collection
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads and overwrites the full talker collection
///
/// There are no partial updates: every read returns the whole collection and
/// every write replaces it.
#[async_trait]
pub trait TalkerStore: Send + Sync + 'static {
    /// Read the entire collection, in insertion order
    async fn load_all(&self) -> Result<Vec<Talker>, StorageError>;

    /// Replace the entire collection
    async fn save_all(&self, records: &[Talker]) -> Result<(), StorageError>;
}
