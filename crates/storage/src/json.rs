// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file store
//!
//! The file holds the whole collection as one JSON array. Reads parse the
//! full file; writes overwrite it in place with no locking or atomic rename.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use talkers_core::Talker;

use crate::store::{StorageError, TalkerStore};

/// Talker collection persisted as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed an empty collection if the file does not exist yet
    ///
    /// Returns true when a new file was created.
    pub async fn ensure_exists(&self) -> Result<bool, StorageError> {
        match tokio::fs::metadata(&self.path).await {
            Ok(_) => return Ok(false),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        self.save_all(&[]).await?;
        Ok(true)
    }
}

#[async_trait]
impl TalkerStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Talker>, StorageError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    async fn save_all(&self, records: &[Talker]) -> Result<(), StorageError> {
        let contents = serde_json::to_vec(records)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
