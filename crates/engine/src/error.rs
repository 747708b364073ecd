// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for record operations

use talkers_core::{messages, Rejection, Reply};
use talkers_storage::StorageError;
use thiserror::Error;

/// Errors that end a request before a success reply
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),
    #[error("talker not found: {0}")]
    NotFound(String),
    #[error("malformed body: {0}")]
    Malformed(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl OperationError {
    pub fn status(&self) -> u16 {
        match self {
            OperationError::Rejected(rejection) => rejection.status(),
            OperationError::NotFound(_) => 404,
            OperationError::Malformed(_) => 400,
            OperationError::Storage(_) | OperationError::Encode(_) => 500,
        }
    }

    /// Render as a `{"message": ...}` reply
    pub fn into_reply(self) -> Reply {
        let status = self.status();
        match self {
            OperationError::Rejected(rejection) => Reply::message(status, rejection.message),
            OperationError::NotFound(_) => Reply::message(status, messages::NOT_FOUND),
            OperationError::Malformed(_) => Reply::message(status, messages::MALFORMED_BODY),
            OperationError::Storage(_) | OperationError::Encode(_) => {
                Reply::message(status, messages::STORAGE_FAILURE)
            }
        }
    }
}
