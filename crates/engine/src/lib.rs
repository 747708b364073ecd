// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Talker record operations behind their validation pipelines

mod endpoint;
mod error;
mod talkers;

pub use endpoint::Endpoint;
pub use error::OperationError;
pub use talkers::{Talkers, ID_PARAM, SEARCH_PARAM};
