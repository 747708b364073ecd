// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Whole-collection storage for talker records

mod json;
mod memory;
mod store;
mod traced;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{StorageError, TalkerStore};
pub use traced::TracedStore;
