// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! talkers-core: talker records and request validation
//!
//! This crate provides:
//! - The talker data model as persisted and as submitted
//! - Transport-independent request and reply types
//! - Field validators and the fail-fast pipelines that order them
//! - Session token generation

pub mod pipeline;
pub mod rejection;
pub mod request;
pub mod talker;
pub mod token;
pub mod validate;

// Re-exports
pub use pipeline::{Check, Pipeline, Step};
pub use rejection::{messages, Rejection, RejectionKind};
pub use request::{Reply, ReplyBody, Request, AUTHORIZATION};
pub use talker::{Talk, Talker, TalkerDraft, TalkerId};
pub use token::{RandomTokenGen, SequentialTokenGen, TokenGen, TOKEN_LEN};
