// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session token generation
//!
//! Tokens are opaque and never stored; later requests are only checked for
//! presence and length.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::RngCore;

/// Characters in every issued token
pub const TOKEN_LEN: usize = 16;

/// Generates session tokens
pub trait TokenGen: Clone + Send + Sync + 'static {
    fn next(&self) -> String;
}

/// Random tokens for production: 8 random bytes as 16 hex characters
#[derive(Clone, Default)]
pub struct RandomTokenGen;

impl TokenGen for RandomTokenGen {
    fn next(&self) -> String {
        let mut bytes = [0u8; TOKEN_LEN / 2];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex_encode(&bytes)
    }
}

/// Sequential tokens for testing, zero-padded to [`TOKEN_LEN`]
#[derive(Clone, Default)]
pub struct SequentialTokenGen {
    counter: Arc<AtomicU64>,
}

impl SequentialTokenGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenGen for SequentialTokenGen {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{:0width$x}", n, width = TOKEN_LEN)
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
