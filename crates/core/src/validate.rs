// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field validators
//!
//! Each validator is a pure check over one input value. Presence checks treat
//! absent, `null` and `""` alike; shape checks assume presence already passed
//! and reject anything of the wrong JSON type.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::rejection::{messages, Rejection};
use crate::token::TOKEN_LEN;

/// Minimum characters in a talker name
pub const NAME_MIN_LEN: usize = 3;
/// Minimum talker age
pub const MIN_AGE: i64 = 18;
/// Accepted talk rates (inclusive)
pub const RATE_RANGE: std::ops::RangeInclusive<i64> = 1..=5;
/// Minimum characters in a login password
pub const PASSWORD_MIN_LEN: usize = 6;

// dd/mm/yyyy; not checked against a calendar
#[allow(clippy::expect_used)]
static WATCHED_AT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-2][0-9]|3[0-1])/(0[0-9]|1[0-2])/\d{4}$")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&’*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("constant regex pattern is valid")
});

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn require(value: Option<&Value>, message: &'static str) -> Result<(), Rejection> {
    if is_missing(value) {
        Err(Rejection::validation(message))
    } else {
        Ok(())
    }
}

fn char_len(value: Option<&Value>) -> Option<usize> {
    value.and_then(Value::as_str).map(|s| s.chars().count())
}

fn matches(pattern: &Regex, value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| pattern.is_match(s))
}

// =============================================================================
// Token
// =============================================================================

/// The authorization header must be present and non-empty
pub fn token_present(header: Option<&str>) -> Result<(), Rejection> {
    match header {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(Rejection::auth(messages::TOKEN_MISSING)),
    }
}

/// The authorization header must be exactly [`TOKEN_LEN`] characters
pub fn token_length(header: Option<&str>) -> Result<(), Rejection> {
    match header {
        Some(value) if value.chars().count() == TOKEN_LEN => Ok(()),
        _ => Err(Rejection::auth(messages::TOKEN_INVALID)),
    }
}

// =============================================================================
// Talker fields
// =============================================================================

pub fn name_required(value: Option<&Value>) -> Result<(), Rejection> {
    require(value, messages::NAME_REQUIRED)
}

pub fn name_length(value: Option<&Value>) -> Result<(), Rejection> {
    match char_len(value) {
        Some(len) if len >= NAME_MIN_LEN => Ok(()),
        _ => Err(Rejection::validation(messages::NAME_LENGTH)),
    }
}

pub fn age_required(value: Option<&Value>) -> Result<(), Rejection> {
    require(value, messages::AGE_REQUIRED)
}

pub fn age_range(value: Option<&Value>) -> Result<(), Rejection> {
    match value.and_then(Value::as_i64) {
        Some(age) if age >= MIN_AGE => Ok(()),
        _ => Err(Rejection::validation(messages::AGE_RANGE)),
    }
}

pub fn talk_required(value: Option<&Value>) -> Result<(), Rejection> {
    require(value, messages::TALK_REQUIRED)
}

pub fn watched_at_required(value: Option<&Value>) -> Result<(), Rejection> {
    require(value, messages::WATCHED_AT_REQUIRED)
}

pub fn watched_at_format(value: Option<&Value>) -> Result<(), Rejection> {
    if matches(&WATCHED_AT_PATTERN, value) {
        Ok(())
    } else {
        Err(Rejection::validation(messages::WATCHED_AT_FORMAT))
    }
}

pub fn rate_required(value: Option<&Value>) -> Result<(), Rejection> {
    require(value, messages::RATE_REQUIRED)
}

pub fn rate_range(value: Option<&Value>) -> Result<(), Rejection> {
    match value.and_then(Value::as_i64) {
        Some(rate) if RATE_RANGE.contains(&rate) => Ok(()),
        _ => Err(Rejection::validation(messages::RATE_RANGE)),
    }
}

// =============================================================================
// Login credentials
// =============================================================================

pub fn email_required(value: Option<&Value>) -> Result<(), Rejection> {
    require(value, messages::EMAIL_REQUIRED)
}

pub fn email_format(value: Option<&Value>) -> Result<(), Rejection> {
    if matches(&EMAIL_PATTERN, value) {
        Ok(())
    } else {
        Err(Rejection::validation(messages::EMAIL_FORMAT))
    }
}

pub fn password_required(value: Option<&Value>) -> Result<(), Rejection> {
    require(value, messages::PASSWORD_REQUIRED)
}

pub fn password_length(value: Option<&Value>) -> Result<(), Rejection> {
    match char_len(value) {
        Some(len) if len >= PASSWORD_MIN_LEN => Ok(()),
        _ => Err(Rejection::validation(messages::PASSWORD_LENGTH)),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
