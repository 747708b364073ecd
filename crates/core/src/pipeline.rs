// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation pipelines
//!
//! A pipeline is the ordered list of checks bound to one endpoint. Steps run
//! in order and the first rejection decides the reply.

use crate::rejection::Rejection;
use crate::request::{Request, AUTHORIZATION};
use crate::validate;

/// A check over a whole request
pub type Check = fn(&Request) -> Result<(), Rejection>;

/// One named step of a pipeline
#[derive(Clone, Copy)]
pub struct Step {
    pub name: &'static str,
    pub check: Check,
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Step").field(&self.name).finish()
    }
}

/// Ordered, fail-fast list of steps
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: &'static str,
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new(name: &'static str, steps: Vec<Step>) -> Self {
        Self { name, steps }
    }

    /// No checks (public reads)
    pub fn open() -> Self {
        Self::new("open", Vec::new())
    }

    /// Token presence and length only
    pub fn token() -> Self {
        Self::new("token", TOKEN_STEPS.to_vec())
    }

    /// Credential checks for login
    pub fn login() -> Self {
        Self::new("login", LOGIN_STEPS.to_vec())
    }

    /// Token then every talker field, in wire-contract order
    pub fn talker_write() -> Self {
        let mut steps = TOKEN_STEPS.to_vec();
        steps.extend_from_slice(&TALKER_STEPS);
        Self::new("talker_write", steps)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step in order, stopping at the first rejection
    pub fn run(&self, request: &Request) -> Result<(), Rejection> {
        for step in &self.steps {
            if let Err(rejection) = (step.check)(request) {
                tracing::debug!(
                    pipeline = self.name,
                    step = step.name,
                    status = rejection.status(),
                    "request rejected"
                );
                return Err(rejection);
            }
        }
        Ok(())
    }
}

const fn step(name: &'static str, check: Check) -> Step {
    Step { name, check }
}

const TOKEN_STEPS: [Step; 2] = [
    step("token_present", token_present),
    step("token_length", token_length),
];

const TALKER_STEPS: [Step; 9] = [
    step("name_required", name_required),
    step("name_length", name_length),
    step("age_required", age_required),
    step("age_range", age_range),
    step("talk_required", talk_required),
    step("watched_at_required", watched_at_required),
    step("watched_at_format", watched_at_format),
    step("rate_required", rate_required),
    step("rate_range", rate_range),
];

const LOGIN_STEPS: [Step; 4] = [
    step("email_required", email_required),
    step("email_format", email_format),
    step("password_required", password_required),
    step("password_length", password_length),
];

// Request bindings: each step reads its input and defers to a field validator

fn token_present(req: &Request) -> Result<(), Rejection> {
    validate::token_present(req.header_value(AUTHORIZATION))
}

fn token_length(req: &Request) -> Result<(), Rejection> {
    validate::token_length(req.header_value(AUTHORIZATION))
}

fn name_required(req: &Request) -> Result<(), Rejection> {
    validate::name_required(req.field("name"))
}

fn name_length(req: &Request) -> Result<(), Rejection> {
    validate::name_length(req.field("name"))
}

fn age_required(req: &Request) -> Result<(), Rejection> {
    validate::age_required(req.field("age"))
}

fn age_range(req: &Request) -> Result<(), Rejection> {
    validate::age_range(req.field("age"))
}

fn talk_required(req: &Request) -> Result<(), Rejection> {
    validate::talk_required(req.field("talk"))
}

fn watched_at_required(req: &Request) -> Result<(), Rejection> {
    validate::watched_at_required(req.talk_field("watchedAt"))
}

fn watched_at_format(req: &Request) -> Result<(), Rejection> {
    validate::watched_at_format(req.talk_field("watchedAt"))
}

fn rate_required(req: &Request) -> Result<(), Rejection> {
    validate::rate_required(req.talk_field("rate"))
}

fn rate_range(req: &Request) -> Result<(), Rejection> {
    validate::rate_range(req.talk_field("rate"))
}

fn email_required(req: &Request) -> Result<(), Rejection> {
    validate::email_required(req.field("email"))
}

fn email_format(req: &Request) -> Result<(), Rejection> {
    validate::email_format(req.field("email"))
}

fn password_required(req: &Request) -> Result<(), Rejection> {
    validate::password_required(req.field("password"))
}

fn password_length(req: &Request) -> Result<(), Rejection> {
    validate::password_length(req.field("password"))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
