// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport-independent request and reply types

use std::collections::BTreeMap;

use serde_json::{json, Value};

/// Header carrying the session token
pub const AUTHORIZATION: &str = "authorization";

/// An inbound request, decoupled from any HTTP binding
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    headers: BTreeMap<String, String>,
    params: BTreeMap<String, String>,
    query: BTreeMap<String, String>,
    body: Option<Value>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header (names are case-insensitive)
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Add a path parameter
    pub fn param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    /// Add a query parameter
    pub fn query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.insert(name.to_string(), value.into());
        self
    }

    /// Set the JSON body
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    pub fn body_value(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Top-level body field; absent when the body is not an object
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref()?.as_object()?.get(name)
    }

    /// Field nested in the `talk` object; absent when `talk` is not an object
    pub fn talk_field(&self, name: &str) -> Option<&Value> {
        self.field("talk")?.as_object()?.get(name)
    }
}

/// Reply body: nothing, or a JSON document
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    Empty,
    Json(Value),
}

/// An outbound reply: status plus payload
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: ReplyBody,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    pub fn created(body: Value) -> Self {
        Self::json(201, body)
    }

    pub fn no_content() -> Self {
        Self::empty(204)
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: ReplyBody::Empty,
        }
    }

    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: ReplyBody::Json(body),
        }
    }

    /// Error-shaped reply: `{"message": ...}`
    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, json!({ "message": message.into() }))
    }

    /// The JSON payload, if any
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            ReplyBody::Json(value) => Some(value),
            ReplyBody::Empty => None,
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
