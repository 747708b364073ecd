//! Shared harness for behavioral specs.
//!
//! `Service` owns a temp directory holding the JSON data file and a router
//! wired exactly as the daemon wires it. Calls are built fluently and the
//! returned `Outcome` carries chained assertions.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use talkers_core::RandomTokenGen;
use talkers_engine::Talkers;
use talkers_storage::{JsonFileStore, TracedStore};
use tempfile::TempDir;
use tower::ServiceExt;

pub use serde_json::{json, Value};
pub use talkers_core::messages;

/// Any 16-character string passes the token checks
pub const TOKEN: &str = "0123456789abcdef";

/// A talker service backed by a fresh data file
pub struct Service {
    _dir: TempDir,
    data_path: PathBuf,
    router: Router,
}

impl Service {
    /// Service with an empty collection
    pub fn empty() -> Self {
        Self::with_talkers(json!([]))
    }

    /// Service whose data file starts with `talkers`
    pub fn with_talkers(talkers: Value) -> Self {
        let dir = TempDir::new().unwrap();
        let data_path = dir.path().join("talker.json");
        std::fs::write(&data_path, talkers.to_string()).unwrap();

        let store = TracedStore::new(JsonFileStore::new(&data_path));
        let router = talkers_server::router(Arc::new(Talkers::new(store, RandomTokenGen)));

        Self {
            _dir: dir,
            data_path,
            router,
        }
    }

    /// Current contents of the data file
    pub fn persisted(&self) -> Value {
        let raw = std::fs::read_to_string(&self.data_path).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    /// Corrupt the data file
    pub fn corrupt(&self) {
        std::fs::write(&self.data_path, "{oops").unwrap();
    }

    pub fn get(&self, uri: &str) -> Call<'_> {
        self.call(Method::GET, uri)
    }

    pub fn post(&self, uri: &str) -> Call<'_> {
        self.call(Method::POST, uri)
    }

    pub fn put(&self, uri: &str) -> Call<'_> {
        self.call(Method::PUT, uri)
    }

    pub fn delete(&self, uri: &str) -> Call<'_> {
        self.call(Method::DELETE, uri)
    }

    fn call(&self, method: Method, uri: &str) -> Call<'_> {
        Call {
            service: self,
            method,
            uri: uri.to_string(),
            token: None,
            body: None,
        }
    }
}

/// A request under construction
pub struct Call<'a> {
    service: &'a Service,
    method: Method,
    uri: String,
    token: Option<String>,
    body: Option<String>,
}

impl Call<'_> {
    /// Send an authorization header
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Send the standard valid token
    pub fn authed(self) -> Self {
        self.token(TOKEN)
    }

    /// Send a JSON body
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Send a raw body
    pub fn raw(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub async fn send(self) -> Outcome {
        let mut builder = Request::builder().method(self.method).uri(&self.uri);
        if let Some(token) = &self.token {
            builder = builder.header("authorization", token);
        }
        if self.body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let request = builder
            .body(Body::from(self.body.unwrap_or_default()))
            .unwrap();

        let response = self.service.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes).unwrap())
        };

        Outcome { status, body }
    }
}

/// A received reply with chained assertions
#[derive(Debug)]
pub struct Outcome {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Outcome {
    pub fn status_is(self, expected: u16) -> Self {
        assert_eq!(
            self.status.as_u16(),
            expected,
            "unexpected status, body: {:?}",
            self.body
        );
        self
    }

    pub fn message_is(self, expected: &str) -> Self {
        assert_eq!(
            self.body.as_ref().and_then(|b| b["message"].as_str()),
            Some(expected),
            "status {}",
            self.status
        );
        self
    }

    pub fn body_is(self, expected: Value) -> Self {
        similar_asserts::assert_eq!(self.body.as_ref(), Some(&expected));
        self
    }

    pub fn body_is_empty(self) -> Self {
        assert_eq!(self.body, None);
        self
    }

    pub fn body(&self) -> &Value {
        self.body.as_ref().expect("reply has no body")
    }
}

/// A talker body with every field valid
pub fn valid_talker() -> Value {
    json!({
        "name": "Danielle Santos",
        "age": 56,
        "talk": {"watchedAt": "22/10/2019", "rate": 5},
    })
}

/// Three stored talkers with ids 1..=3
pub fn three_talkers() -> Value {
    json!([
        {"id": 1, "name": "Henrique Albuquerque", "age": 62, "talk": {"watchedAt": "23/10/2020", "rate": 5}},
        {"id": 2, "name": "Heloísa Albuquerque", "age": 67, "talk": {"watchedAt": "23/10/2020", "rate": 5}},
        {"id": 3, "name": "Ricardo Xavier Filho", "age": 33, "talk": {"watchedAt": "23/10/2020", "rate": 5}},
    ])
}
