// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP routing and translation to service requests

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use talkers_core::{messages, Reply, ReplyBody, Request, TokenGen};
use talkers_engine::{Endpoint, Talkers, ID_PARAM};
use talkers_storage::TalkerStore;

/// Shared service handle
pub type AppState<S, T> = Arc<Talkers<S, T>>;

/// Build the router for every talker endpoint
pub fn router<S, T>(talkers: AppState<S, T>) -> Router
where
    S: TalkerStore,
    T: TokenGen,
{
    Router::new()
        .route("/", get(root::<S, T>))
        .route("/login", post(login::<S, T>))
        .route("/talker", get(list::<S, T>).post(create::<S, T>))
        .route("/talker/search", get(search::<S, T>))
        .route(
            "/talker/{id}",
            get(get_one::<S, T>)
                .put(replace::<S, T>)
                .delete(delete::<S, T>),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(talkers)
}

async fn root<S: TalkerStore, T: TokenGen>(State(talkers): State<AppState<S, T>>) -> Response {
    dispatch(&talkers, Endpoint::Root, Request::new()).await
}

async fn list<S: TalkerStore, T: TokenGen>(State(talkers): State<AppState<S, T>>) -> Response {
    dispatch(&talkers, Endpoint::List, Request::new()).await
}

async fn search<S: TalkerStore, T: TokenGen>(
    State(talkers): State<AppState<S, T>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let mut request = with_headers(Request::new(), &headers);
    for (name, value) in query {
        request = request.query(&name, value);
    }
    dispatch(&talkers, Endpoint::Search, request).await
}

async fn get_one<S: TalkerStore, T: TokenGen>(
    State(talkers): State<AppState<S, T>>,
    Path(id): Path<String>,
) -> Response {
    dispatch(&talkers, Endpoint::Get, Request::new().param(ID_PARAM, id)).await
}

async fn login<S: TalkerStore, T: TokenGen>(
    State(talkers): State<AppState<S, T>>,
    body: Bytes,
) -> Response {
    match with_body(Request::new(), &body) {
        Ok(request) => dispatch(&talkers, Endpoint::Login, request).await,
        Err(response) => response,
    }
}

async fn create<S: TalkerStore, T: TokenGen>(
    State(talkers): State<AppState<S, T>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match with_body(with_headers(Request::new(), &headers), &body) {
        Ok(request) => dispatch(&talkers, Endpoint::Create, request).await,
        Err(response) => response,
    }
}

async fn replace<S: TalkerStore, T: TokenGen>(
    State(talkers): State<AppState<S, T>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = with_headers(Request::new().param(ID_PARAM, id), &headers);
    match with_body(request, &body) {
        Ok(request) => dispatch(&talkers, Endpoint::Replace, request).await,
        Err(response) => response,
    }
}

async fn delete<S: TalkerStore, T: TokenGen>(
    State(talkers): State<AppState<S, T>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let request = with_headers(Request::new().param(ID_PARAM, id), &headers);
    dispatch(&talkers, Endpoint::Delete, request).await
}

async fn dispatch<S: TalkerStore, T: TokenGen>(
    talkers: &Talkers<S, T>,
    endpoint: Endpoint,
    request: Request,
) -> Response {
    into_response(talkers.handle(endpoint, &request).await)
}

/// Copy headers; values that are not valid text are kept lossily
fn with_headers(mut request: Request, headers: &HeaderMap) -> Request {
    for (name, value) in headers {
        request = request.header(
            name.as_str(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }
    request
}

/// Attach a JSON body; an empty body reads as `{}`
fn with_body(request: Request, body: &Bytes) -> Result<Request, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(request.body(serde_json::Value::Object(Default::default())));
    }
    match serde_json::from_slice(body) {
        Ok(value) => Ok(request.body(value)),
        Err(e) => {
            tracing::debug!(error = %e, "unparseable request body");
            Err(into_response(Reply::message(400, messages::MALFORMED_BODY)))
        }
    }
}

fn into_response(reply: Reply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match reply.body {
        ReplyBody::Json(value) => (status, Json(value)).into_response(),
        ReplyBody::Empty => (status, Body::empty()).into_response(),
    }
}

async fn log_request(request: axum::extract::Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    tracing::debug!(%method, %path, status = response.status().as_u16(), "request");
    response
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
