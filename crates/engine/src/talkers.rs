// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record operations over the talker collection
//!
//! Every operation reloads the full collection from the store. Mutations
//! apply their change to that copy and write the whole collection back.

use serde_json::json;
use talkers_core::{Reply, Request, Talker, TalkerDraft, TalkerId, TokenGen};
use talkers_storage::TalkerStore;
use tokio::sync::Mutex;

use crate::endpoint::Endpoint;
use crate::error::OperationError;

/// Path parameter naming the talker
pub const ID_PARAM: &str = "id";
/// Query parameter carrying the search term
pub const SEARCH_PARAM: &str = "q";

/// The talker service: validation pipelines in front of record operations
pub struct Talkers<S, T> {
    store: S,
    tokens: T,
    /// Serializes read-modify-write cycles within this process
    write_gate: Mutex<()>,
}

impl<S, T> Talkers<S, T>
where
    S: TalkerStore,
    T: TokenGen,
{
    pub fn new(store: S, tokens: T) -> Self {
        Self {
            store,
            tokens,
            write_gate: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the endpoint's pipeline, then its operation, and render the reply
    pub async fn handle(&self, endpoint: Endpoint, request: &Request) -> Reply {
        let result = match endpoint.pipeline().run(request) {
            Ok(()) => self.execute(endpoint, request).await,
            Err(rejection) => Err(rejection.into()),
        };

        match result {
            Ok(reply) => {
                tracing::debug!(%endpoint, status = reply.status, "handled");
                reply
            }
            Err(e) => {
                match &e {
                    OperationError::Storage(_) | OperationError::Encode(_) => {
                        tracing::error!(%endpoint, error = %e, "request failed")
                    }
                    _ => tracing::debug!(%endpoint, error = %e, "request refused"),
                }
                e.into_reply()
            }
        }
    }

    async fn execute(&self, endpoint: Endpoint, request: &Request) -> Result<Reply, OperationError> {
        match endpoint {
            Endpoint::Root => Ok(Reply::empty(200)),
            Endpoint::List => Ok(Reply::ok(serde_json::to_value(self.list().await?)?)),
            Endpoint::Search => {
                let found = self.search(request.query_value(SEARCH_PARAM)).await?;
                Ok(Reply::ok(serde_json::to_value(found)?))
            }
            Endpoint::Get => {
                let talker = self.get(request.param_value(ID_PARAM)).await?;
                Ok(Reply::ok(serde_json::to_value(talker)?))
            }
            Endpoint::Login => Ok(Reply::ok(json!({ "token": self.login() }))),
            Endpoint::Create => {
                let talker = self.create(draft_from(request)?).await?;
                Ok(Reply::created(serde_json::to_value(talker)?))
            }
            Endpoint::Replace => {
                let talker = self
                    .replace(request.param_value(ID_PARAM), draft_from(request)?)
                    .await?;
                Ok(Reply::ok(serde_json::to_value(talker)?))
            }
            Endpoint::Delete => {
                self.delete(request.param_value(ID_PARAM)).await?;
                Ok(Reply::no_content())
            }
        }
    }

    /// The whole collection, in insertion order
    pub async fn list(&self) -> Result<Vec<Talker>, OperationError> {
        Ok(self.store.load_all().await?)
    }

    /// Talkers whose name contains `term`, ignoring case
    ///
    /// An absent or empty term returns the whole collection.
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<Talker>, OperationError> {
        let talkers = self.store.load_all().await?;
        match term {
            Some(term) if !term.is_empty() => Ok(talkers
                .into_iter()
                .filter(|t| t.name_contains(term))
                .collect()),
            _ => Ok(talkers),
        }
    }

    /// First talker with the given id
    pub async fn get(&self, id: Option<&str>) -> Result<Talker, OperationError> {
        let id = parse_id(id)?;
        self.store
            .load_all()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| OperationError::NotFound(id.to_string()))
    }

    /// Append a talker numbered `collection size + 1`
    pub async fn create(&self, draft: TalkerDraft) -> Result<Talker, OperationError> {
        let _gate = self.write_gate.lock().await;

        let mut talkers = self.store.load_all().await?;
        let id = talkers.len() as TalkerId + 1;
        if talkers.iter().any(|t| t.id == id) {
            tracing::warn!(id, "assigned id already in use; collection now holds duplicates");
        }

        let talker = draft.into_talker(id);
        talkers.push(talker.clone());
        self.store.save_all(&talkers).await?;

        tracing::info!(id, name = %talker.name, "talker created");
        Ok(talker)
    }

    /// Overwrite name, age and talk of an existing talker
    pub async fn replace(
        &self,
        id: Option<&str>,
        draft: TalkerDraft,
    ) -> Result<Talker, OperationError> {
        let id = parse_id(id)?;
        let _gate = self.write_gate.lock().await;

        let mut talkers = self.store.load_all().await?;
        let talker = talkers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| OperationError::NotFound(id.to_string()))?;
        talker.replace_with(draft);
        let updated = talker.clone();
        self.store.save_all(&talkers).await?;

        tracing::info!(id, "talker replaced");
        Ok(updated)
    }

    /// Remove every talker with the given id
    pub async fn delete(&self, id: Option<&str>) -> Result<(), OperationError> {
        let id = parse_id(id)?;
        let _gate = self.write_gate.lock().await;

        let talkers = self.store.load_all().await?;
        if !talkers.iter().any(|t| t.id == id) {
            return Err(OperationError::NotFound(id.to_string()));
        }
        let remaining: Vec<Talker> = talkers.into_iter().filter(|t| t.id != id).collect();
        self.store.save_all(&remaining).await?;

        tracing::info!(id, remaining = remaining.len(), "talker deleted");
        Ok(())
    }

    /// Issue a fresh session token; nothing is recorded
    pub fn login(&self) -> String {
        self.tokens.next()
    }
}

/// Unparseable ids cannot match any talker
fn parse_id(raw: Option<&str>) -> Result<TalkerId, OperationError> {
    let raw = raw.unwrap_or_default();
    raw.trim()
        .parse()
        .map_err(|_| OperationError::NotFound(raw.to_string()))
}

fn draft_from(request: &Request) -> Result<TalkerDraft, OperationError> {
    let body = request
        .body_value()
        .ok_or_else(|| OperationError::Malformed("missing body".to_string()))?;
    TalkerDraft::from_body(body).map_err(|e| OperationError::Malformed(e.to_string()))
}

#[cfg(test)]
#[path = "talkers_tests.rs"]
mod tests;
