// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Endpoints and the pipeline bound to each

use talkers_core::Pipeline;

/// Every operation the service answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Liveness probe, always empty 200
    Root,
    List,
    Search,
    Get,
    Login,
    Create,
    Replace,
    Delete,
}

impl Endpoint {
    pub const ALL: [Endpoint; 8] = [
        Endpoint::Root,
        Endpoint::List,
        Endpoint::Search,
        Endpoint::Get,
        Endpoint::Login,
        Endpoint::Create,
        Endpoint::Replace,
        Endpoint::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Root => "root",
            Endpoint::List => "list",
            Endpoint::Search => "search",
            Endpoint::Get => "get",
            Endpoint::Login => "login",
            Endpoint::Create => "create",
            Endpoint::Replace => "replace",
            Endpoint::Delete => "delete",
        }
    }

    /// Validation run before the record operation
    pub fn pipeline(self) -> Pipeline {
        match self {
            Endpoint::Root | Endpoint::List | Endpoint::Get => Pipeline::open(),
            Endpoint::Search | Endpoint::Delete => Pipeline::token(),
            Endpoint::Login => Pipeline::login(),
            Endpoint::Create | Endpoint::Replace => Pipeline::talker_write(),
        }
    }

    /// Whether the operation rewrites the collection
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            Endpoint::Create | Endpoint::Replace | Endpoint::Delete
        )
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
