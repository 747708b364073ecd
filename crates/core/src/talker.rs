// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Talker records as persisted and as submitted by clients

use serde::{Deserialize, Serialize};

/// Talker identifier (positive, assigned at creation)
pub type TalkerId = u64;

/// A conference speaker profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talker {
    pub id: TalkerId,
    pub name: String,
    pub age: i64,
    pub talk: Talk,
}

/// The talk evaluation nested in every talker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    #[serde(rename = "watchedAt")]
    pub watched_at: String,
    pub rate: i64,
}

/// Talker fields supplied by a client, before an id is assigned
///
/// Only built from bodies that already passed the talker pipeline, so
/// deserialization failures here indicate a pipeline gap rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TalkerDraft {
    pub name: String,
    pub age: i64,
    pub talk: Talk,
}

impl TalkerDraft {
    /// Build a draft from a request body, ignoring unknown fields
    pub fn from_body(body: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(body)
    }

    /// Attach an id, producing the record to persist
    pub fn into_talker(self, id: TalkerId) -> Talker {
        Talker {
            id,
            name: self.name,
            age: self.age,
            talk: self.talk,
        }
    }
}

impl Talker {
    /// Overwrite the profile fields in place, keeping the id
    pub fn replace_with(&mut self, draft: TalkerDraft) {
        self.name = draft.name;
        self.age = draft.age;
        self.talk = draft.talk;
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
#[path = "talker_tests.rs"]
mod tests;
