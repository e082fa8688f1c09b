//! Guestbook entry entity and related types.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainResult;

/// Opaque entry identifier assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A stored guestbook record. Created by the backend, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique key
    pub id: EntryId,
    /// Publication timestamp, used for display order
    pub created_at: DateTime<Utc>,
    pub twitter_handle: String,
    pub story: String,
}

impl Entry {
    /// Order by creation time, falling back to the id for equal timestamps.
    pub fn cmp_by_created_at(&self, other: &Entry) -> Ordering {
        self.created_at
            .cmp(&other.created_at)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Sort entries for display, newest first.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.cmp_by_created_at(a));
}

/// Input for creating an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    /// Author's twitter handle
    #[validate(length(min = 1, message = "must not be empty"))]
    pub twitter_handle: String,
    /// Story text
    #[validate(length(min = 1, message = "must not be empty"))]
    pub story: String,
}

impl NewEntry {
    pub fn new(twitter_handle: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            twitter_handle: twitter_handle.into(),
            story: story.into(),
        }
    }

    /// Check that both fields are non-empty.
    pub fn check(&self) -> DomainResult<()> {
        self.validate()?;
        Ok(())
    }
}
