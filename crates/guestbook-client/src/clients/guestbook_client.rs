//! Guestbook client combining the read and write paths.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use common::AppResult;
use domain::{Entry, NewEntry};

use super::{EntriesView, MutationWriter, QueryReader};
use crate::config::ClientConfig;
use crate::graphql::GraphqlTransport;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Guestbook operations used by the command layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GuestbookApi: Send + Sync {
    /// List entries, normalized for display
    async fn list_entries(&self) -> EntriesView;

    /// Create an entry and return what the backend stored
    async fn create_entry(&self, entry: NewEntry) -> AppResult<Entry>;

    /// Create an entry and return the response body untouched
    async fn create_entry_raw(&self, entry: NewEntry) -> AppResult<serde_json::Value>;
}

/// Reader and writer sharing one transport.
#[derive(Debug, Clone)]
pub struct GuestbookClient {
    reader: QueryReader,
    writer: MutationWriter,
}

impl GuestbookClient {
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let transport = Arc::new(GraphqlTransport::new(config)?);
        debug!("Guestbook client targeting {}", transport.endpoint());

        Ok(Self {
            reader: QueryReader::new(transport.clone()),
            writer: MutationWriter::new(transport),
        })
    }

    pub fn reader(&self) -> &QueryReader {
        &self.reader
    }

    pub fn writer(&self) -> &MutationWriter {
        &self.writer
    }
}

#[async_trait]
impl GuestbookApi for GuestbookClient {
    async fn list_entries(&self) -> EntriesView {
        self.reader.fetch_entries().await
    }

    async fn create_entry(&self, entry: NewEntry) -> AppResult<Entry> {
        self.writer.create_entry_checked(&entry).await
    }

    async fn create_entry_raw(&self, entry: NewEntry) -> AppResult<serde_json::Value> {
        self.writer
            .create_entry(&entry.twitter_handle, &entry.story)
            .await
    }
}
