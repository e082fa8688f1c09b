//! Write path: create one entry.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use common::AppResult;
use domain::{Entry, NewEntry};

use crate::graphql::{
    CreateEntryData, CreateEntryVariables, Envelope, GraphqlRequest, GraphqlTransport,
    CREATE_GUESTBOOK_ENTRY_MUTATION,
};

/// Issues the create mutation. Every call creates a new entry.
#[derive(Debug, Clone)]
pub struct MutationWriter {
    transport: Arc<GraphqlTransport>,
}

impl MutationWriter {
    pub fn new(transport: Arc<GraphqlTransport>) -> Self {
        Self { transport }
    }

    /// Create an entry and return the decoded response body as-is.
    ///
    /// GraphQL `errors` are not inspected; callers branch on them.
    pub async fn create_entry(&self, twitter_handle: &str, story: &str) -> AppResult<Value> {
        let body: Value = self
            .transport
            .post(&Self::request(twitter_handle, story))
            .await?;
        debug!("Create mutation for @{} answered", twitter_handle);
        Ok(body)
    }

    /// Create an entry and return it, turning GraphQL errors into `AppError::Graphql`.
    pub async fn create_entry_checked(&self, entry: &NewEntry) -> AppResult<Entry> {
        let envelope: Envelope<Value> = self
            .transport
            .post(&Self::request(&entry.twitter_handle, &entry.story))
            .await?;
        let envelope = envelope.into_typed::<CreateEntryData>()?;

        let created = envelope.into_result().into_app_result()?.create_guestbook_entry;
        debug!("Created entry {}", created.id);
        Ok(created)
    }

    fn request<'a>(
        twitter_handle: &'a str,
        story: &'a str,
    ) -> GraphqlRequest<CreateEntryVariables<'a>> {
        GraphqlRequest::new(
            CREATE_GUESTBOOK_ENTRY_MUTATION,
            CreateEntryVariables {
                twitter_handle,
                story,
            },
        )
    }
}
