//! Read path: list entries and normalize the outcome for display.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{Entry, ENTRIES_PAGE_SIZE};

use crate::graphql::{
    EntriesData, EntriesVariables, Envelope, GraphqlRequest, GraphqlTransport,
    GUESTBOOK_ENTRIES_QUERY,
};

/// Normalized outcome of the entries query.
///
/// `data` is set only when an envelope arrived without errors. `error_message`
/// prefers the transport error over the envelope's first error.
#[derive(Debug, Default)]
pub struct EntriesView {
    pub data: Option<Vec<Entry>>,
    pub error_message: Option<String>,
    pub error: Option<AppError>,
}

impl EntriesView {
    /// Combine a (possibly absent) envelope and a (possibly absent) transport error.
    pub fn from_parts(envelope: Option<Envelope<EntriesData>>, error: Option<AppError>) -> Self {
        let error_message = match (&error, &envelope) {
            (Some(err), _) => Some(err.to_string()),
            (None, Some(envelope)) => envelope.first_error_message().map(str::to_string),
            (None, None) => None,
        };

        // An empty `errors: []` counts as no errors, unlike a JS truthiness check.
        let data = envelope
            .filter(|envelope| !envelope.has_errors())
            .and_then(|envelope| envelope.data)
            .map(|data| data.guestbook_entries);

        Self {
            data,
            error_message,
            error,
        }
    }

    /// Collapse into a plain result.
    pub fn into_result(self) -> AppResult<Vec<Entry>> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if let Some(msg) = self.error_message {
            return Err(AppError::Graphql(msg));
        }
        Ok(self.data.unwrap_or_default())
    }
}

/// Issues the entries query.
#[derive(Debug, Clone)]
pub struct QueryReader {
    transport: Arc<GraphqlTransport>,
}

impl QueryReader {
    pub fn new(transport: Arc<GraphqlTransport>) -> Self {
        Self { transport }
    }

    /// Fetch up to one page of entries. Never fails; failures land in the view.
    pub async fn fetch_entries(&self) -> EntriesView {
        let request = GraphqlRequest::new(
            GUESTBOOK_ENTRIES_QUERY,
            EntriesVariables {
                size: ENTRIES_PAGE_SIZE,
            },
        );

        let envelope = self
            .transport
            .post::<_, Envelope<Value>>(&request)
            .await
            .and_then(Envelope::<Value>::into_typed::<EntriesData>);

        let view = match envelope {
            Ok(envelope) => EntriesView::from_parts(Some(envelope), None),
            Err(err) => EntriesView::from_parts(None, Some(err)),
        };

        match &view.error_message {
            Some(msg) => warn!("Entries query failed: {}", msg),
            None => debug!(
                "Entries query returned {} entries",
                view.data.as_ref().map_or(0, Vec::len)
            ),
        }

        view
    }
}
