//! Shared configuration structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection settings for a GraphQL backend.
///
/// Both values are used as given: the endpoint is the POST target and the
/// secret is sent as a `Basic` credential without further encoding.
#[derive(Clone, Deserialize, Serialize)]
pub struct GraphqlEndpointConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Authorization credential
    #[serde(skip_serializing)]
    pub secret: String,
}

impl GraphqlEndpointConfig {
    pub fn new(endpoint: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for GraphqlEndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphqlEndpointConfig")
            .field("endpoint", &self.endpoint)
            .field("secret", &"<redacted>")
            .finish()
    }
}
