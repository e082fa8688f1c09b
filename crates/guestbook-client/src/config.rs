//! Client configuration.

use std::env;

use common::{AppError, AppResult, GraphqlEndpointConfig};

/// Environment variable holding the GraphQL endpoint URL
pub const ENDPOINT_ENV: &str = "AMPLICATION_GRAPHQL_ENDPOINT";

/// Environment variable holding the authorization secret
pub const SECRET_ENV: &str = "AMPLICATION_SECRET";

/// Guestbook client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend endpoint and credential
    pub graphql: GraphqlEndpointConfig,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            graphql: GraphqlEndpointConfig::new(endpoint, secret),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let endpoint = lookup(ENDPOINT_ENV)
            .ok_or_else(|| AppError::config(format!("{} is not set", ENDPOINT_ENV)))?;
        let secret = lookup(SECRET_ENV)
            .ok_or_else(|| AppError::config(format!("{} is not set", SECRET_ENV)))?;

        Ok(Self::new(endpoint, secret))
    }
}
