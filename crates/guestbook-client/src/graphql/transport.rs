//! HTTP transport for GraphQL operations.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use common::{AppError, AppResult};
use domain::BASIC_AUTH_PREFIX;

use super::GraphqlRequest;
use crate::config::ClientConfig;

const APPLICATION_JSON: &str = "application/json";

/// Posts GraphQL documents to one endpoint with fixed headers.
///
/// Each call is a single request: no retry, no timeout, no caching.
#[derive(Debug, Clone)]
pub struct GraphqlTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphqlTransport {
    /// Build the HTTP client with the authorization and JSON headers attached.
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let mut authorization =
            HeaderValue::from_str(&format!("{}{}", BASIC_AUTH_PREFIX, config.graphql.secret))
                .map_err(|_| AppError::config("secret contains characters not allowed in a header"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(AppError::from)?;

        Ok(Self {
            http,
            endpoint: config.graphql.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one request and decode the body as `R`.
    ///
    /// Non-2xx statuses are reported as transport errors before decoding.
    pub async fn post<V, R>(&self, request: &GraphqlRequest<V>) -> AppResult<R>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        debug!("POST {} to {}", operation_name(request.query), self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        debug!("Response status {}", response.status());

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Name following the `query`/`mutation` keyword, for logging.
fn operation_name(document: &str) -> &str {
    document
        .split_whitespace()
        .nth(1)
        .map(|name| name.split('(').next().unwrap_or(name))
        .unwrap_or("anonymous")
}
