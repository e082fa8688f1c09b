//! Request body and response envelope of the GraphQL-over-HTTP convention.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use common::{AppError, AppResult};

/// POST body: `{"query": ..., "variables": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

impl<V: Serialize> GraphqlRequest<V> {
    pub fn new(query: &'static str, variables: V) -> Self {
        Self { query, variables }
    }
}

/// One item of an envelope's `errors` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    /// Members outside the standard ones
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GraphqlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
            extra: Map::new(),
        }
    }
}

/// Raw response body. Both members may be present at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphqlError>>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    pub fn failure(errors: Vec<GraphqlError>) -> Self {
        Self {
            data: None,
            errors: Some(errors),
        }
    }

    /// True when `errors` is present and non-empty.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Message of the first error, if any.
    pub fn first_error_message(&self) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.first())
            .map(|e| e.message.as_str())
    }

    /// Collapse into a tagged result; any error wins over data.
    pub fn into_result(self) -> GraphqlResult<T> {
        match (self.data, self.errors) {
            (_, Some(errors)) if !errors.is_empty() => GraphqlResult::Failure { errors },
            (Some(data), _) => GraphqlResult::Success { data },
            (None, _) => GraphqlResult::Failure { errors: Vec::new() },
        }
    }
}

impl Envelope<Value> {
    /// Type the `data` member unless the backend reported errors.
    ///
    /// With a non-empty `errors` list, `data` is dropped untyped so a partial or
    /// nulled payload cannot hide the backend's message behind a decode error.
    pub fn into_typed<T: DeserializeOwned>(self) -> AppResult<Envelope<T>> {
        if self.has_errors() {
            return Ok(Envelope {
                data: None,
                errors: self.errors,
            });
        }

        let data = match self.data {
            Some(Value::Null) | None => None,
            Some(data) => Some(serde_json::from_value(data)?),
        };

        Ok(Envelope {
            data,
            errors: self.errors,
        })
    }
}

/// Envelope with exactly one meaningful outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphqlResult<T> {
    Success { data: T },
    Failure { errors: Vec<GraphqlError> },
}

impl<T> GraphqlResult<T> {
    /// Failures become `AppError::Graphql` carrying the first message.
    pub fn into_app_result(self) -> AppResult<T> {
        match self {
            GraphqlResult::Success { data } => Ok(data),
            GraphqlResult::Failure { errors } => Err(errors
                .into_iter()
                .next()
                .map(|e| AppError::Graphql(e.message))
                .unwrap_or_else(|| AppError::graphql("Response contained no data"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_body_shape() {
        let body = GraphqlRequest::new("query Q { a }", json!({ "size": 100 }));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "query": "query Q { a }", "variables": { "size": 100 } })
        );
    }

    #[test]
    fn missing_members_decode_as_none() {
        let envelope: Envelope<Value> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.errors, None);
        assert_eq!(envelope.first_error_message(), None);

        let envelope: Envelope<Value> = serde_json::from_value(json!({ "data": null })).unwrap();
        assert_eq!(envelope.data, None);
    }

    #[test]
    fn error_keeps_unknown_members() {
        let envelope: Envelope<Value> = serde_json::from_value(json!({
            "errors": [
                { "message": "first", "path": ["guestbookEntries"], "code": "E1" },
                { "message": "second" }
            ]
        }))
        .unwrap();

        assert_eq!(envelope.first_error_message(), Some("first"));
        let first = &envelope.errors.as_ref().unwrap()[0];
        assert_eq!(first.path, Some(json!(["guestbookEntries"])));
        assert_eq!(first.extra.get("code"), Some(&json!("E1")));
    }

    #[test]
    fn errors_take_precedence_over_data() {
        let envelope = Envelope {
            data: Some(1),
            errors: Some(vec![GraphqlError::new("boom")]),
        };

        match envelope.into_result() {
            GraphqlResult::Failure { errors } => assert_eq!(errors[0].message, "boom"),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn empty_errors_list_is_not_a_failure() {
        let envelope = Envelope {
            data: Some(1),
            errors: Some(vec![]),
        };
        assert!(!envelope.has_errors());
        assert_eq!(envelope.into_result(), GraphqlResult::Success { data: 1 });
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Page {
        items: Vec<u32>,
    }

    #[test]
    fn typing_skips_data_when_errors_present() {
        let envelope: Envelope<Value> = serde_json::from_value(json!({
            "data": { "items": null },
            "errors": [{ "message": "X" }]
        }))
        .unwrap();

        let typed: Envelope<Page> = envelope.into_typed().unwrap();
        assert_eq!(typed.data, None);
        assert_eq!(typed.first_error_message(), Some("X"));
    }

    #[test]
    fn typing_decodes_clean_data() {
        let envelope: Envelope<Value> =
            serde_json::from_value(json!({ "data": { "items": [1, 2] } })).unwrap();

        let typed: Envelope<Page> = envelope.into_typed().unwrap();
        assert_eq!(typed.data, Some(Page { items: vec![1, 2] }));
    }

    #[test]
    fn typing_reports_mismatched_data_without_errors() {
        let envelope: Envelope<Value> =
            serde_json::from_value(json!({ "data": { "items": "nope" } })).unwrap();

        let err = envelope.into_typed::<Page>().unwrap_err();
        assert_eq!(err.code(), "DECODE_ERROR");
    }

    #[test]
    fn failure_maps_to_first_message() {
        let result: GraphqlResult<()> = Envelope::failure(vec![
            GraphqlError::new("first"),
            GraphqlError::new("second"),
        ])
        .into_result();

        let err = result.into_app_result().unwrap_err();
        assert_eq!(err.to_string(), "first");

        let empty: Envelope<()> = Envelope {
            data: None,
            errors: None,
        };
        let err = empty.into_result().into_app_result().unwrap_err();
        assert_eq!(err.code(), "GRAPHQL_ERROR");
    }
}
