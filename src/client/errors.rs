//! Translation of failed responses into [`ScradaError`].

use std::collections::BTreeMap;

use serde_json::Value;

use super::transport::ApiResponse;
use crate::core::ScradaError;

/// Resource named in a 404 error.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Subject<'a> {
    pub resource: &'a str,
    pub id: &'a str,
}

impl Default for Subject<'_> {
    fn default() -> Self {
        Self {
            resource: "Resource",
            id: "unknown",
        }
    }
}

/// `Ok` below 400, the matching error kind otherwise.
pub(crate) fn check(
    response: ApiResponse,
    subject: Subject<'_>,
) -> Result<ApiResponse, ScradaError> {
    match response.status {
        401 => Err(ScradaError::invalid_credentials()),
        404 => Err(ScradaError::not_found(subject.resource, subject.id)),
        422 => Err(validation_error(&response)),
        _ if !response.is_failure() => Ok(response),
        status => Err(ScradaError::Api {
            status,
            message: message(&response).unwrap_or_else(|| "Unknown Scrada API error".into()),
        }),
    }
}

fn message(response: &ApiResponse) -> Option<String> {
    response
        .json()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

fn validation_error(response: &ApiResponse) -> ScradaError {
    let message = message(response).unwrap_or_else(|| "Validation failed".into());

    let mut errors = BTreeMap::new();
    match response.json().as_ref().and_then(|d| d.get("errors")) {
        Some(Value::Object(fields)) => {
            for (field, messages) in fields {
                errors.insert(field.clone(), messages_of(messages));
            }
        }
        Some(Value::Array(items)) => {
            for (i, messages) in items.iter().enumerate() {
                errors.insert(i.to_string(), messages_of(messages));
            }
        }
        _ => {}
    }

    ScradaError::Validation { message, errors }
}

/// A scalar is a single message; non-string messages become `""`.
fn messages_of(value: &Value) -> Vec<String> {
    let text = |v: &Value| v.as_str().unwrap_or_default().to_string();
    match value {
        Value::Array(items) => items.iter().map(text).collect(),
        other => vec![text(other)],
    }
}
