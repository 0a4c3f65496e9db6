use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every client error: `{ "errors": [...] }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorDetail>,
}

/// A single client-facing error entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable message
    pub msg: String,
    /// Request field the error refers to, when field-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Where the offending field was read from (always "body" for now)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ErrorDetail {
    /// Error that is not tied to a particular field
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
            location: None,
        }
    }

    /// Error raised by validating a request body field
    pub fn body_field(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
            location: Some("body".to_string()),
        }
    }
}

impl ErrorResponse {
    pub fn new(errors: Vec<ErrorDetail>) -> Self {
        Self { errors }
    }

    pub fn single(msg: impl Into<String>) -> Self {
        Self::new(vec![ErrorDetail::message(msg)])
    }
}
