use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response shape: {0}")]
    Decode(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: HashMap<String, String>,
    },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Field-level messages for form rendering, when this error carries any.
    pub fn field_errors(&self) -> Option<&HashMap<String, String>> {
        match self {
            AppError::Validation { fields, .. } if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Builds a Validation error from a 422 response body.
    ///
    /// The backend emits either a plain string detail or the structured
    /// form `{"detail": [{"loc": [..., field], "msg": ...}, ...]}`; the
    /// last `loc` segment is the field name.
    pub fn from_unprocessable(body: &Value) -> Self {
        let mut fields = HashMap::new();

        match body.get("detail") {
            Some(Value::Array(items)) => {
                for item in items {
                    let msg = item
                        .get("msg")
                        .and_then(Value::as_str)
                        .unwrap_or("Invalid value");
                    let field = item
                        .get("loc")
                        .and_then(Value::as_array)
                        .and_then(|loc| loc.last())
                        .and_then(Value::as_str)
                        .unwrap_or("_general");
                    fields.insert(field.to_string(), msg.to_string());
                }
                AppError::Validation {
                    message: "Validation failed".to_string(),
                    fields,
                }
            }
            Some(Value::String(detail)) => AppError::Validation {
                message: detail.clone(),
                fields,
            },
            _ => AppError::Validation {
                message: "Validation failed".to_string(),
                fields,
            },
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(err) = errs.first() {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                fields.insert(field.to_string(), msg);
            }
        }
        AppError::Validation {
            message: "Validation failed".to_string(),
            fields,
        }
    }
}
