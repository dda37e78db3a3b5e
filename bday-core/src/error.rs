//! Error types for the bday ecosystem.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in bday operations.
#[derive(Error, Debug)]
pub enum BdayError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Session expired, please log in again")]
    AuthExpired,

    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        errors: Option<HashMap<String, Vec<String>>>,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error body returned by the backend for non-2xx responses:
/// `{"message": "...", "errors": {"field": ["..."]}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

/// Result type alias for bday operations.
pub type BdayResult<T> = Result<T, BdayError>;
