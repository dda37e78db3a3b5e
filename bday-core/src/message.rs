//! Birthday message types.
//!
//! Messages are drafted against a reminder and sent (as SMS) by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A drafted or sent birthday message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub reminder_id: String,
    pub content: String,
    /// None until the backend has delivered the message.
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    pub fn is_sent(&self) -> bool {
        self.sent_at.is_some()
    }
}

/// Body for `POST /messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub reminder_id: String,
    pub content: String,
}

/// Body for `PUT /messages/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
