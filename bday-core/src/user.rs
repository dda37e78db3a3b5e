//! User account types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate stats for the dashboard, from `GET /users/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub total_reminders: u64,
    pub upcoming_this_month: u64,
    pub messages_sent: u64,
    /// Reminder counts keyed by relationship name.
    pub relationships: HashMap<String, u64>,
}
