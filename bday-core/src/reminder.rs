//! Reminder types.
//!
//! A reminder tracks one person's birthday plus how the user relates to them.
//! The backend owns the records; these types mirror its JSON wire format.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::date;

/// How the user relates to the person behind a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Family,
    Friend,
    Colleague,
    Partner,
    Parent,
    Sibling,
    Child,
    #[serde(other)]
    Other,
}

impl Relationship {
    /// All selectable relationships, in display order.
    pub const ALL: [Relationship; 8] = [
        Relationship::Family,
        Relationship::Friend,
        Relationship::Colleague,
        Relationship::Partner,
        Relationship::Parent,
        Relationship::Sibling,
        Relationship::Child,
        Relationship::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Family => "Family",
            Relationship::Friend => "Friend",
            Relationship::Colleague => "Colleague",
            Relationship::Partner => "Partner",
            Relationship::Parent => "Parent",
            Relationship::Sibling => "Sibling",
            Relationship::Child => "Child",
            Relationship::Other => "Other",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Relationship::Family => "👨‍👩‍👧‍👦",
            Relationship::Friend => "👋",
            Relationship::Colleague => "💼",
            Relationship::Partner => "❤️",
            Relationship::Parent => "👨‍👩‍👧",
            Relationship::Sibling => "👫",
            Relationship::Child => "👶",
            Relationship::Other => "🎂",
        }
    }
}

/// A birthday reminder as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub user_id: String,
    pub person_name: String,
    pub relationship: Relationship,
    pub birthday: NaiveDate,
    pub notes: Option<String>,
    pub phone: Option<String>,
    pub send_reminder: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reminder {
    /// The person's age as of `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        date::age(self.birthday, today)
    }

    /// Days until the birthday next comes around. 0 means it is today.
    pub fn days_until_birthday(&self, today: NaiveDate) -> i64 {
        date::days_until_next_occurrence(self.birthday, today)
    }

    /// "Today" / "Tomorrow" / "In N days" / "In N weeks" / "Mar 15".
    pub fn relative_label(&self, today: NaiveDate) -> String {
        date::relative_label(self.birthday, today)
    }

    /// Up to two uppercased initials from the person's name.
    pub fn initials(&self) -> String {
        initials(&self.person_name)
    }
}

/// Body for `POST /reminders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReminderRequest {
    pub person_name: String,
    pub relationship: Relationship,
    pub birthday: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_reminder: Option<bool>,
}

/// Body for `PUT /reminders/{id}`. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReminderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_reminder: Option<bool>,
}

/// Up to two uppercased initials from a full name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
