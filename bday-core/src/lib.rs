//! Core types for the bday ecosystem.
//!
//! This crate provides everything the API client and its callers share:
//! - `Reminder`, `Message`, `User` and the auth request/response shapes
//! - `date` for birthday arithmetic (age, next occurrence, labels)
//! - `calendar` for month-grid generation
//! - `BdayError`/`BdayResult` for the error taxonomy

pub mod auth;
pub mod calendar;
pub mod date;
pub mod error;
pub mod message;
pub mod reminder;
pub mod user;

// Re-export the main types at crate root for convenience
pub use auth::{
    Ack, AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest,
    RefreshRequest, RefreshResponse, RegisterRequest, ResetPasswordRequest,
};
pub use calendar::{CalendarDay, WEEKDAY_LABELS};
pub use error::{ApiErrorBody, BdayError, BdayResult};
pub use message::{CreateMessageRequest, Message, UpdateMessageRequest};
pub use reminder::{CreateReminderRequest, Relationship, Reminder, UpdateReminderRequest};
pub use user::{User, UserStats};
