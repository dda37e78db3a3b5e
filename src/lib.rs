//! Async client for the bday birthday-reminder backend.
//!
//! [`SessionedClient`] wraps every REST call with bearer-token attachment
//! and a one-shot 401 refresh-and-retry, so callers never handle tokens
//! directly. Shared models and the birthday date math live in `bday-core`
//! and are re-exported here.
//!
//! ```no_run
//! use std::sync::Arc;
//! use bday_client::{ClientConfig, InMemoryTokenStore, SessionedClient};
//!
//! # async fn run() -> bday_client::BdayResult<()> {
//! let store = Arc::new(InMemoryTokenStore::new());
//! let client = SessionedClient::new(ClientConfig::from_env(), store)?;
//!
//! let auth = client
//!     .login(&bday_client::LoginRequest {
//!         email: "ada@example.com".into(),
//!         password: "hunter2".into(),
//!     })
//!     .await?;
//! println!("signed in as {}", auth.user.name);
//!
//! for reminder in client.upcoming_reminders(Some(30)).await? {
//!     println!("{}: {}", reminder.person_name, reminder.relative_label(chrono::Local::now().date_naive()));
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod store;
pub mod transport;

pub use client::SessionedClient;
pub use config::ClientConfig;
pub use store::{InMemoryTokenStore, SessionEvents, TokenStore};
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};

// Shared models and errors from bday-core
pub use bday_core::{
    Ack, ApiErrorBody, AuthResponse, BdayError, BdayResult, CalendarDay, ChangePasswordRequest,
    CreateMessageRequest, CreateReminderRequest, ForgotPasswordRequest, LoginRequest, Message,
    RefreshRequest, RefreshResponse, RegisterRequest, Relationship, Reminder, ResetPasswordRequest,
    UpdateMessageRequest, UpdateReminderRequest, User, UserStats,
};
