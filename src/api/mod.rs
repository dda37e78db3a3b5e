//! Typed endpoint surface, grouped by backend resource.

mod auth;
mod messages;
mod reminders;
mod users;
