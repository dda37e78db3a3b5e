//! `/users` endpoints.

use bday_core::{BdayResult, User, UserStats};

use crate::client::SessionedClient;

impl SessionedClient {
    /// `GET /users/profile`
    pub async fn profile(&self) -> BdayResult<User> {
        self.get_json("/users/profile").await
    }

    /// `GET /users/stats`
    pub async fn stats(&self) -> BdayResult<UserStats> {
        self.get_json("/users/stats").await
    }
}
