//! `/auth` endpoints.

use bday_core::{
    Ack, AuthResponse, BdayResult, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest,
    RegisterRequest, ResetPasswordRequest, User,
};

use crate::client::SessionedClient;

impl SessionedClient {
    /// `POST /auth/login`. The returned token pair is stored for later calls.
    pub async fn login(&self, credentials: &LoginRequest) -> BdayResult<AuthResponse> {
        let auth: AuthResponse = self.post_json("/auth/login", credentials).await?;
        self.store.set_tokens(&auth.token, &auth.refresh_token);
        Ok(auth)
    }

    /// `POST /auth/register`. The returned token pair is stored for later calls.
    pub async fn register(&self, credentials: &RegisterRequest) -> BdayResult<AuthResponse> {
        let auth: AuthResponse = self.post_json("/auth/register", credentials).await?;
        self.store.set_tokens(&auth.token, &auth.refresh_token);
        Ok(auth)
    }

    /// `POST /auth/logout`. Stored credentials are cleared even if the
    /// backend call fails; the session is over either way.
    pub async fn logout(&self) -> BdayResult<()> {
        let result = self.post_unit("/auth/logout").await;
        self.store.clear();
        result
    }

    /// `GET /auth/me`
    pub async fn me(&self) -> BdayResult<User> {
        self.get_json("/auth/me").await
    }

    /// `POST /auth/forgot-password`
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> BdayResult<Ack> {
        self.post_json("/auth/forgot-password", request).await
    }

    /// `POST /auth/reset-password`
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> BdayResult<Ack> {
        self.post_json("/auth/reset-password", request).await
    }

    /// `POST /auth/change-password`
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> BdayResult<Ack> {
        self.post_json("/auth/change-password", request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bday_core::LoginRequest;

    use crate::client::test_support::{ok, status, FakeEvents, FakeStore, FakeTransport};
    use crate::client::SessionedClient;
    use crate::config::ClientConfig;
    use crate::store::TokenStore;

    fn auth_response_json(token: &str, refresh: &str) -> String {
        format!(
            r#"{{
                "user": {{
                    "id": "usr-1",
                    "email": "ada@example.com",
                    "name": "Ada Lovelace",
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z"
                }},
                "token": "{token}",
                "refresh_token": "{refresh}"
            }}"#
        )
    }

    fn client(transport: &Arc<FakeTransport>, store: &Arc<FakeStore>) -> SessionedClient {
        SessionedClient {
            config: ClientConfig::default(),
            transport: transport.clone(),
            store: store.clone(),
            events: Some(Arc::new(FakeEvents::default())),
        }
    }

    #[tokio::test]
    async fn test_login_stores_token_pair() {
        let transport = FakeTransport::scripted(vec![ok(&auth_response_json("tok-1", "ref-1"))]);
        let store = FakeStore::with(None, None);

        let auth = client(&transport, &store)
            .login(&LoginRequest {
                email: "ada@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(auth.user.name, "Ada Lovelace");
        assert_eq!(store.access_token().as_deref(), Some("tok-1"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref-1"));
    }

    #[tokio::test]
    async fn test_logout_clears_store_even_on_backend_error() {
        let transport = FakeTransport::scripted(vec![status(500, "")]);
        let store = FakeStore::with(Some("tok-1"), Some("ref-1"));

        let result = client(&transport, &store).logout().await;
        assert!(result.is_err());
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }
}
