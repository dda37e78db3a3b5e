//! Credential storage and session lifecycle callbacks.
//!
//! The client never persists tokens itself; it reads and writes them through
//! [`TokenStore`]. The owning application decides where tokens actually live
//! (memory, keychain, ...) and what happens after a forced logout.

use std::sync::Mutex;

/// Holds the access/refresh token pair for the current session.
///
/// Implementations must be internally synchronized: a read must see a
/// consistent pair, and a concurrent write must not tear it.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn set_tokens(&self, access: &str, refresh: &str);
    fn clear(&self);
}

/// Session lifecycle notifications.
pub trait SessionEvents: Send + Sync {
    /// Invoked once when the client gives up on a session: credentials are
    /// already cleared and the user must re-authenticate.
    fn on_forced_logout(&self);
}

#[derive(Debug, Clone)]
struct TokenPair {
    access: String,
    refresh: String,
}

/// Simple process-local token store.
#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        InMemoryTokenStore::default()
    }

    /// Start with an existing token pair (e.g. restored by the caller).
    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        InMemoryTokenStore {
            tokens: Mutex::new(Some(TokenPair {
                access: access.to_string(),
                refresh: refresh.to_string(),
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<TokenPair>> {
        // A poisoned lock only happens if a holder panicked; the pair itself
        // is always consistent, so keep going with the inner value.
        self.tokens.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for InMemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.lock().as_ref().map(|pair| pair.access.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.lock().as_ref().map(|pair| pair.refresh.clone())
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        *self.lock() = Some(TokenPair {
            access: access.to_string(),
            refresh: refresh.to_string(),
        });
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}
