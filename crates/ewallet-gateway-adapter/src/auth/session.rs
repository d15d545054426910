/*
[INPUT]:  Bearer tokens and expiration timestamps
[OUTPUT]: Token retrieval and expiration status
[POS]:    Auth layer - token lifecycle management
[UPDATE]: When adding token refresh or changing storage strategy
*/

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, RwLock};

/// Stored token data with metadata
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Thread-safe bearer token store
#[derive(Debug, Clone)]
pub struct TokenStore {
    data: Arc<RwLock<Option<SessionToken>>>,
}

impl TokenStore {
    /// Create a new empty token store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store a new token with expiration
    pub fn set_token(&self, token: String, expires_seconds: u64) {
        let expires_at = Utc::now() + Duration::seconds(expires_seconds as i64);
        let session = SessionToken { token, expires_at };

        let mut guard = self.data.write().unwrap();
        *guard = Some(session);
    }

    /// Get the current token if available
    pub fn get_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|session| session.token.clone())
    }

    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        let guard = self.data.read().unwrap();
        match guard.as_ref() {
            Some(session) => Utc::now() > session.expires_at,
            None => true,
        }
    }

    /// Get token data if available
    pub fn token_data(&self) -> Option<SessionToken> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Clear the stored token
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
