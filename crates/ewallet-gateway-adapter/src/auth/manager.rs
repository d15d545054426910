/*
[INPUT]:  Phone/password credentials and HTTP client
[OUTPUT]: Authenticated session (stored bearer token)
[POS]:    Auth layer - orchestrates login and token storage
[UPDATE]: When auth endpoints or session lifetime change
*/

use crate::http::{GatewayClient, GatewayError, Result};
use crate::types::{LoginResponse, RegisterRequest, RegisterResponse};

use super::TokenStore;

/// Backend tokens are issued with a 24h lifetime
const DEFAULT_TOKEN_TTL_SECONDS: u64 = 24 * 60 * 60;

/// Manages login and the resulting session token
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: GatewayClient,
    tokens: TokenStore,
}

impl AuthManager {
    /// Create a new auth manager around an existing client
    pub fn new(client: GatewayClient) -> Self {
        Self {
            client,
            tokens: TokenStore::new(),
        }
    }

    /// Get the underlying gateway client
    pub fn client(&self) -> &GatewayClient {
        &self.client
    }

    /// Get the token store
    pub fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    /// Current bearer token, or an error when none is held or it lapsed
    pub fn token(&self) -> Result<String> {
        if self.tokens.is_expired() {
            self.tokens.clear();
            return Err(GatewayError::Config(
                "session token missing or expired, login first".to_string(),
            ));
        }
        self.tokens
            .get_token()
            .ok_or_else(|| GatewayError::Config("session token missing or expired, login first".to_string()))
    }

    /// Login and store the issued bearer token
    pub async fn login(&self, phone: &str, password: &str) -> Result<LoginResponse> {
        let response = self.client.login(phone, password).await?;
        self.tokens
            .set_token(response.token.clone(), DEFAULT_TOKEN_TTL_SECONDS);
        Ok(response)
    }

    /// Register a new account; does not start a session
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.client.register(request).await
    }

    /// Drop the stored session token
    pub fn logout(&self) {
        self.tokens.clear();
    }
}
