/*
[INPUT]:  Account credentials and bearer-token authentication
[OUTPUT]: User account data (login token, profile)
[POS]:    HTTP layer - user endpoints routed through the gateway
[UPDATE]: When adding new user endpoints or changing payload shapes
*/

use crate::http::{GatewayClient, Result};
use crate::types::{
    LoginRequest, LoginResponse, MessageResponse, ProfileUpdate, ProfileUpdateResponse,
    RegisterRequest, RegisterResponse, User,
};
use reqwest::Method;

impl GatewayClient {
    /// Login with phone number and password to obtain a bearer token
    ///
    /// POST /api/users/login
    pub async fn login(&self, phone: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            phone: phone.to_string(),
            password: password.to_string(),
        };

        let builder = self
            .gateway_request(Method::POST, "/api/users/login")?
            .json(&body);
        self.send_json(builder).await
    }

    /// Register a new account
    ///
    /// POST /api/users/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        let builder = self
            .gateway_request(Method::POST, "/api/users/register")?
            .json(request);
        self.send_json(builder).await
    }

    /// Fetch the authenticated user's profile
    ///
    /// GET /api/users/me
    pub async fn get_profile(&self, token: &str) -> Result<User> {
        let builder = self.gateway_request_with_token(Method::GET, "/api/users/me", token)?;
        self.send_json(builder).await
    }

    /// Update name and/or phone number on the authenticated profile
    ///
    /// PUT /api/users/me
    pub async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<ProfileUpdateResponse> {
        let builder = self
            .gateway_request_with_token(Method::PUT, "/api/users/me", token)?
            .json(update);
        self.send_json(builder).await
    }

    /// Close the authenticated account
    ///
    /// DELETE /api/users/me
    pub async fn delete_account(&self, token: &str) -> Result<MessageResponse> {
        let builder = self.gateway_request_with_token(Method::DELETE, "/api/users/me", token)?;
        self.send_json(builder).await
    }
}
