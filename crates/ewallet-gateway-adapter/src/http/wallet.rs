/*
[INPUT]:  Bearer-token authentication and top-up amounts
[OUTPUT]: Wallet balance data
[POS]:    HTTP layer - wallet endpoints routed through the gateway
[UPDATE]: When adding new wallet endpoints or changing balance encoding
*/

use crate::http::{GatewayClient, Result};
use crate::types::{TopupRequest, Wallet};
use reqwest::Method;
use rust_decimal::Decimal;

impl GatewayClient {
    /// Fetch the authenticated user's active wallet and balance
    ///
    /// GET /api/wallets/me
    pub async fn get_my_wallet(&self, token: &str) -> Result<Wallet> {
        let builder = self.gateway_request_with_token(Method::GET, "/api/wallets/me", token)?;
        self.send_json(builder).await
    }

    /// Credit the authenticated user's wallet
    ///
    /// POST /api/topup
    pub async fn topup(&self, token: &str, amount: Decimal) -> Result<Wallet> {
        let body = TopupRequest { amount };
        let builder = self
            .gateway_request_with_token(Method::POST, "/api/topup", token)?
            .json(&body);
        self.send_json(builder).await
    }
}
