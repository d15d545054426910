/*
[INPUT]:  Bearer-token authentication and payee records
[OUTPUT]: Saved transfer-recipient data (payee CRUD)
[POS]:    HTTP layer - payee endpoints routed through the gateway
[UPDATE]: When adding new payee endpoints or changing record fields
*/

use crate::http::{GatewayClient, Result};
use crate::types::{MessageResponse, Payee, PayeeInput};
use reqwest::Method;

impl GatewayClient {
    /// List all saved payees for the authenticated user
    ///
    /// GET /api/payees
    pub async fn get_payees(&self, token: &str) -> Result<Vec<Payee>> {
        let builder = self.gateway_request_with_token(Method::GET, "/api/payees", token)?;
        self.send_json(builder).await
    }

    /// Fetch a single payee by id
    ///
    /// GET /api/payees/{id}
    pub async fn get_payee(&self, token: &str, id: i64) -> Result<Payee> {
        let endpoint = format!("/api/payees/{id}");
        let builder = self.gateway_request_with_token(Method::GET, &endpoint, token)?;
        self.send_json(builder).await
    }

    /// Save a new payee
    ///
    /// POST /api/payees
    pub async fn create_payee(&self, token: &str, payee: &PayeeInput) -> Result<Payee> {
        let builder = self
            .gateway_request_with_token(Method::POST, "/api/payees", token)?
            .json(payee);
        self.send_json(builder).await
    }

    /// Replace an existing payee's details
    ///
    /// PUT /api/payees/{id}
    pub async fn update_payee(&self, token: &str, id: i64, payee: &PayeeInput) -> Result<Payee> {
        let endpoint = format!("/api/payees/{id}");
        let builder = self
            .gateway_request_with_token(Method::PUT, &endpoint, token)?
            .json(payee);
        self.send_json(builder).await
    }

    /// Delete a payee
    ///
    /// DELETE /api/payees/{id}
    pub async fn delete_payee(&self, token: &str, id: i64) -> Result<MessageResponse> {
        let endpoint = format!("/api/payees/{id}");
        let builder = self.gateway_request_with_token(Method::DELETE, &endpoint, token)?;
        self.send_json(builder).await
    }
}
