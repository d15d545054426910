/*
[INPUT]:  Bearer-token authentication and transfer requests
[OUTPUT]: Transaction history and transfer confirmations
[POS]:    HTTP layer - transaction endpoints routed through the gateway
[UPDATE]: When adding new transaction endpoints or changing transfer fields
*/

use crate::http::{GatewayClient, Result};
use crate::types::{Transaction, TransferRequest};
use reqwest::Method;

impl GatewayClient {
    /// Fetch the authenticated user's transaction history, newest first
    ///
    /// GET /api/transactions
    pub async fn get_my_transactions(&self, token: &str) -> Result<Vec<Transaction>> {
        let builder = self.gateway_request_with_token(Method::GET, "/api/transactions", token)?;
        self.send_json(builder).await
    }

    /// Transfer funds to another user by phone number
    ///
    /// POST /api/transactions
    pub async fn create_transaction(
        &self,
        token: &str,
        transfer: &TransferRequest,
    ) -> Result<Transaction> {
        let builder = self
            .gateway_request_with_token(Method::POST, "/api/transactions", token)?
            .json(transfer);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, GatewayClient};
    use crate::types::{TransactionKind, TransactionStatus, TransferRequest};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> GatewayClient {
        GatewayClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_get_my_transactions() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/transactions"))
            .and(header("Authorization", "Bearer tok123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 12,
                    "sender_wallet_id": 4,
                    "receiver_wallet_id": 9,
                    "type": "transfer",
                    "amount": "25.50",
                    "description": "lunch",
                    "status": "success",
                    "created_at": "2024-01-02T10:00:00",
                },
                {
                    "id": 11,
                    "sender_wallet_id": 4,
                    "receiver_wallet_id": 4,
                    "type": "topup",
                    "amount": "100.00",
                    "description": null,
                    "status": "success",
                    "created_at": "2024-01-01T09:00:00",
                },
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let transactions = client
            .get_my_transactions("tok123")
            .await
            .expect("get_my_transactions failed");

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].kind, TransactionKind::Transfer);
        assert_eq!(transactions[1].kind, TransactionKind::Topup);
    }

    #[tokio::test]
    async fn test_create_transaction() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/transactions"))
            .and(header("Authorization", "Bearer tok123"))
            .and(body_json(serde_json::json!({
                "receiver_phone": "0899",
                "amount": 25.5,
                "description": "lunch",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 13,
                "sender_wallet_id": 4,
                "receiver_wallet_id": 9,
                "type": "transfer",
                "amount": "25.50",
                "description": "lunch",
                "status": "success",
                "created_at": "2024-01-03T08:00:00",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let transfer = TransferRequest {
            receiver_phone: "0899".to_string(),
            amount: "25.5".parse().unwrap(),
            description: Some("lunch".to_string()),
        };

        let transaction = client
            .create_transaction("tok123", &transfer)
            .await
            .expect("create_transaction failed");

        assert_eq!(transaction.id, 13);
        assert_eq!(transaction.status, TransactionStatus::Success);
    }
}
