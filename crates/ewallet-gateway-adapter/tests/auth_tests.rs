/*
[INPUT]:  Mock login responses
[OUTPUT]: Test results for session management
[POS]:    Integration tests - auth flow
[UPDATE]: When the login flow or token lifecycle changes
*/

mod common;

use common::{mock_token, setup_mock_server, test_client};
use ewallet_gateway_adapter::{AuthManager, TokenStore};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_token_store_roundtrip() {
    let store = TokenStore::new();
    assert!(store.is_expired());

    store.set_token(mock_token(), 3600);
    assert_eq!(store.get_token(), Some(mock_token()));

    let data = store.token_data().expect("token data");
    assert_eq!(data.token, mock_token());
}

#[tokio::test]
async fn test_login_then_authenticated_call() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_json(serde_json::json!({
            "phone": "0812345",
            "password": "secret",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Login successful",
            "token": "tok123",
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "name": "Alice",
            "email": "alice@example.com",
            "phone": "0812345",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthManager::new(test_client(&server));
    auth.login("0812345", "secret").await.expect("login failed");

    let token = auth.token().expect("token stored");
    let profile = auth
        .client()
        .get_profile(&token)
        .await
        .expect("get_profile failed");

    assert_eq!(profile.id, 1);
    assert_eq!(profile.name, "Alice");
}

#[tokio::test]
async fn test_expired_session_requires_new_login() {
    let server = setup_mock_server().await;
    let auth = AuthManager::new(test_client(&server));

    auth.token_store().set_token("tok123".to_string(), 0);

    let err = auth.token().unwrap_err();
    assert!(err.to_string().contains("login first"));
    assert!(auth.token_store().get_token().is_none());
}
