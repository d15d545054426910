/*
[INPUT]:  Account credentials and gateway endpoints
[OUTPUT]: Authenticated session, wallet balance, and transfer result
[POS]:    Examples - end-to-end gateway flow demonstration
[UPDATE]: When the login or transfer flow changes
*/

use ewallet_gateway_adapter::*;

/// Example: Login, check balance, transfer
///
/// This example demonstrates the typical gateway flow:
/// 1. Create HTTP client
/// 2. Login with phone + password to obtain a bearer token
/// 3. Fetch the wallet balance
/// 4. Transfer funds to a saved payee's phone number
#[tokio::main]
async fn main() {
    println!("=== E-Wallet Gateway Example ===\n");

    // Step 1: Create HTTP client
    let client = match GatewayClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created ({})", client.base_url());

    // Step 2: Login
    let auth = AuthManager::new(client);
    let token = match auth.login("0812345678", "secret").await {
        Ok(response) => {
            println!("✓ Logged in: {}", response.message.as_deref().unwrap_or("ok"));
            auth.token().expect("token stored after login")
        }
        Err(e) => {
            eprintln!("Login failed: {}", e);
            return;
        }
    };

    // Step 3: Wallet balance
    match auth.client().get_my_wallet(&token).await {
        Ok(wallet) => println!("✓ Balance: {}", wallet.balance),
        Err(e) => eprintln!("Could not fetch wallet: {}", e),
    }

    // Step 4: Transfer
    let transfer = TransferRequest {
        receiver_phone: "0899001122".to_string(),
        amount: "10.00".parse().expect("demo amount"),
        description: Some("example transfer".to_string()),
    };

    match auth.client().create_transaction(&token, &transfer).await {
        Ok(tx) => println!("✓ Transfer {} -> status {:?}", tx.id, tx.status),
        Err(e) if e.is_auth_error() => eprintln!("Session rejected: {}", e),
        Err(e) => eprintln!("Transfer failed: {}", e),
    }

    println!("\n✓ Gateway example complete");
}
