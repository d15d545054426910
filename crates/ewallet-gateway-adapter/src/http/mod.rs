/*
[INPUT]:  HTTP client configuration and gateway endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod health;
pub mod payees;
pub mod transactions;
pub mod users;
pub mod wallet;

pub use error::{GatewayError, Result};

pub use client::{ClientConfig, GatewayClient};
