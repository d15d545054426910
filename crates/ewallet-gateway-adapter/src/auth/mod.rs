/*
[INPUT]:  Login credentials and issued bearer tokens
[OUTPUT]: Authenticated session state
[POS]:    Auth layer - module wiring
[UPDATE]: When auth components change
*/

pub mod manager;
pub mod session;

pub use manager::AuthManager;
pub use session::{SessionToken, TokenStore};
