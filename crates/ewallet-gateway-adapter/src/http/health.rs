/*
[INPUT]:  Gateway liveness endpoint
[OUTPUT]: Gateway and downstream service status
[POS]:    HTTP layer - health check (no auth required)
[UPDATE]: When the gateway health report changes shape
*/

use crate::http::{GatewayClient, Result};
use crate::types::GatewayHealth;
use reqwest::Method;

impl GatewayClient {
    /// Gateway liveness report, including downstream service status
    ///
    /// GET /health
    pub async fn health(&self) -> Result<GatewayHealth> {
        let builder = self.gateway_request(Method::GET, "/health")?;
        self.send_json(builder).await
    }
}
