use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::strategy::{strategies_from_json, Strategy};
use super::traits::StrategyProvider;

/// Varntix REST API strategy source.
///
/// - **Endpoint**: `GET {base_url}/strategies`
/// - **Response**: a JSON array of strategies, or `{ "data": [...] }`
/// - **Auth**: none; the catalog is public
pub struct HttpStrategyProvider {
    client: Client,
    base_url: String,
}

impl HttpStrategyProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the strategy list endpoint.
    pub fn strategies_url(&self) -> String {
        format!("{}/strategies", self.base_url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StrategyProvider for HttpStrategyProvider {
    fn name(&self) -> &str {
        "Varntix API"
    }

    async fn fetch_strategies(&self) -> Result<Vec<Strategy>, CoreError> {
        let url = self.strategies_url();
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: self.name().into(),
                message: format!("GET /strategies returned {status}"),
            });
        }

        let body = resp.text().await?;
        strategies_from_json(&body).map_err(|e| CoreError::Api {
            provider: self.name().into(),
            message: format!("Failed to parse strategy list: {e}"),
        })
    }
}
