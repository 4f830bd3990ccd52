use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::strategy::Strategy;
use super::traits::StrategyProvider;

/// Serves a fixed list of strategies.
pub struct StaticStrategyProvider {
    strategies: Vec<Strategy>,
}

impl StaticStrategyProvider {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StrategyProvider for StaticStrategyProvider {
    fn name(&self) -> &str {
        "Static"
    }

    async fn fetch_strategies(&self) -> Result<Vec<Strategy>, CoreError> {
        Ok(self.strategies.clone())
    }
}
