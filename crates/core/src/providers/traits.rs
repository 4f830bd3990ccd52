use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::strategy::Strategy;

/// Source of the strategy catalog.
///
/// The platform API is the production source; an in-memory source backs
/// previews and tests. Swapping the source never touches the calculation core.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StrategyProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch every strategy currently on offer.
    async fn fetch_strategies(&self) -> Result<Vec<Strategy>, CoreError>;
}
