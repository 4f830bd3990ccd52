use crate::errors::CoreError;
use crate::models::strategy::Strategy;
use crate::providers::registry::StrategyProviderRegistry;

/// Loads and caches the strategy catalog.
///
/// Providers are tried in registration order; the first that answers wins.
/// The cached catalog is kept until the next successful refresh.
pub struct StrategyService {
    registry: StrategyProviderRegistry,
    catalog: Vec<Strategy>,
}

impl StrategyService {
    pub fn new(registry: StrategyProviderRegistry) -> Self {
        Self {
            registry,
            catalog: Vec::new(),
        }
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.registry
            .providers()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Fetch the catalog with provider fallback and replace the cached copy.
    pub async fn refresh(&mut self) -> Result<&[Strategy], CoreError> {
        let providers = self.registry.providers();
        if providers.is_empty() {
            return Err(CoreError::NoProvider);
        }

        let mut last_error = None;
        for provider in &providers {
            match provider.fetch_strategies().await {
                Ok(strategies) => {
                    tracing::debug!(
                        provider = provider.name(),
                        count = strategies.len(),
                        "loaded strategy catalog"
                    );
                    self.catalog = strategies;
                    return Ok(&self.catalog);
                }
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "strategy provider failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoProvider))
    }

    /// The last successfully loaded catalog (empty before the first refresh).
    pub fn catalog(&self) -> &[Strategy] {
        &self.catalog
    }

    /// Look up a cached strategy by id.
    pub fn find(&self, id: &str) -> Result<&Strategy, CoreError> {
        self.catalog
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::StrategyNotFound(id.to_string()))
    }
}
