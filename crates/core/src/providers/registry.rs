use super::http::HttpStrategyProvider;
use super::traits::StrategyProvider;

use crate::models::settings::Settings;

/// Ordered list of strategy sources.
///
/// Earlier registrations take priority; later ones are fallbacks.
pub struct StrategyProviderRegistry {
    providers: Vec<Box<dyn StrategyProvider>>,
}

impl StrategyProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry from settings: the HTTP API when a base URL is configured.
    pub fn new_with_defaults(settings: &Settings) -> Self {
        let mut registry = Self::new();
        if let Some(url) = &settings.api_base_url {
            registry.register(Box::new(HttpStrategyProvider::new(url.clone())));
        }
        registry
    }

    pub fn register(&mut self, provider: Box<dyn StrategyProvider>) {
        self.providers.push(provider);
    }

    /// All providers in priority order.
    pub fn providers(&self) -> Vec<&dyn StrategyProvider> {
        self.providers.iter().map(|p| p.as_ref()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }
}

impl Default for StrategyProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
