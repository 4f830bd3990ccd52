// ═══════════════════════════════════════════════════════════════════
// Provider Tests — registry, static/HTTP providers, catalog fallback
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;

use varntix_core::errors::CoreError;
use varntix_core::models::settings::Settings;
use varntix_core::models::strategy::Strategy;
use varntix_core::providers::http::HttpStrategyProvider;
use varntix_core::providers::memory::StaticStrategyProvider;
use varntix_core::providers::registry::StrategyProviderRegistry;
use varntix_core::providers::traits::StrategyProvider;
use varntix_core::services::strategy_service::StrategyService;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Providers
// ═══════════════════════════════════════════════════════════════════

/// Always fails, like an API that is down.
struct FailingProvider;

#[async_trait]
impl StrategyProvider for FailingProvider {
    fn name(&self) -> &str {
        "Failing"
    }

    async fn fetch_strategies(&self) -> Result<Vec<Strategy>, CoreError> {
        Err(CoreError::Api {
            provider: "Failing".into(),
            message: "503 Service Unavailable".into(),
        })
    }
}

fn strategy(id: &str, apy: f64, term_months: u32, frequency: &str) -> Strategy {
    Strategy {
        id: id.into(),
        name: format!("Strategy {id}"),
        min_amount: 100.0,
        cap_amount: None,
        apy,
        term_months,
        payout_frequency: frequency.into(),
        redemption_terms: None,
    }
}

fn catalog() -> Vec<Strategy> {
    vec![
        strategy("stable-12m", 12.0, 12, "Monthly"),
        strategy("weekly-6m", 9.0, 6, "Weekly Payout"),
    ]
}

// ═══════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════

mod registry {
    use super::*;

    #[test]
    fn starts_empty() {
        let registry = StrategyProviderRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = StrategyProviderRegistry::default();
        registry.register(Box::new(FailingProvider));
        registry.register(Box::new(StaticStrategyProvider::new(catalog())));
        let providers = registry.providers();
        let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Failing", "Static"]);
    }

    #[test]
    fn defaults_without_url_register_nothing() {
        let registry = StrategyProviderRegistry::new_with_defaults(&Settings::default());
        assert!(registry.is_empty());
    }

    #[test]
    fn defaults_with_url_register_http() {
        let settings = Settings {
            api_base_url: Some("https://api.example.com/v1".into()),
            ..Settings::default()
        };
        let registry = StrategyProviderRegistry::new_with_defaults(&settings);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.providers()[0].name(), "Varntix API");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Providers
// ═══════════════════════════════════════════════════════════════════

mod providers {
    use super::*;

    #[tokio::test]
    async fn static_provider_returns_its_list() {
        let provider = StaticStrategyProvider::new(catalog());
        let list = provider.fetch_strategies().await.unwrap();
        assert_eq!(list, catalog());
    }

    #[test]
    fn http_url_trims_trailing_slash() {
        let provider = HttpStrategyProvider::new("https://api.example.com/v1/");
        assert_eq!(provider.strategies_url(), "https://api.example.com/v1/strategies");
    }

    #[test]
    fn http_url_without_trailing_slash() {
        let provider = HttpStrategyProvider::new("https://api.example.com");
        assert_eq!(provider.strategies_url(), "https://api.example.com/strategies");
    }
}

// ═══════════════════════════════════════════════════════════════════
// StrategyService
// ═══════════════════════════════════════════════════════════════════

mod strategy_service {
    use super::*;

    #[tokio::test]
    async fn no_providers_is_an_error() {
        let mut svc = StrategyService::new(StrategyProviderRegistry::new());
        assert!(matches!(svc.refresh().await, Err(CoreError::NoProvider)));
        assert!(svc.catalog().is_empty());
    }

    #[tokio::test]
    async fn falls_back_to_next_provider() {
        let mut registry = StrategyProviderRegistry::new();
        registry.register(Box::new(FailingProvider));
        registry.register(Box::new(StaticStrategyProvider::new(catalog())));
        let mut svc = StrategyService::new(registry);

        let list = svc.refresh().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(svc.catalog().len(), 2);
    }

    #[tokio::test]
    async fn all_failing_returns_last_error() {
        let mut registry = StrategyProviderRegistry::new();
        registry.register(Box::new(FailingProvider));
        let mut svc = StrategyService::new(registry);

        match svc.refresh().await {
            Err(CoreError::Api { provider, .. }) => assert_eq!(provider, "Failing"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn find_after_refresh() {
        let mut registry = StrategyProviderRegistry::new();
        registry.register(Box::new(StaticStrategyProvider::new(catalog())));
        let mut svc = StrategyService::new(registry);
        svc.refresh().await.unwrap();

        assert!(svc.find("weekly-6m").is_ok());
        assert_eq!(svc.provider_names(), vec!["Static".to_string()]);
    }

    #[tokio::test]
    async fn find_unknown_id() {
        let mut registry = StrategyProviderRegistry::new();
        registry.register(Box::new(StaticStrategyProvider::new(catalog())));
        let mut svc = StrategyService::new(registry);
        svc.refresh().await.unwrap();

        match svc.find("nope") {
            Err(CoreError::StrategyNotFound(id)) => assert_eq!(id, "nope"),
            other => panic!("expected StrategyNotFound, got {other:?}"),
        }
    }
}
