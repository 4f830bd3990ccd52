pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDate;
use models::{
    chart::{ChartPoint, TickLabel},
    frequency::PayoutFrequency,
    quote::InvestmentQuote,
    schedule::{PayoutSchedule, PayoutScheduleRow},
    settings::Settings,
    strategy::Strategy,
};
use providers::registry::StrategyProviderRegistry;
use services::{
    chart_service::ChartService, schedule_service::maturity_date,
    strategy_service::StrategyService,
};

use errors::CoreError;

pub use services::chart_service::{index_to_months, months_to_index, tick_label};
pub use services::interest_service::{compound_value_at_month, interest_for_period, value_at_month};
pub use services::schedule_service::{build_payout_schedule, build_payout_schedule_at};

/// Resolve a free-text payout frequency label; unknown labels are monthly.
#[must_use]
pub fn resolve_frequency(label: &str) -> PayoutFrequency {
    PayoutFrequency::resolve(label)
}

/// Longest term a quote will be computed for (50 years).
const MAX_TERM_MONTHS: u32 = 600;

/// Main entry point for the Varntix core library.
/// Holds settings, the strategy catalog and the chart service.
#[must_use]
pub struct YieldPlanner {
    settings: Settings,
    strategy_service: StrategyService,
    chart_service: ChartService,
}

impl std::fmt::Debug for YieldPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YieldPlanner")
            .field("settings", &self.settings)
            .field("strategies", &self.strategy_service.catalog().len())
            .field("providers", &self.strategy_service.provider_names())
            .finish()
    }
}

impl YieldPlanner {
    /// Planner with default settings and no strategy providers.
    pub fn new() -> Self {
        Self::with_registry(Settings::default(), StrategyProviderRegistry::new())
    }

    /// Planner whose providers are derived from `settings`.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        let registry = StrategyProviderRegistry::new_with_defaults(&settings);
        Ok(Self::with_registry(settings, registry))
    }

    /// Planner with an explicit provider registry.
    pub fn with_registry(settings: Settings, registry: StrategyProviderRegistry) -> Self {
        Self {
            chart_service: ChartService::with_settings(&settings),
            strategy_service: StrategyService::new(registry),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Strategy catalog ────────────────────────────────────────────

    /// Reload the strategy catalog from the registered providers.
    pub async fn refresh_strategies(&mut self) -> Result<&[Strategy], CoreError> {
        self.strategy_service.refresh().await
    }

    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        self.strategy_service.catalog()
    }

    pub fn strategy(&self, id: &str) -> Result<&Strategy, CoreError> {
        self.strategy_service.find(id)
    }

    // ── Quotes & schedules ──────────────────────────────────────────

    /// Full quote for investing `principal` in `strategy` from `start_date`.
    pub fn quote(
        &self,
        strategy: &Strategy,
        principal: f64,
        start_date: NaiveDate,
    ) -> Result<InvestmentQuote, CoreError> {
        let today = chrono::Utc::now().date_naive();
        self.quote_at(strategy, principal, start_date, today)
    }

    /// Like [`quote`](Self::quote) with an explicit "today" for the next payout.
    pub fn quote_at(
        &self,
        strategy: &Strategy,
        principal: f64,
        start_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<InvestmentQuote, CoreError> {
        strategy.validate_principal(principal)?;
        if !strategy.apy.is_finite() || strategy.apy < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Strategy {} has invalid APY {}",
                strategy.id, strategy.apy
            )));
        }
        if strategy.term_months == 0 || strategy.term_months > MAX_TERM_MONTHS {
            return Err(CoreError::ValidationError(format!(
                "Strategy {} has unsupported term of {} months",
                strategy.id, strategy.term_months
            )));
        }

        let maturity = maturity_date(start_date, strategy.term_months).ok_or_else(|| {
            CoreError::ValidationError(format!("Start date {start_date} is out of range"))
        })?;

        let frequency = strategy.frequency();
        if frequency.period_count(strategy.term_months) == 0 {
            return Err(CoreError::ValidationError(format!(
                "Strategy {} term of {} months is shorter than one {} payout period",
                strategy.id,
                strategy.term_months,
                frequency.to_string().to_lowercase()
            )));
        }
        let apy = strategy.apy_decimal();
        let schedule = build_payout_schedule_at(
            principal,
            apy,
            start_date,
            strategy.term_months,
            frequency,
            today,
        );

        Ok(InvestmentQuote {
            strategy_id: strategy.id.clone(),
            principal,
            apy,
            frequency,
            start_date,
            maturity_date: maturity,
            payout_per_period: interest_for_period(principal, apy, frequency),
            total_interest: schedule.total_interest,
            maturity_value: principal + schedule.total_interest,
            schedule,
        })
    }

    /// Quote a cached strategy by id.
    pub fn quote_by_id(
        &self,
        strategy_id: &str,
        principal: f64,
        start_date: NaiveDate,
    ) -> Result<InvestmentQuote, CoreError> {
        let strategy = self.strategy_service.find(strategy_id)?;
        self.quote(strategy, principal, start_date)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Growth chart for a strategy and principal.
    #[must_use]
    pub fn chart(&self, strategy: &Strategy, principal: f64) -> Vec<ChartPoint> {
        self.chart_service.generate_chart(
            principal,
            strategy.apy_decimal(),
            strategy.term_months,
            strategy.frequency(),
        )
    }

    /// Label for a chart tick using the configured snap tolerance.
    #[must_use]
    pub fn tick_label(&self, index: u32, frequency: PayoutFrequency) -> TickLabel {
        self.chart_service.label_for(index, frequency)
    }

    /// The payout a hovered chart tick belongs to.
    #[must_use]
    pub fn payout_for_tick<'a>(
        &self,
        quote: &'a InvestmentQuote,
        index: u32,
    ) -> Option<&'a PayoutScheduleRow> {
        self.chart_service
            .payout_for_index(&quote.schedule, quote.start_date, index, quote.frequency)
    }

    /// Schedule for raw inputs, bypassing strategy validation.
    #[must_use]
    pub fn schedule(
        &self,
        principal: f64,
        apy: f64,
        start_date: NaiveDate,
        term_months: u32,
        frequency: PayoutFrequency,
    ) -> PayoutSchedule {
        build_payout_schedule(principal, apy, start_date, term_months, frequency)
    }
}

impl Default for YieldPlanner {
    fn default() -> Self {
        Self::new()
    }
}
