use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::frequency::PayoutFrequency;
use super::schedule::PayoutSchedule;

/// Everything the subscription screen shows for a strategy and principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentQuote {
    /// The strategy this quote was computed for
    pub strategy_id: String,

    pub principal: f64,

    /// APY as a decimal fraction
    pub apy: f64,

    pub frequency: PayoutFrequency,

    pub start_date: NaiveDate,

    /// Start date plus the strategy term, in calendar months
    pub maturity_date: NaiveDate,

    /// Flat amount paid out each period
    pub payout_per_period: f64,

    pub total_interest: f64,

    /// Principal returned at maturity plus all interest paid
    pub maturity_value: f64,

    pub schedule: PayoutSchedule,
}
