use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::frequency::PayoutFrequency;

/// An investment product offered by the platform.
///
/// Supplied by the remote API and never mutated locally. Field names follow
/// the API's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Opaque identifier assigned by the API
    pub id: String,

    /// Display name (e.g., "Stable Yield 12M")
    pub name: String,

    /// Smallest principal accepted
    #[serde(default)]
    pub min_amount: f64,

    /// Largest principal accepted, if capped
    #[serde(default)]
    pub cap_amount: Option<f64>,

    /// Annual percentage yield in whole percent (12.0 = 12%)
    pub apy: f64,

    /// Fixed term in months
    pub term_months: u32,

    /// Free-text payout frequency label, e.g. "Weekly Payout"
    pub payout_frequency: String,

    /// Human-readable redemption terms
    #[serde(default)]
    pub redemption_terms: Option<String>,
}

/// API list responses come either bare or wrapped in `{ "data": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StrategyListResponse {
    Bare(Vec<Strategy>),
    Wrapped { data: Vec<Strategy> },
}

impl Strategy {
    /// Resolved payout frequency (unknown labels fall back to monthly).
    #[must_use]
    pub fn frequency(&self) -> PayoutFrequency {
        PayoutFrequency::resolve(&self.payout_frequency)
    }

    /// APY as a decimal fraction (0.12 for 12%).
    #[must_use]
    pub fn apy_decimal(&self) -> f64 {
        self.apy / 100.0
    }

    /// Check a principal against this strategy's bounds.
    pub fn validate_principal(&self, amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::InvalidAmount(amount));
        }
        if amount < self.min_amount {
            return Err(CoreError::BelowMinimum {
                amount,
                minimum: self.min_amount,
            });
        }
        if let Some(cap) = self.cap_amount {
            if amount > cap {
                return Err(CoreError::AboveCap { amount, cap });
            }
        }
        Ok(())
    }

    /// Parse a single strategy from API JSON.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parse a strategy list from API JSON.
pub fn strategies_from_json(json: &str) -> Result<Vec<Strategy>, CoreError> {
    let parsed: StrategyListResponse = serde_json::from_str(json)?;
    Ok(match parsed {
        StrategyListResponse::Bare(list) => list,
        StrategyListResponse::Wrapped { data } => data,
    })
}
