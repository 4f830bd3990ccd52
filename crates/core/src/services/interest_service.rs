//! Interest math for fixed-term strategies.
//!
//! All functions here are pure and total. Callers validate that principal,
//! APY and elapsed time are finite and non-negative before calling.

use crate::models::frequency::PayoutFrequency;

/// Total value (principal + accrued simple interest) after `elapsed_months`.
///
/// Linear in elapsed time; the payout frequency does not change accrual,
/// it only matters for how the interest is paid out (see the schedule
/// builder). `elapsed_months` may be fractional and is not clamped.
#[must_use]
pub fn value_at_month(
    principal: f64,
    apy: f64,
    _frequency: PayoutFrequency,
    elapsed_months: f64,
) -> f64 {
    principal + principal * apy * (elapsed_months / 12.0)
}

/// Flat interest amount paid each period.
#[must_use]
pub fn interest_for_period(principal: f64, apy: f64, frequency: PayoutFrequency) -> f64 {
    principal * apy / f64::from(frequency.periods_per_year())
}

/// Value of the principal if each period's interest were reinvested.
///
/// Used as the comparison curve on growth charts.
#[must_use]
pub fn compound_value_at_month(
    principal: f64,
    apy: f64,
    frequency: PayoutFrequency,
    elapsed_months: f64,
) -> f64 {
    let n = f64::from(frequency.periods_per_year());
    principal * (1.0 + apy / n).powf(n * elapsed_months / 12.0)
}
