use chrono::NaiveDate;

use crate::models::chart::{ChartPoint, TickLabel};
use crate::models::frequency::PayoutFrequency;
use crate::models::schedule::{PayoutSchedule, PayoutScheduleRow};
use crate::models::settings::{Settings, DEFAULT_SNAP_TOLERANCE_MONTHS};
use crate::services::interest_service::{compound_value_at_month, value_at_month};
use crate::services::schedule_service::period_date;

/// Elapsed months at a chart tick.
///
/// Weekly charts tick in weeks; monthly and quarterly charts already tick in months.
#[must_use]
pub fn index_to_months(index: u32, frequency: PayoutFrequency) -> f64 {
    match frequency {
        PayoutFrequency::Weekly => f64::from(index) * 12.0 / 52.0,
        PayoutFrequency::Monthly | PayoutFrequency::Quarterly => f64::from(index),
    }
}

/// Nearest chart tick for an elapsed month value. Negative input maps to tick 0.
#[must_use]
pub fn months_to_index(months: f64, frequency: PayoutFrequency) -> u32 {
    let ticks = match frequency {
        PayoutFrequency::Weekly => months * 52.0 / 12.0,
        PayoutFrequency::Monthly | PayoutFrequency::Quarterly => months,
    };
    if ticks.is_nan() || ticks <= 0.0 {
        0
    } else {
        ticks.round() as u32
    }
}

/// Number of ticks after "Today" on a chart spanning `term_months`.
#[must_use]
pub fn axis_length(term_months: u32, frequency: PayoutFrequency) -> u32 {
    match frequency {
        PayoutFrequency::Weekly => months_to_index(f64::from(term_months), frequency),
        PayoutFrequency::Monthly | PayoutFrequency::Quarterly => term_months,
    }
}

/// Label for a tick using the default 0.08-month snap tolerance.
#[must_use]
pub fn tick_label(index: u32, frequency: PayoutFrequency) -> TickLabel {
    tick_label_with_tolerance(index, frequency, DEFAULT_SNAP_TOLERANCE_MONTHS)
}

/// Label for a tick.
///
/// A weekly tick that lands within `tolerance` months of a whole month is
/// shown as that month ("1 Month" rather than "4 Weeks").
#[must_use]
pub fn tick_label_with_tolerance(index: u32, frequency: PayoutFrequency, tolerance: f64) -> TickLabel {
    if index == 0 {
        return TickLabel::Today;
    }
    match frequency {
        PayoutFrequency::Weekly => {
            let months = index_to_months(index, frequency);
            let whole = months.round();
            if whole >= 1.0 && (months - whole).abs() <= tolerance {
                TickLabel::Months(whole as u32)
            } else {
                TickLabel::Weeks(index)
            }
        }
        PayoutFrequency::Monthly | PayoutFrequency::Quarterly => TickLabel::Months(index),
    }
}

/// Generates chart-ready series for a strategy's growth chart.
///
/// Two curves per tick: the platform's simple-interest value and a
/// compounding benchmark at the same APY and frequency.
pub struct ChartService {
    snap_tolerance: f64,
    include_benchmark: bool,
}

impl ChartService {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            snap_tolerance: settings.boundary_snap_tolerance_months,
            include_benchmark: settings.include_benchmark,
        }
    }

    /// One point per tick from "Today" through the end of the term.
    ///
    /// The last weekly tick can land slightly past the term; its month value
    /// is clamped to `term_months` so the curve never overshoots maturity.
    pub fn generate_chart(
        &self,
        principal: f64,
        apy: f64,
        term_months: u32,
        frequency: PayoutFrequency,
    ) -> Vec<ChartPoint> {
        let ticks = axis_length(term_months, frequency);
        let term = f64::from(term_months);

        let points: Vec<ChartPoint> = (0..=ticks)
            .map(|index| {
                let months = index_to_months(index, frequency).min(term);
                let value = value_at_month(principal, apy, frequency, months);
                let benchmark_value = if self.include_benchmark {
                    compound_value_at_month(principal, apy, frequency, months)
                } else {
                    value
                };
                ChartPoint {
                    index,
                    months,
                    value,
                    benchmark_value,
                    label: tick_label_with_tolerance(index, frequency, self.snap_tolerance),
                }
            })
            .collect();

        tracing::debug!(%frequency, term_months, points = points.len(), "generated chart");
        points
    }

    /// Label for a tick using this service's configured tolerance.
    pub fn label_for(&self, index: u32, frequency: PayoutFrequency) -> TickLabel {
        tick_label_with_tolerance(index, frequency, self.snap_tolerance)
    }

    /// The payout a hovered tick falls into: the first schedule row on or
    /// after the tick's calendar date.
    pub fn payout_for_index<'a>(
        &self,
        schedule: &'a PayoutSchedule,
        start_date: NaiveDate,
        index: u32,
        frequency: PayoutFrequency,
    ) -> Option<&'a PayoutScheduleRow> {
        let tick_date = match frequency {
            PayoutFrequency::Weekly => period_date(start_date, PayoutFrequency::Weekly, index)?,
            PayoutFrequency::Monthly | PayoutFrequency::Quarterly => {
                period_date(start_date, PayoutFrequency::Monthly, index)?
            }
        };
        schedule.rows.iter().find(|r| r.date >= tick_date)
    }

    /// Simple-interest value at a tick, for tooltips.
    pub fn value_at_index(
        &self,
        principal: f64,
        apy: f64,
        index: u32,
        frequency: PayoutFrequency,
    ) -> f64 {
        value_at_month(principal, apy, frequency, index_to_months(index, frequency))
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
