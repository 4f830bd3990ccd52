use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One future interest payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutScheduleRow {
    /// Calendar date the payout is due
    pub date: NaiveDate,

    /// Interest paid out on that date
    pub interest_amount: f64,
}

/// Derived payout schedule for a (principal, APY, start, term, frequency) tuple.
///
/// Recomputed on every input change and never persisted.
/// `rows` is ascending by date and `total_interest` is the exact sum of
/// the row amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutSchedule {
    pub rows: Vec<PayoutScheduleRow>,

    pub total_interest: f64,

    /// First row strictly after "today", if any remain
    pub next: Option<PayoutScheduleRow>,
}

impl PayoutSchedule {
    /// An empty schedule (non-positive principal or zero term).
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Date of the last payout, which is the term end for non-empty schedules.
    #[must_use]
    pub fn final_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }

    /// Interest already paid out on or before `date`.
    #[must_use]
    pub fn paid_through(&self, date: NaiveDate) -> f64 {
        self.rows
            .iter()
            .take_while(|r| r.date <= date)
            .map(|r| r.interest_amount)
            .sum()
    }
}
