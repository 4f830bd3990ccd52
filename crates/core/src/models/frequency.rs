use serde::{Deserialize, Serialize};

/// How often a strategy disburses interest to the investor.
///
/// Independent of how interest accrues: accrual is always simple interest
/// on the principal, the frequency only decides how it is split into payouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutFrequency {
    /// 52 payouts a year, 7-day steps
    Weekly,
    /// 12 payouts a year, calendar-month steps
    #[default]
    Monthly,
    /// 4 payouts a year, 3-calendar-month steps
    Quarterly,
}

impl PayoutFrequency {
    /// Resolve a free-text frequency label as sent by the API or typed in the UI.
    ///
    /// Matching is a case-insensitive substring test: anything mentioning
    /// "week" is weekly, anything mentioning "quarter" is quarterly, and
    /// everything else (including unrecognized labels) falls back to monthly.
    #[must_use]
    pub fn resolve(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("week") {
            PayoutFrequency::Weekly
        } else if lower.contains("quarter") {
            PayoutFrequency::Quarterly
        } else {
            PayoutFrequency::Monthly
        }
    }

    /// Number of payout periods in one year.
    #[must_use]
    pub const fn periods_per_year(&self) -> u32 {
        match self {
            PayoutFrequency::Weekly => 52,
            PayoutFrequency::Monthly => 12,
            PayoutFrequency::Quarterly => 4,
        }
    }

    /// Number of payout periods over a term of `term_months` months.
    #[must_use]
    pub fn period_count(&self, term_months: u32) -> u32 {
        match self {
            PayoutFrequency::Weekly => (f64::from(term_months) * 52.0 / 12.0).round() as u32,
            PayoutFrequency::Monthly => term_months,
            PayoutFrequency::Quarterly => (f64::from(term_months) / 3.0).round() as u32,
        }
    }
}

impl From<&str> for PayoutFrequency {
    fn from(label: &str) -> Self {
        PayoutFrequency::resolve(label)
    }
}

impl std::fmt::Display for PayoutFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayoutFrequency::Weekly => write!(f, "Weekly"),
            PayoutFrequency::Monthly => write!(f, "Monthly"),
            PayoutFrequency::Quarterly => write!(f, "Quarterly"),
        }
    }
}
