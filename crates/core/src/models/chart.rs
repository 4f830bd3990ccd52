use serde::{Deserialize, Serialize};

/// One x-axis tick of a strategy growth chart, carrying both curve values
/// and the label shown under the tick or in the hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Discrete x-axis tick (weeks for weekly strategies, months otherwise)
    pub index: u32,

    /// Elapsed months at this tick, possibly fractional
    pub months: f64,

    /// Principal plus simple interest accrued so far
    pub value: f64,

    /// Principal compounded at the payout frequency, for comparison
    pub benchmark_value: f64,

    /// Axis/tooltip label
    pub label: TickLabel,
}

/// Human label for a chart tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickLabel {
    Today,
    Weeks(u32),
    Months(u32),
}

impl std::fmt::Display for TickLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickLabel::Today => write!(f, "Today"),
            TickLabel::Weeks(1) => write!(f, "1 Week"),
            TickLabel::Weeks(n) => write!(f, "{n} Weeks"),
            TickLabel::Months(1) => write!(f, "1 Month"),
            TickLabel::Months(n) => write!(f, "{n} Months"),
        }
    }
}
