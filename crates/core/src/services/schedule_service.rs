use chrono::{Days, Months, NaiveDate};

use crate::models::frequency::PayoutFrequency;
use crate::models::schedule::{PayoutSchedule, PayoutScheduleRow};
use crate::services::interest_service::interest_for_period;

/// Build the payout schedule, judging `next` against today's UTC date.
#[must_use]
pub fn build_payout_schedule(
    principal: f64,
    apy: f64,
    start_date: NaiveDate,
    term_months: u32,
    frequency: PayoutFrequency,
) -> PayoutSchedule {
    let today = chrono::Utc::now().date_naive();
    build_payout_schedule_at(principal, apy, start_date, term_months, frequency, today)
}

/// Build the payout schedule with an explicit "today".
///
/// 1. One row per period, `frequency.period_count(term_months)` rows
/// 2. Row `i` falls on `start_date + i` steps, computed from the start date
///    each time so month-end clamping never accumulates
/// 3. The last row is pinned to `start_date + term_months` calendar months
/// 4. Every row pays the flat `interest_for_period` amount; the last row
///    absorbs rounding so the rows sum exactly to `per_period * rows`
///
/// Non-positive principal or a zero term yields an empty schedule.
#[must_use]
pub fn build_payout_schedule_at(
    principal: f64,
    apy: f64,
    start_date: NaiveDate,
    term_months: u32,
    frequency: PayoutFrequency,
    today: NaiveDate,
) -> PayoutSchedule {
    if principal.is_nan() || principal <= 0.0 || term_months == 0 {
        return PayoutSchedule::empty();
    }

    let Some(term_end) = maturity_date(start_date, term_months) else {
        tracing::warn!(%start_date, term_months, "term end out of calendar range");
        return PayoutSchedule::empty();
    };

    let count = frequency.period_count(term_months);
    let per_period = interest_for_period(principal, apy, frequency);

    let mut rows = Vec::with_capacity(count as usize);
    for i in 1..=count {
        let date = if i == count {
            Some(term_end)
        } else {
            period_date(start_date, frequency, i)
        };
        match date {
            Some(date) => rows.push(PayoutScheduleRow {
                date,
                interest_amount: per_period,
            }),
            None => {
                tracing::warn!(%start_date, period = i, "payout date out of calendar range");
                break;
            }
        }
    }

    let total_interest = reconcile_last_row(&mut rows, per_period);
    let next = rows.iter().find(|r| r.date > today).cloned();

    tracing::debug!(
        %frequency,
        term_months,
        rows = rows.len(),
        total_interest,
        "built payout schedule"
    );

    PayoutSchedule {
        rows,
        total_interest,
        next,
    }
}

/// Pin the total to `per_period * rows` and settle the difference on the last row.
///
/// The earlier rows sum to roughly `total - per_period`, so the subtraction is
/// exact and adding the last row back reproduces `total` bit for bit.
fn reconcile_last_row(rows: &mut [PayoutScheduleRow], per_period: f64) -> f64 {
    let Some((last, earlier)) = rows.split_last_mut() else {
        return 0.0;
    };
    let total = per_period * (earlier.len() + 1) as f64;
    let paid_before: f64 = earlier.iter().map(|r| r.interest_amount).sum();
    last.interest_amount = total - paid_before;
    total
}

/// Date the term ends: `start_date` plus `term_months` calendar months.
#[must_use]
pub fn maturity_date(start_date: NaiveDate, term_months: u32) -> Option<NaiveDate> {
    start_date.checked_add_months(Months::new(term_months))
}

/// Date of the `n`-th period boundary after `start_date`.
#[must_use]
pub fn period_date(start_date: NaiveDate, frequency: PayoutFrequency, n: u32) -> Option<NaiveDate> {
    match frequency {
        PayoutFrequency::Weekly => start_date.checked_add_days(Days::new(7 * u64::from(n))),
        PayoutFrequency::Monthly => start_date.checked_add_months(Months::new(n)),
        PayoutFrequency::Quarterly => start_date.checked_add_months(Months::new(n.checked_mul(3)?)),
    }
}
