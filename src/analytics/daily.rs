use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::{calendar::day_label, TransactionRecord};

/// Spending on one calendar day of a dense window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyBucket {
    pub day: NaiveDate,
    pub label: String,
    pub amount: f64,
}

/// Anchor that makes a `window_days` window end on `today` inclusive.
pub fn trailing_window_anchor(today: NaiveDate, window_days: u32) -> NaiveDate {
    let back = i64::from(window_days.saturating_sub(1));
    today
        .checked_sub_signed(Duration::days(back))
        .unwrap_or(NaiveDate::MIN)
}

/// Sums spending per day over `[anchor, anchor + window_days)`.
///
/// Always yields one bucket per day of the window, oldest first; days without
/// transactions carry a zero amount so charts show flat days rather than gaps.
pub fn aggregate_daily(
    records: &[TransactionRecord],
    window_days: u32,
    anchor: NaiveDate,
) -> Vec<DailyBucket> {
    let end = anchor
        .checked_add_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut totals: HashMap<NaiveDate, f64> = HashMap::new();
    for record in records
        .iter()
        .filter(|record| record.date >= anchor && record.date < end)
    {
        *totals.entry(record.date).or_insert(0.0) += record.amount;
    }

    let buckets: Vec<DailyBucket> = anchor
        .iter_days()
        .take(window_days as usize)
        .map(|day| DailyBucket {
            day,
            label: day_label(day),
            amount: totals.get(&day).copied().unwrap_or(0.0),
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        days_with_spending = totals.len(),
        buckets = buckets.len(),
        "daily window aggregated"
    );
    buckets
}
