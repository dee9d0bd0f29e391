use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ledger::{
    calendar::{long_month_label, month_start, same_month},
    round_half_up, TransactionRecord,
};

/// Ceiling for the display ratio; the raw total is never clamped.
const MAX_PROGRESS_PERCENT: f64 = 100.0;

/// Spending measured against a budget threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetProgress {
    pub spent: f64,
    pub threshold: f64,
    /// `spent / threshold * 100`, clamped to `[0, 100]` for progress bars.
    pub percent: f64,
    /// Set when `spent` exceeds `threshold` once both are rounded to cents.
    pub over_budget: bool,
}

/// Compares `spent` to `threshold` at cent precision.
///
/// A total exactly equal to the threshold is not over budget. A non-positive
/// threshold reads as fully used once anything has been spent.
pub fn budget_progress(spent: f64, threshold: f64) -> BudgetProgress {
    let over_budget = round_half_up(spent) > round_half_up(threshold);
    let percent = if threshold > 0.0 {
        (spent * 100.0 / threshold).clamp(0.0, MAX_PROGRESS_PERCENT)
    } else if spent > 0.0 {
        MAX_PROGRESS_PERCENT
    } else {
        0.0
    };
    BudgetProgress {
        spent,
        threshold,
        percent,
        over_budget,
    }
}

/// One calendar month of the transaction history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthGroup {
    pub month_label: String,
    pub month_start: NaiveDate,
    /// Records of this month, in the order the caller supplied them.
    pub transactions: Vec<TransactionRecord>,
    pub total: f64,
    /// `total > threshold` compared at cent precision: a raw total of
    /// `1000.004` against `1000` is not over, `1000.01` is.
    pub over_budget: bool,
    pub progress_percent: f64,
}

/// Groups the whole history by calendar month, most recent month first, and
/// flags each month whose total exceeds `budget_threshold`.
pub fn group_by_month_with_budget(
    records: &[TransactionRecord],
    budget_threshold: f64,
) -> Vec<MonthGroup> {
    let mut months: BTreeMap<NaiveDate, Vec<TransactionRecord>> = BTreeMap::new();
    for record in records {
        months
            .entry(month_start(record.date))
            .or_default()
            .push(record.clone());
    }

    let groups: Vec<MonthGroup> = months
        .into_iter()
        .rev()
        .map(|(start, transactions)| {
            let total: f64 = transactions.iter().map(|record| record.amount).sum();
            let progress = budget_progress(total, budget_threshold);
            MonthGroup {
                month_label: long_month_label(start),
                month_start: start,
                transactions,
                total,
                over_budget: progress.over_budget,
                progress_percent: progress.percent,
            }
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        months = groups.len(),
        over_budget = groups.iter().filter(|group| group.over_budget).count(),
        "history grouped by month"
    );
    groups
}

/// Records dated in the same calendar month as `month_of`, in input order.
pub fn records_in_month(
    records: &[TransactionRecord],
    month_of: NaiveDate,
) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|record| same_month(record.date, month_of))
        .cloned()
        .collect()
}

/// Running total for the calendar month containing `today`.
pub fn current_month_total(records: &[TransactionRecord], today: NaiveDate) -> f64 {
    records
        .iter()
        .filter(|record| same_month(record.date, today))
        .map(|record| record.amount)
        .sum()
}
