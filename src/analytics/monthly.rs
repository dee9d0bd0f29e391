use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::PeriodBucket;
use crate::ledger::{
    calendar::{lookback_cutoff, month_start, short_month_label},
    TransactionRecord,
};

/// Sums spending per calendar month for records dated on or after the 1st of
/// the month `months_back` months before `today`.
///
/// Months are keyed by their first day, so the series stays chronological
/// across year boundaries even though labels like `Jan` repeat. Months with no
/// transactions are omitted.
pub fn aggregate_monthly(
    records: &[TransactionRecord],
    months_back: u32,
    today: NaiveDate,
) -> Vec<PeriodBucket> {
    let cutoff = lookback_cutoff(today, months_back);

    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records.iter().filter(|record| record.date >= cutoff) {
        *totals.entry(month_start(record.date)).or_insert(0.0) += record.amount;
    }

    tracing::debug!(
        records = records.len(),
        %cutoff,
        months = totals.len(),
        "monthly series aggregated"
    );

    totals
        .into_iter()
        .map(|(month, amount)| PeriodBucket::new(short_month_label(month), amount))
        .collect()
}
