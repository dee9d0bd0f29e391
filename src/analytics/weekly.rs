use std::collections::BTreeMap;

use super::PeriodBucket;
use crate::ledger::{
    calendar::{week_label, week_of_month},
    TransactionRecord,
};

/// Sums spending per fixed-offset week of the month (`ceil(day / 7)`).
///
/// Callers pass records already narrowed to one month; no month filtering
/// happens here. Weeks without transactions are omitted.
pub fn aggregate_weekly(records_in_month: &[TransactionRecord]) -> Vec<PeriodBucket> {
    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for record in records_in_month {
        *totals.entry(week_of_month(record.date)).or_insert(0.0) += record.amount;
    }

    tracing::debug!(
        records = records_in_month.len(),
        weeks = totals.len(),
        "weekly series aggregated"
    );

    totals
        .into_iter()
        .map(|(week, amount)| PeriodBucket::new(week_label(week), amount))
        .collect()
}
