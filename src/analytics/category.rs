use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ledger::{round_half_up, TransactionRecord};

/// Spending total for one category, rounded to cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBucket {
    pub category: String,
    pub amount: f64,
}

/// Sums spending per category in order of first appearance.
///
/// Sums accumulate unrounded and are rounded half-up once at output. Records
/// with an absent or blank category fold into `Uncategorized`.
pub fn aggregate_by_category(records_in_month: &[TransactionRecord]) -> Vec<CategoryBucket> {
    let mut order: Vec<(&str, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records_in_month {
        let label = record.category_label();
        let slot = *index.entry(label).or_insert_with(|| {
            order.push((label, 0.0));
            order.len() - 1
        });
        order[slot].1 += record.amount;
    }

    tracing::debug!(
        records = records_in_month.len(),
        categories = order.len(),
        "category breakdown aggregated"
    );

    order
        .into_iter()
        .map(|(category, amount)| CategoryBucket {
            category: category.to_string(),
            amount: round_half_up(amount),
        })
        .collect()
}
