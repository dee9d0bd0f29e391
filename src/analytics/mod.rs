//! Aggregation engine: pure reductions from a user's transaction records to
//! the chart series, category breakdowns, and budget checks the dashboard
//! renders.
//!
//! Every function takes the records by reference and builds fresh output;
//! nothing is cached between calls, so a new transaction simply means calling
//! again with the longer list.

pub mod budget;
pub mod category;
pub mod daily;
pub mod monthly;
pub mod weekly;

use serde::{Deserialize, Serialize};

pub use budget::{
    budget_progress, current_month_total, group_by_month_with_budget, records_in_month,
    BudgetProgress, MonthGroup,
};
pub use category::{aggregate_by_category, CategoryBucket};
pub use daily::{aggregate_daily, trailing_window_anchor, DailyBucket};
pub use monthly::aggregate_monthly;
pub use weekly::aggregate_weekly;

/// One entry of a sparse month or week series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodBucket {
    pub period: String,
    pub amount: f64,
}

impl PeriodBucket {
    pub fn new(period: impl Into<String>, amount: f64) -> Self {
        Self {
            period: period.into(),
            amount,
        }
    }
}
