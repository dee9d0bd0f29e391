use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{
    aggregate_by_category, aggregate_daily, aggregate_monthly, aggregate_weekly, budget_progress,
    current_month_total, group_by_month_with_budget, records_in_month, trailing_window_anchor,
    BudgetProgress, CategoryBucket, DailyBucket, MonthGroup, PeriodBucket,
};
use crate::config::AnalyticsConfig;
use crate::ledger::{decode_records, RawTransaction, TransactionRecord};

use super::ServiceResult;

/// Everything the overview page charts, computed in one pass over the history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub as_of: NaiveDate,
    pub daily: Vec<DailyBucket>,
    pub monthly: Vec<PeriodBucket>,
    pub weekly: Vec<PeriodBucket>,
    pub categories: Vec<CategoryBucket>,
    pub month_to_date: f64,
    pub budget: BudgetProgress,
}

pub struct SummaryService;

impl SummaryService {
    /// Builds the overview for `today`: the trailing daily window, the monthly
    /// lookback, and the current month's weeks, categories, and budget use.
    pub fn dashboard(
        records: &[TransactionRecord],
        config: &AnalyticsConfig,
        today: NaiveDate,
    ) -> ServiceResult<DashboardSummary> {
        config.validate()?;

        let anchor = trailing_window_anchor(today, config.daily_window_days);
        let this_month = records_in_month(records, today);
        let month_to_date = current_month_total(records, today);

        let summary = DashboardSummary {
            as_of: today,
            daily: aggregate_daily(records, config.daily_window_days, anchor),
            monthly: aggregate_monthly(records, config.months_back, today),
            weekly: aggregate_weekly(&this_month),
            categories: aggregate_by_category(&this_month),
            month_to_date,
            budget: budget_progress(month_to_date, config.budget_threshold),
        };
        tracing::debug!(
            records = records.len(),
            %today,
            over_budget = summary.budget.over_budget,
            "dashboard summary built"
        );
        Ok(summary)
    }

    /// Same as [`SummaryService::dashboard`] for rows straight from storage;
    /// fails on the first row without a usable date.
    pub fn dashboard_from_raw(
        rows: Vec<RawTransaction>,
        config: &AnalyticsConfig,
        today: NaiveDate,
    ) -> ServiceResult<DashboardSummary> {
        let records = decode_records(rows)?;
        Self::dashboard(&records, config, today)
    }

    /// Month-by-month history, newest first, flagged against `budget_threshold`.
    pub fn history(records: &[TransactionRecord], budget_threshold: f64) -> Vec<MonthGroup> {
        group_by_month_with_budget(records, budget_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalyticsError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dashboard_scopes_weekly_and_categories_to_current_month() {
        let records = vec![
            TransactionRecord::new(date(2024, 1, 30), 40.0).with_category("Food"),
            TransactionRecord::new(date(2024, 2, 3), 10.0).with_category("Food"),
            TransactionRecord::new(date(2024, 2, 10), 15.0),
        ];

        let summary =
            SummaryService::dashboard(&records, &AnalyticsConfig::default(), date(2024, 2, 12))
                .expect("valid config");

        assert_eq!(summary.daily.len(), 14);
        assert_eq!(summary.daily[0].day, date(2024, 1, 30));
        assert_eq!(summary.daily[0].amount, 40.0);
        assert_eq!(summary.monthly.len(), 2);
        assert_eq!(summary.weekly.len(), 2);
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.month_to_date, 25.0);
        assert!(!summary.budget.over_budget);
        assert_eq!(summary.budget.percent, 2.5);
    }

    #[test]
    fn dashboard_rejects_invalid_config() {
        let config = AnalyticsConfig::default().with_budget_threshold(-1.0);
        let err = SummaryService::dashboard(&[], &config, date(2024, 2, 12))
            .expect_err("negative threshold");
        assert!(matches!(err, AnalyticsError::InvalidConfig(_)));
    }

    #[test]
    fn dashboard_from_raw_surfaces_validation_errors() {
        let rows = vec![RawTransaction {
            id: Some(serde_json::json!("r1")),
            date: Some("someday".into()),
            ..RawTransaction::default()
        }];
        let err = SummaryService::dashboard_from_raw(
            rows,
            &AnalyticsConfig::default(),
            date(2024, 2, 12),
        )
        .expect_err("bad date");
        assert!(matches!(err, AnalyticsError::Validation(ref v) if v.record_id == "r1"));
    }
}
