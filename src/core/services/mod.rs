pub mod rewards_service;
pub mod summary_service;

pub use rewards_service::RewardsService;
pub use summary_service::{DashboardSummary, SummaryService};

use crate::errors::AnalyticsError;

pub type ServiceResult<T> = Result<T, AnalyticsError>;
