use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted streak state for one user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    #[serde(alias = "StreakCount")]
    pub count: u32,
    #[serde(alias = "LastLoginDate")]
    pub last_login: NaiveDate,
}

impl StreakRecord {
    pub fn started(today: NaiveDate) -> Self {
        Self {
            count: 1,
            last_login: today,
        }
    }
}

/// Result of registering a login; `changed` is false when nothing needs to be
/// written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub record: StreakRecord,
    pub changed: bool,
}

/// Registers a login on `today`.
///
/// A login on the day after the previous one extends the streak, a second
/// login on the same day leaves it alone, and any longer gap starts over at 1.
pub fn advance_streak(previous: Option<&StreakRecord>, today: NaiveDate) -> StreakUpdate {
    let Some(previous) = previous else {
        return StreakUpdate {
            record: StreakRecord::started(today),
            changed: true,
        };
    };

    let gap = (today - previous.last_login).num_days();
    let record = match gap {
        0 => {
            return StreakUpdate {
                record: *previous,
                changed: false,
            }
        }
        1 => StreakRecord {
            count: previous.count.saturating_add(1),
            last_login: today,
        },
        gap if gap < 0 => {
            tracing::warn!(
                last_login = %previous.last_login,
                %today,
                "last login is in the future, keeping streak"
            );
            return StreakUpdate {
                record: *previous,
                changed: false,
            };
        }
        _ => StreakRecord::started(today),
    };

    tracing::debug!(count = record.count, gap, "streak advanced");
    StreakUpdate {
        record,
        changed: true,
    }
}
