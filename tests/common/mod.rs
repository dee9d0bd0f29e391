#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{Duration, NaiveDate};
use funded_core::{config::ConfigManager, ledger::TransactionRecord};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config manager backed by a unique directory for each test.
pub fn setup_config_manager() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn spend(on: NaiveDate, amount: f64, category: Option<&str>) -> TransactionRecord {
    let mut record = TransactionRecord::new(on, amount);
    record.category = category.map(str::to_string);
    record
}

/// A deterministic, deliberately shuffled history spanning two calendar years.
pub fn scattered_history(start: NaiveDate, count: usize) -> Vec<TransactionRecord> {
    const CATEGORIES: [Option<&str>; 5] = [Some("Food"), Some("Rent"), None, Some(""), Some("Fun")];
    (0..count)
        .map(|idx| {
            let offset = (idx * 37 % 500) as i64;
            let amount = 1.25 + (idx % 17) as f64;
            spend(
                start + Duration::days(offset),
                amount,
                CATEGORIES[idx % CATEGORIES.len()],
            )
        })
        .collect()
}
