use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    amount::parse_amount,
    transaction::{parse_record_date, TransactionRecord},
};
use crate::errors::AnalyticsError;

/// Maximum number of decimals accepted for a typed amount.
const MAX_AMOUNT_DECIMALS: usize = 2;

/// Cuts typed amount input down to two decimals without rounding, so `12.345`
/// reads back as `12.34` while the user is still typing.
pub fn truncate_amount_input(input: &str) -> String {
    match input.split_once('.') {
        Some((integer, decimals)) if decimals.chars().count() > MAX_AMOUNT_DECIMALS => {
            let kept: String = decimals.chars().take(MAX_AMOUNT_DECIMALS).collect();
            format!("{integer}.{kept}")
        }
        _ => input.to_string(),
    }
}

/// A transaction as entered in the new/edit form, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub date: String,
    pub amount: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub payment_mode: String,
}

impl TransactionDraft {
    /// Starts an empty draft dated `today`.
    pub fn dated(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Prefills the form from an existing record for editing.
    pub fn from_record(record: &TransactionRecord) -> Self {
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            amount: record.amount.to_string(),
            description: record.description.clone().unwrap_or_default(),
            category: record.category.clone().unwrap_or_default(),
            payment_mode: record.payment_mode.clone().unwrap_or_default(),
        }
    }

    pub fn set_amount(&mut self, input: &str) {
        self.amount = truncate_amount_input(input);
    }

    /// Turns the draft into a record owned by `user_id`.
    ///
    /// Amount and description are required; blank category and payment mode
    /// are stored as absent.
    pub fn validate(&self, user_id: &str) -> Result<TransactionRecord, AnalyticsError> {
        if self.amount.trim().is_empty() || self.description.trim().is_empty() {
            return Err(AnalyticsError::InvalidEntry(
                "amount and description are required".into(),
            ));
        }
        let amount = parse_amount(Some(&serde_json::Value::String(self.amount.clone())))
            .ok_or_else(|| {
                AnalyticsError::InvalidEntry(format!("`{}` is not a valid amount", self.amount))
            })?;
        if amount < 0.0 {
            return Err(AnalyticsError::InvalidEntry(
                "amount cannot be negative".into(),
            ));
        }
        let date = parse_record_date(&self.date).ok_or_else(|| {
            AnalyticsError::InvalidEntry(format!("`{}` is not a valid date", self.date))
        })?;

        let mut record =
            TransactionRecord::new(date, amount).with_description(self.description.trim());
        record.category = non_blank(&self.category);
        record.payment_mode = non_blank(&self.payment_mode);
        record.user_id = Some(user_id.to_string());
        Ok(record)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
