use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::amount::parse_amount;
use crate::errors::{AnalyticsError, ValidationError, UNKNOWN_RECORD_ID};

/// Bucket label for records stored without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// One stored transaction row exactly as the backing store returns it.
///
/// Field names follow the camelCase record shape; the column names of the
/// hosted tables (`TransactionDate`, `Amount`, ...) are accepted as aliases.
/// `id`, `date` and `amount` are kept as raw JSON so a badly typed value only
/// affects its own row. Text fields holding anything but a string read as
/// absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    #[serde(default, alias = "Id", alias = "TransactionId")]
    pub id: Option<Value>,
    #[serde(default, alias = "TransactionDate")]
    pub date: Option<Value>,
    #[serde(default, alias = "Amount")]
    pub amount: Option<Value>,
    #[serde(default, alias = "Description", deserialize_with = "text_or_absent")]
    pub description: Option<String>,
    #[serde(default, alias = "Category", deserialize_with = "text_or_absent")]
    pub category: Option<String>,
    #[serde(default, alias = "PaymentMode", deserialize_with = "text_or_absent")]
    pub payment_mode: Option<String>,
    #[serde(default, alias = "UserId", alias = "user_id", deserialize_with = "text_or_absent")]
    pub user_id: Option<String>,
}

fn text_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Ok(Some(text)),
        None | Some(Value::Null) => Ok(None),
        Some(other) => {
            tracing::warn!(value = %other, "non-text field value ignored");
            Ok(None)
        }
    }
}

impl RawTransaction {
    /// The row id rendered as text, for error reporting and record identity.
    pub fn id_label(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}

/// A validated transaction: dated, with a coerced amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl TransactionRecord {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            amount,
            description: None,
            category: None,
            payment_mode: None,
            user_id: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Category used for bucketing. Surrounding whitespace is ignored, so
    /// `" Food"` and `"Food"` share a bucket, and absent, empty or
    /// whitespace-only categories share the [`UNCATEGORIZED_LABEL`] bucket.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => UNCATEGORIZED_LABEL,
        }
    }
}

impl TryFrom<RawTransaction> for TransactionRecord {
    type Error = ValidationError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let id = raw.id_label();
        let record_id = id.clone().unwrap_or_else(|| UNKNOWN_RECORD_ID.to_string());

        let date = match raw.date.as_ref() {
            None | Some(Value::Null) => {
                return Err(ValidationError::new(record_id, "missing date"))
            }
            Some(Value::String(text)) => parse_record_date(text).ok_or_else(|| {
                ValidationError::new(record_id.clone(), format!("malformed date `{text}`"))
            })?,
            Some(other) => {
                return Err(ValidationError::new(
                    record_id,
                    format!("malformed date `{other}`"),
                ))
            }
        };

        let amount = parse_amount(raw.amount.as_ref()).unwrap_or_else(|| {
            tracing::warn!(record = %record_id, amount = ?raw.amount, "amount coerced to zero");
            0.0
        });

        Ok(Self {
            id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            date,
            amount,
            description: raw.description,
            category: raw.category,
            payment_mode: raw.payment_mode,
            user_id: raw.user_id,
        })
    }
}

/// Parses an ISO-8601 date or date-time, keeping only the calendar date.
pub fn parse_record_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    let date_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Validates every row, failing on the first undatable one.
pub fn decode_records(raws: Vec<RawTransaction>) -> Result<Vec<TransactionRecord>, ValidationError> {
    raws.into_iter().map(TransactionRecord::try_from).collect()
}

/// Validates every row, setting aside undatable ones instead of failing.
pub fn decode_records_lenient(
    raws: Vec<RawTransaction>,
) -> (Vec<TransactionRecord>, Vec<ValidationError>) {
    let mut records = Vec::with_capacity(raws.len());
    let mut rejected = Vec::new();
    for raw in raws {
        match TransactionRecord::try_from(raw) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(record = %err.record_id, reason = %err.reason, "skipping record");
                rejected.push(err);
            }
        }
    }
    (records, rejected)
}

/// Decodes a JSON array of stored rows into validated records.
pub fn records_from_json(json: &str) -> Result<Vec<TransactionRecord>, AnalyticsError> {
    let raws: Vec<RawTransaction> = serde_json::from_str(json)?;
    Ok(decode_records(raws)?)
}
