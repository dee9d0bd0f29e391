use thiserror::Error;

/// Identifier reported when a stored row has no usable id of its own.
pub const UNKNOWN_RECORD_ID: &str = "<unknown>";

/// A stored transaction row that cannot be placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record `{record_id}` is invalid: {reason}")]
pub struct ValidationError {
    pub record_id: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(record_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            reason: reason.into(),
        }
    }
}

/// Error type that captures analytics, configuration, and rewards failures.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Insufficient points: `{product}` costs {required}, balance is {available}")]
    InsufficientPoints {
        product: String,
        required: u32,
        available: u32,
    },
    #[error("Product out of stock: {0}")]
    OutOfStock(String),
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}
