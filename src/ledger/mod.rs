//! Transaction records as the analytics engine consumes them, plus the
//! calendar and amount helpers the aggregators share.

pub mod amount;
pub mod calendar;
pub mod draft;
pub mod transaction;

pub use amount::round_half_up;
pub use draft::{truncate_amount_input, TransactionDraft};
pub use transaction::{
    decode_records, decode_records_lenient, records_from_json, RawTransaction,
    TransactionRecord, UNCATEGORIZED_LABEL,
};
