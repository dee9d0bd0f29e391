#![doc(test(attr(deny(warnings))))]

//! Funded Core turns a user's transaction history into the spending analytics,
//! budget checks, and reward bookkeeping behind the Fun-ded finance tracker.
//!
//! Everything here is a pure transform over caller-supplied data: fetching
//! records, sessions, and rendering charts stay with the host application.

pub mod analytics;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod rewards;
pub mod utils;

pub use errors::{AnalyticsError, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Funded Core tracing initialized.");
    });
}
