//! Services that compose the aggregation engine and rewards into the views
//! the application renders.

pub mod services;
