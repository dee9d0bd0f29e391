//! Gamification bookkeeping: daily login streaks and the points shop.

pub mod shop;
pub mod streak;

pub use shop::{storefront, PointsWallet, Product, Redemption};
pub use streak::{advance_streak, StreakRecord, StreakUpdate};
