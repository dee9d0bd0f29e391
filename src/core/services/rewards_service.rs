use chrono::NaiveDate;

use crate::config::AnalyticsConfig;
use crate::errors::AnalyticsError;
use crate::rewards::{
    advance_streak, storefront, PointsWallet, Product, Redemption, StreakRecord, StreakUpdate,
};

use super::ServiceResult;

pub struct RewardsService;

impl RewardsService {
    /// Registers today's visit against the stored streak.
    pub fn record_login(previous: Option<&StreakRecord>, today: NaiveDate) -> StreakUpdate {
        advance_streak(previous, today)
    }

    /// Wallet for a user who has not spent anything yet.
    pub fn opening_wallet(config: &AnalyticsConfig) -> PointsWallet {
        PointsWallet::new(config.starting_points)
    }

    pub fn storefront(inventory: &[Product]) -> Vec<Product> {
        storefront(inventory)
    }

    /// Redeems the product with `product_id` from the listed storefront.
    pub fn redeem(
        wallet: &mut PointsWallet,
        inventory: &[Product],
        product_id: &str,
    ) -> ServiceResult<Redemption> {
        let product = inventory
            .iter()
            .find(|product| product.id == product_id)
            .ok_or_else(|| AnalyticsError::InvalidEntry(format!("unknown product `{product_id}`")))?;
        wallet.redeem(product)
    }
}
