use serde::{Deserialize, Serialize};

use crate::errors::AnalyticsError;

/// An item in the points shop inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "ProductName")]
    pub name: String,
    #[serde(alias = "PointCost")]
    pub point_cost: u32,
    #[serde(default, alias = "ProductImageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "AvailableStockCount")]
    pub available_stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.available_stock > 0
    }
}

/// Products that can currently be redeemed, cheapest first.
pub fn storefront(products: &[Product]) -> Vec<Product> {
    let mut listed: Vec<Product> = products
        .iter()
        .filter(|product| product.in_stock())
        .cloned()
        .collect();
    listed.sort_by_key(|product| product.point_cost);
    listed
}

/// Receipt for a successful redemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redemption {
    pub product_id: String,
    pub points_spent: u32,
    pub remaining_balance: u32,
}

/// A user's spendable points balance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsWallet {
    pub balance: u32,
}

impl PointsWallet {
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }

    pub fn can_redeem(&self, product: &Product) -> bool {
        product.in_stock() && self.balance >= product.point_cost
    }

    /// Deducts the product's cost. The wallet is untouched on error.
    pub fn redeem(&mut self, product: &Product) -> Result<Redemption, AnalyticsError> {
        if !product.in_stock() {
            return Err(AnalyticsError::OutOfStock(product.name.clone()));
        }
        if self.balance < product.point_cost {
            return Err(AnalyticsError::InsufficientPoints {
                product: product.name.clone(),
                required: product.point_cost,
                available: self.balance,
            });
        }
        self.balance -= product.point_cost;
        tracing::debug!(
            product = %product.id,
            cost = product.point_cost,
            remaining = self.balance,
            "product redeemed"
        );
        Ok(Redemption {
            product_id: product.id.clone(),
            points_spent: product.point_cost,
            remaining_balance: self.balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cost: u32, stock: u32) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            point_cost: cost,
            image_url: None,
            available_stock: stock,
        }
    }

    #[test]
    fn storefront_hides_sold_out_and_sorts_by_cost() {
        let products = vec![product("a", 50, 1), product("b", 10, 0), product("c", 20, 3)];
        let listed: Vec<String> = storefront(&products).into_iter().map(|p| p.id).collect();
        assert_eq!(listed, vec!["c", "a"]);
    }

    #[test]
    fn redeem_deducts_points() {
        let mut wallet = PointsWallet::new(60);
        let receipt = wallet.redeem(&product("a", 45, 2)).expect("affordable");
        assert_eq!(receipt.remaining_balance, 15);
        assert_eq!(wallet.balance, 15);
    }

    #[test]
    fn exact_balance_is_enough() {
        let mut wallet = PointsWallet::new(45);
        assert!(wallet.can_redeem(&product("a", 45, 1)));
        assert!(wallet.redeem(&product("a", 45, 1)).is_ok());
        assert_eq!(wallet.balance, 0);
    }

    #[test]
    fn insufficient_points_leave_wallet_untouched() {
        let mut wallet = PointsWallet::new(10);
        let err = wallet.redeem(&product("a", 45, 1)).expect_err("too expensive");
        assert!(matches!(
            err,
            AnalyticsError::InsufficientPoints {
                required: 45,
                available: 10,
                ..
            }
        ));
        assert_eq!(wallet.balance, 10);
    }

    #[test]
    fn sold_out_products_cannot_be_redeemed() {
        let mut wallet = PointsWallet::new(100);
        assert!(!wallet.can_redeem(&product("a", 5, 0)));
        assert!(matches!(
            wallet.redeem(&product("a", 5, 0)),
            Err(AnalyticsError::OutOfStock(_))
        ));
    }

    #[test]
    fn deserializes_inventory_rows() {
        let row = serde_json::json!({
            "Id": "p1",
            "ProductName": "Sticker",
            "PointCost": 30,
            "ProductImageUrl": null,
            "AvailableStockCount": 4
        });
        let parsed: Product = serde_json::from_value(row).expect("inventory row");
        assert_eq!(parsed.point_cost, 30);
        assert!(parsed.in_stock());
    }
}
