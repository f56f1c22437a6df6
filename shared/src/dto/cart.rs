//! # Cart Data Transfer Objects
//!
//! A [`CartLineItem`] aggregates every portion of one menu item in the cart. The
//! identifier is shared with the source [`MenuItem`](super::MenuItem), and the
//! line total is always `discounted_price * cart_quantity`.

use serde::{Deserialize, Serialize};

use super::{MenuItem, Rupees};

/// One aggregated cart entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub restaurant: String,
    pub original_price: Rupees,
    pub discounted_price: Rupees,
    pub cart_quantity: u32,
    pub total_price: Rupees,
}

impl CartLineItem {
    /// Build a line for `quantity` portions of `item`
    pub fn from_menu_item(item: &MenuItem, quantity: u32) -> Self {
        let mut line = Self {
            id: item.id,
            name: item.name.clone(),
            image: item.image.clone(),
            restaurant: item.restaurant.clone(),
            original_price: item.original_price,
            discounted_price: item.discounted_price,
            cart_quantity: quantity,
            total_price: 0,
        };
        line.recompute_total();
        line
    }

    /// Set the quantity and keep the total in sync
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.cart_quantity = quantity;
        self.recompute_total();
        self
    }

    pub fn recompute_total(&mut self) {
        self.total_price = self.discounted_price.saturating_mul(self.cart_quantity);
    }

    /// Savings on this line against original prices
    pub fn savings(&self) -> Rupees {
        self.original_price
            .saturating_sub(self.discounted_price)
            .saturating_mul(self.cart_quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowl() -> MenuItem {
        MenuItem {
            id: 1,
            name: "Mediterranean Bowl".to_string(),
            restaurant: "Green Bistro".to_string(),
            image: "🥙".to_string(),
            original_price: 299,
            discounted_price: 149,
            quantity: 3,
            expiry_minutes: 120,
        }
    }

    #[test]
    fn test_line_total_tracks_quantity() {
        let line = CartLineItem::from_menu_item(&bowl(), 2);
        assert_eq!(line.total_price, 298);

        let line = line.with_quantity(3);
        assert_eq!(line.cart_quantity, 3);
        assert_eq!(line.total_price, 447);
    }

    #[test]
    fn test_line_savings() {
        let line = CartLineItem::from_menu_item(&bowl(), 2);
        assert_eq!(line.savings(), 300);
    }

    #[test]
    fn test_line_serializes_with_snake_case_fields() {
        let line = CartLineItem::from_menu_item(&bowl(), 1);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["cart_quantity"], 1);
        assert_eq!(json["total_price"], 149);
        assert_eq!(json["discounted_price"], 149);
    }
}
