//! Meal detail quantity picker

use shared::{CartLineItem, MealDetail, Rupees};

/// Selected meal plus the quantity to add, kept within `1..=available`
#[derive(Debug, Clone, PartialEq)]
pub struct MealSelection {
    detail: MealDetail,
    quantity: u32,
    pub is_favorite: bool,
}

impl MealSelection {
    pub fn new(detail: MealDetail) -> Self {
        Self {
            detail,
            quantity: 1,
            is_favorite: false,
        }
    }

    pub fn detail(&self) -> &MealDetail {
        &self.detail
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Portions left at the restaurant, never below one
    pub fn available(&self) -> u32 {
        self.detail.item.quantity.max(1)
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(1, self.available());
    }

    pub fn increment(&mut self) {
        self.set_quantity(self.quantity.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_quantity(self.quantity.saturating_sub(1));
    }

    pub fn can_increment(&self) -> bool {
        self.quantity < self.available()
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    pub fn line_total(&self) -> Rupees {
        self.detail.item.discounted_price.saturating_mul(self.quantity)
    }

    pub fn savings(&self) -> Rupees {
        self.detail.item.unit_saving().saturating_mul(self.quantity)
    }

    pub fn discount_percentage(&self) -> u32 {
        self.detail.item.discount_percentage()
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    pub fn to_cart_item(&self) -> CartLineItem {
        CartLineItem::from_menu_item(&self.detail.item, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowl() -> MealSelection {
        MealSelection::new(shared::catalog::meal_detail(1).unwrap())
    }

    #[test]
    fn test_quantity_clamped_to_available() {
        let mut selection = bowl();
        selection.decrement();
        assert_eq!(selection.quantity(), 1);

        for _ in 0..10 {
            selection.increment();
        }
        assert_eq!(selection.quantity(), 3);
        assert!(!selection.can_increment());

        selection.set_quantity(0);
        assert_eq!(selection.quantity(), 1);
    }

    #[test]
    fn test_cart_item_carries_quantity() {
        let mut selection = bowl();
        selection.set_quantity(2);
        let line = selection.to_cart_item();
        assert_eq!(line.id, 1);
        assert_eq!(line.cart_quantity, 2);
        assert_eq!(line.total_price, 298);
        assert_eq!(selection.savings(), 300);
        assert_eq!(selection.discount_percentage(), 50);
    }
}
