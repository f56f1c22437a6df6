//! # Cart
//!
//! Ordered cart contents with the two invariants the rest of the app relies on:
//!
//! - at most one line per menu-item identifier
//! - every line has `cart_quantity >= 1` and `total_price == discounted_price * cart_quantity`
//!
//! Bill arithmetic lives here too ([`BillSummary`]).

use serde::{Deserialize, Serialize};
use shared::{CartLineItem, Rupees};

use crate::core::error::{AppError, Result};

/// Outcome of a quantity change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// Line kept with the new quantity
    Updated { id: u32, quantity: u32 },
    /// Quantity reached zero and the line was dropped
    Removed { id: u32 },
}

/// Cart line items in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total portions across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.cart_quantity).sum()
    }

    pub fn get(&self, id: u32) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add a line, merging into an existing line with the same identifier.
    ///
    /// A zero-quantity line is ignored.
    pub fn add(&mut self, item: CartLineItem) {
        if item.cart_quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.cart_quantity = line.cart_quantity.saturating_add(item.cart_quantity);
                line.recompute_total();
            }
            None => {
                // Incoming totals are never trusted
                let quantity = item.cart_quantity;
                self.items.push(item.with_quantity(quantity));
            }
        }
    }

    /// Replace the contents wholesale.
    ///
    /// Zero-quantity entries are dropped, totals are recomputed and duplicate
    /// identifiers are merged into the first occurrence.
    pub fn replace(&mut self, items: Vec<CartLineItem>) {
        self.items.clear();
        for item in items {
            self.add(item);
        }
    }

    /// Set a line's quantity; zero removes it
    pub fn set_quantity(&mut self, id: u32, quantity: u32) -> Result<CartChange> {
        let index = self.position(id)?;
        if quantity == 0 {
            self.items.remove(index);
            return Ok(CartChange::Removed { id });
        }
        let line = &mut self.items[index];
        line.cart_quantity = quantity;
        line.recompute_total();
        Ok(CartChange::Updated { id, quantity })
    }

    pub fn increment(&mut self, id: u32) -> Result<CartChange> {
        let current = self.quantity_of(id)?;
        self.set_quantity(id, current.saturating_add(1))
    }

    /// Decrement a line; from 1 this removes it
    pub fn decrement(&mut self, id: u32) -> Result<CartChange> {
        let current = self.quantity_of(id)?;
        self.set_quantity(id, current.saturating_sub(1))
    }

    pub fn remove(&mut self, id: u32) -> Result<CartChange> {
        self.set_quantity(id, 0)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of line totals, saturating like the line totals themselves
    pub fn subtotal(&self) -> Rupees {
        self.items
            .iter()
            .fold(0, |sum: Rupees, item| sum.saturating_add(item.total_price))
    }

    /// Sum of `(original - discounted) * quantity`, saturating
    pub fn savings(&self) -> Rupees {
        self.items
            .iter()
            .fold(0, |sum: Rupees, item| sum.saturating_add(item.savings()))
    }

    fn position(&self, id: u32) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(AppError::ItemNotInCart(id))
    }

    fn quantity_of(&self, id: u32) -> Result<u32> {
        self.get(id)
            .map(|item| item.cart_quantity)
            .ok_or(AppError::ItemNotInCart(id))
    }
}

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    #[default]
    Delivery,
    Pickup,
}

impl DeliveryOption {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryOption::Delivery => "Delivery",
            DeliveryOption::Pickup => "Pickup",
        }
    }
}

/// Derived checkout amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BillSummary {
    pub subtotal: Rupees,
    pub savings: Rupees,
    pub delivery_fee: Rupees,
    pub donation: Rupees,
    pub total: Rupees,
}

impl BillSummary {
    /// Compute the bill for `cart`.
    ///
    /// `delivery_fee` applies only to [`DeliveryOption::Delivery`].
    ///
    /// ```rust
    /// use feeding_controller::app::{BillSummary, Cart, DeliveryOption};
    ///
    /// let bill = BillSummary::compute(&Cart::new(), DeliveryOption::Pickup, 25, 29);
    /// assert_eq!(bill.total, 25);
    /// ```
    pub fn compute(
        cart: &Cart,
        option: DeliveryOption,
        donation: Rupees,
        delivery_fee: Rupees,
    ) -> Self {
        let subtotal = cart.subtotal();
        let delivery_fee = match option {
            DeliveryOption::Delivery => delivery_fee,
            DeliveryOption::Pickup => 0,
        };
        Self {
            subtotal,
            savings: cart.savings(),
            delivery_fee,
            donation,
            total: subtotal.saturating_add(delivery_fee).saturating_add(donation),
        }
    }
}
