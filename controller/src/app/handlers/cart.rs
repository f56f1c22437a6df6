//! # Cart Handlers
//!
//! Add, replace and quantity changes. Adding always lands on the cart screen;
//! the other operations leave the screen alone.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::CartLineItem;

use super::navigation::transition;
use crate::app::cart::CartChange;
use crate::app::state::{AppState, Screen};
use crate::core::error::Result;

/// Handle "Add to Cart"
///
/// Internal handler function - use [`crate::app::App::add_to_cart`] instead.
pub(crate) fn handle_add_to_cart(state: Arc<RwLock<AppState>>, item: CartLineItem) {
    let mut state = state.write();
    tracing::info!(
        item_id = item.id,
        quantity = item.cart_quantity,
        "Adding to cart"
    );
    state.cart.add(item);
    transition(&mut state, Screen::Cart);
}

/// Replace the cart wholesale
///
/// Internal handler function - use [`crate::app::App::update_cart`] instead.
pub(crate) fn handle_update_cart(state: Arc<RwLock<AppState>>, items: Vec<CartLineItem>) {
    let mut state = state.write();
    state.cart.replace(items);
    tracing::debug!(lines = state.cart.len(), "Cart replaced");
}

/// Apply a quantity change through `change`
///
/// Internal handler function - use [`crate::app::App::set_item_quantity`] and friends instead.
pub(crate) fn handle_quantity_change<F>(state: Arc<RwLock<AppState>>, change: F) -> Result<CartChange>
where
    F: FnOnce(&mut crate::app::Cart) -> Result<CartChange>,
{
    let mut state = state.write();
    let outcome = change(&mut state.cart);
    match &outcome {
        Ok(CartChange::Removed { id }) => tracing::info!(item_id = id, "Removed from cart"),
        Ok(CartChange::Updated { id, quantity }) => {
            tracing::debug!(item_id = id, quantity, "Cart quantity changed")
        }
        Err(e) => tracing::warn!(error = %e, "Cart change rejected"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowl(quantity: u32) -> CartLineItem {
        CartLineItem::from_menu_item(&shared::catalog::menu_item(1).unwrap(), quantity)
    }

    #[test]
    fn test_add_navigates_to_cart() {
        let mut initial = AppState::new(false, true, 25);
        initial.current_screen = Screen::MealDetail;
        let state = Arc::new(RwLock::new(initial));

        handle_add_to_cart(state.clone(), bowl(1));
        handle_add_to_cart(state.clone(), bowl(2));

        let guard = state.read();
        assert_eq!(guard.current_screen, Screen::Cart);
        assert_eq!(guard.cart.len(), 1);
        assert_eq!(guard.cart.items()[0].cart_quantity, 3);
    }

    #[test]
    fn test_quantity_change_reports_removal() {
        let state = Arc::new(RwLock::new(AppState::new(false, true, 25)));
        handle_update_cart(state.clone(), vec![bowl(1)]);

        let outcome = handle_quantity_change(state.clone(), |cart| cart.decrement(1));
        assert_eq!(outcome, Ok(CartChange::Removed { id: 1 }));
        assert!(state.read().cart.is_empty());
    }
}
