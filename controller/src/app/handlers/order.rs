//! # Order Handlers
//!
//! Order placement and order-tracking progression.

use std::sync::Arc;

use parking_lot::RwLock;

use super::navigation::transition;
use crate::app::state::{AppState, Screen};
use crate::config::AppConfig;
use crate::core::error::{AppError, Result};

/// Largest digit count whose modulus fits in an `i64`
const MAX_ORDER_DIGITS: u32 = 18;

/// Build an order id: prefix followed by the trailing digits of `now_millis`, zero-padded
pub(crate) fn order_id(prefix: &str, digits: u32, now_millis: i64) -> String {
    let digits = digits.clamp(1, MAX_ORDER_DIGITS);
    let modulus = 10_i64.pow(digits);
    format!(
        "{}{:0width$}",
        prefix,
        now_millis.rem_euclid(modulus),
        width = digits as usize
    )
}

/// Handle "Place Order"
///
/// Internal handler function - use [`crate::app::App::place_order`] instead.
pub(crate) fn handle_place_order(
    state: Arc<RwLock<AppState>>,
    config: &AppConfig,
    now_millis: i64,
) -> Result<String> {
    let mut state = state.write();
    if state.cart.is_empty() {
        tracing::warn!("Order placement attempted with an empty cart");
        return Err(AppError::EmptyCart);
    }

    let id = order_id(&config.order_id_prefix, config.order_id_digits, now_millis);
    tracing::info!(
        order_id = %id,
        lines = state.cart.len(),
        subtotal = state.cart.subtotal(),
        "Order placed"
    );
    state.current_order_id = id.clone();
    state.cart.clear();
    transition(&mut state, Screen::OrderTracking);
    Ok(id)
}

/// Apply a tracking step, ignored when tracking is not on screen
pub(crate) fn handle_tracking_advanced(state: Arc<RwLock<AppState>>, step: u8) {
    let mut state = state.write();
    if state.current_screen != Screen::OrderTracking {
        return;
    }
    state.tracking.advance_to(step);
    tracing::info!(order_id = %state.current_order_id, step, "Order tracking advanced");
}

pub(crate) fn handle_eta_tick(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if state.current_screen == Screen::OrderTracking {
        state.tracking.tick_eta();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CartLineItem;

    #[test]
    fn test_order_id_format() {
        assert_eq!(order_id("FF", 6, 1_700_000_123_456), "FF123456");
        assert_eq!(order_id("FF", 6, 1_700_000_000_042), "FF000042");
        assert_eq!(order_id("X", 2, 1234), "X34");
    }

    #[test]
    fn test_empty_cart_rejected() {
        let state = Arc::new(RwLock::new(AppState::new(false, true, 25)));
        state.write().current_screen = Screen::Cart;

        let result = handle_place_order(state.clone(), &AppConfig::default(), 1);
        assert_eq!(result, Err(AppError::EmptyCart));
        assert_eq!(state.read().current_screen, Screen::Cart);
        assert!(!state.read().has_order());
    }

    #[test]
    fn test_place_order_clears_cart() {
        let state = Arc::new(RwLock::new(AppState::new(false, true, 25)));
        let bowl = shared::catalog::menu_item(1).unwrap();
        state.write().cart.add(CartLineItem::from_menu_item(&bowl, 1));

        let id = handle_place_order(state.clone(), &AppConfig::default(), 1_700_000_654_321).unwrap();
        assert_eq!(id, "FF654321");

        let guard = state.read();
        assert!(guard.cart.is_empty());
        assert_eq!(guard.current_order_id, "FF654321");
        assert_eq!(guard.current_screen, Screen::OrderTracking);
    }
}
