//! # Navigation Handlers
//!
//! Screen changes, login guard, splash hand-over and meal selection.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, Screen};
use crate::core::error::{AppError, Result};

/// Switch the active screen and log the transition
pub(crate) fn transition(state: &mut AppState, to: Screen) {
    let from = state.current_screen;
    if from != to {
        tracing::info!(from = ?from, to = ?to, "Screen transition");
    }
    state.current_screen = to;
}

/// Handle screen change with login guard
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_navigate(state: Arc<RwLock<AppState>>, screen: Screen) -> Result<Screen> {
    let mut state = state.write();
    let from = state.current_screen;

    let target = if screen.requires_login() && !state.is_logged_in {
        tracing::info!("Access denied: {} requires login, redirecting to Auth", screen.title());
        Screen::Auth
    } else {
        screen
    };

    let rejection = match target {
        Screen::Splash => Some("splash is only shown at startup"),
        Screen::Onboarding if !state.is_first_visit => Some("onboarding was already completed"),
        Screen::OrderTracking if !state.has_order() => Some("no order has been placed"),
        Screen::MealDetail if state.selected_meal.is_none() => Some("no meal is selected"),
        _ => None,
    };
    if let Some(reason) = rejection {
        tracing::warn!(from = ?from, to = ?target, reason, "Navigation rejected");
        return Err(AppError::Navigation {
            from,
            to: target,
            reason: reason.to_string(),
        });
    }

    transition(&mut state, target);
    Ok(target)
}

/// Handle a back button: every back target is the home dashboard
///
/// Internal handler function - use [`crate::app::App::go_back`] instead.
pub(crate) fn handle_back(state: Arc<RwLock<AppState>>) -> Screen {
    let mut state = state.write();
    if let Some(target) = state.current_screen.back_target() {
        transition(&mut state, target);
    }
    state.current_screen
}

/// Leave the splash for onboarding, home or auth
///
/// Internal handler function - use [`crate::app::App::complete_splash`] instead.
pub(crate) fn handle_splash_complete(state: Arc<RwLock<AppState>>) -> Screen {
    let mut state = state.write();
    if state.current_screen != Screen::Splash {
        tracing::debug!(screen = ?state.current_screen, "Splash already left, ignoring completion");
        return state.current_screen;
    }
    let target = state.post_splash_screen();
    state.splash_fading = false;
    transition(&mut state, target);
    target
}

/// Open the first surplus item of a restaurant
///
/// Internal handler function - use [`crate::app::App::select_restaurant`] instead.
pub(crate) fn handle_select_restaurant(
    state: Arc<RwLock<AppState>>,
    restaurant_id: u32,
) -> Result<Screen> {
    let item_id = shared::catalog::restaurant(restaurant_id)
        .and_then(|restaurant| restaurant.surplus.first().map(|item| item.id))
        .ok_or(AppError::UnknownMenuItem(restaurant_id))?;
    handle_select_meal(state, item_id)
}

/// Open a specific surplus item
///
/// Internal handler function - use [`crate::app::App::select_meal`] instead.
pub(crate) fn handle_select_meal(state: Arc<RwLock<AppState>>, item_id: u32) -> Result<Screen> {
    let detail = shared::catalog::meal_detail(item_id).ok_or(AppError::UnknownMenuItem(item_id))?;
    tracing::debug!(item_id, name = %detail.item.name, "Meal selected");
    state.write().selected_meal = Some(detail);
    handle_navigate(state, Screen::MealDetail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(logged_in: bool, screen: Screen) -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(false, logged_in, 25);
        state.current_screen = screen;
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_login_guard_redirects() {
        let state = state(false, Screen::Auth);
        assert_eq!(handle_navigate(state.clone(), Screen::Profile), Ok(Screen::Auth));
        assert_eq!(state.read().current_screen, Screen::Auth);
    }

    #[test]
    fn test_tracking_requires_order() {
        let state = state(true, Screen::Home);
        let err = handle_navigate(state.clone(), Screen::OrderTracking).unwrap_err();
        assert!(matches!(err, AppError::Navigation { to: Screen::OrderTracking, .. }));
        assert_eq!(state.read().current_screen, Screen::Home);
    }

    #[test]
    fn test_splash_is_not_a_navigation_target() {
        let state = state(true, Screen::Home);
        let err = handle_navigate(state.clone(), Screen::Splash).unwrap_err();
        assert!(matches!(err, AppError::Navigation { to: Screen::Splash, .. }));
        assert_eq!(state.read().current_screen, Screen::Home);
    }

    #[test]
    fn test_onboarding_only_on_first_visit() {
        let returning = state(true, Screen::Home);
        assert!(handle_navigate(returning.clone(), Screen::Onboarding).is_err());
        assert_eq!(returning.read().current_screen, Screen::Home);

        let first = Arc::new(RwLock::new(AppState::new(true, false, 25)));
        assert_eq!(handle_navigate(first, Screen::Onboarding), Ok(Screen::Onboarding));
    }

    #[test]
    fn test_select_restaurant_opens_first_item() {
        let state = state(true, Screen::Restaurants);
        assert_eq!(handle_select_restaurant(state.clone(), 2), Ok(Screen::MealDetail));
        let guard = state.read();
        assert_eq!(guard.selected_meal.as_ref().map(|m| m.item.id), Some(3));
    }

    #[test]
    fn test_unknown_restaurant() {
        let state = state(true, Screen::Restaurants);
        assert_eq!(
            handle_select_restaurant(state.clone(), 99),
            Err(AppError::UnknownMenuItem(99))
        );
        assert_eq!(state.read().current_screen, Screen::Restaurants);
    }

    #[test]
    fn test_back_goes_home() {
        let state = state(true, Screen::Donations);
        assert_eq!(handle_back(state.clone()), Screen::Home);
        assert_eq!(handle_back(state), Screen::Home);
    }

    #[test]
    fn test_splash_completion_only_from_splash() {
        let state = state(true, Screen::Splash);
        assert_eq!(handle_splash_complete(state.clone()), Screen::Home);
        state.write().current_screen = Screen::Profile;
        assert_eq!(handle_splash_complete(state), Screen::Profile);
    }
}
