//! # Application State Types
//!
//! The screen enumeration and the state object owned by the controller: current screen,
//! persisted-flag mirror, cart, current order and the selected meal.

use serde::{Deserialize, Serialize};
use shared::MealDetail;

use crate::app::cart::Cart;
use crate::screens::tracking::TrackingProgress;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Logo and tagline, shown once at startup
    Splash,
    /// Three-page introduction, first visit only
    Onboarding,
    /// Login / signup forms
    Auth,
    /// Home dashboard with categories and featured restaurants
    Home,
    /// Searchable, filterable restaurant list
    Restaurants,
    /// Single surplus meal with quantity picker
    MealDetail,
    /// Cart, address and payment steps
    Cart,
    /// Delivery progress for the last placed order
    OrderTracking,
    /// NGO donations
    Donations,
    /// Profile, impact stats, order history, achievements
    Profile,
    /// Notification feed
    Notifications,
}

impl Screen {
    /// Get all screens in declaration order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Splash,
            Screen::Onboarding,
            Screen::Auth,
            Screen::Home,
            Screen::Restaurants,
            Screen::MealDetail,
            Screen::Cart,
            Screen::OrderTracking,
            Screen::Donations,
            Screen::Profile,
            Screen::Notifications,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Splash => "Feeding Future",
            Screen::Onboarding => "Welcome",
            Screen::Auth => "Sign In",
            Screen::Home => "Home",
            Screen::Restaurants => "Nearby Restaurants",
            Screen::MealDetail => "Meal Details",
            Screen::Cart => "Your Cart",
            Screen::OrderTracking => "Order Tracking",
            Screen::Donations => "Make a Donation",
            Screen::Profile => "Profile",
            Screen::Notifications => "Notifications",
        }
    }

    /// Screens reachable only with the login flag set
    pub fn requires_login(&self) -> bool {
        !matches!(self, Screen::Splash | Screen::Onboarding | Screen::Auth)
    }

    /// Where the screen's back button leads. There is no back-stack: every
    /// screen with a back button returns to the home dashboard.
    pub fn back_target(&self) -> Option<Screen> {
        match self {
            Screen::Splash | Screen::Onboarding | Screen::Auth | Screen::Home => None,
            _ => Some(Screen::Home),
        }
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_screen: Screen,
    /// Derived once at startup: `hasSeenOnboarding` was unset
    pub is_first_visit: bool,
    /// Mirror of the persisted `isLoggedIn` flag
    pub is_logged_in: bool,
    pub cart: Cart,
    /// Empty until the first order is placed
    pub current_order_id: String,
    /// Meal opened from the restaurant listing
    pub selected_meal: Option<MealDetail>,
    pub tracking: TrackingProgress,
    /// Splash fade-out has started
    pub splash_fading: bool,
}

impl AppState {
    pub fn new(is_first_visit: bool, is_logged_in: bool, initial_eta_minutes: u32) -> Self {
        Self {
            current_screen: Screen::Splash,
            is_first_visit,
            is_logged_in,
            cart: Cart::new(),
            current_order_id: String::new(),
            selected_meal: None,
            tracking: TrackingProgress::new(initial_eta_minutes),
            splash_fading: false,
        }
    }

    /// True once an order id exists
    pub fn has_order(&self) -> bool {
        !self.current_order_id.is_empty()
    }

    /// Screen the splash hands over to
    pub fn post_splash_screen(&self) -> Screen {
        if self.is_first_visit {
            Screen::Onboarding
        } else if self.is_logged_in {
            Screen::Home
        } else {
            Screen::Auth
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_screens() {
        let public: Vec<Screen> = Screen::all()
            .iter()
            .copied()
            .filter(|s| !s.requires_login())
            .collect();
        assert_eq!(public, vec![Screen::Splash, Screen::Onboarding, Screen::Auth]);
    }

    #[test]
    fn test_back_targets_return_home() {
        assert_eq!(Screen::OrderTracking.back_target(), Some(Screen::Home));
        assert_eq!(Screen::MealDetail.back_target(), Some(Screen::Home));
        assert_eq!(Screen::Home.back_target(), None);
        assert_eq!(Screen::Auth.back_target(), None);
    }

    #[test]
    fn test_post_splash_screen() {
        assert_eq!(AppState::new(true, false, 25).post_splash_screen(), Screen::Onboarding);
        assert_eq!(AppState::new(true, true, 25).post_splash_screen(), Screen::Onboarding);
        assert_eq!(AppState::new(false, true, 25).post_splash_screen(), Screen::Home);
        assert_eq!(AppState::new(false, false, 25).post_splash_screen(), Screen::Auth);
    }

    #[test]
    fn test_screen_serializes_kebab_case() {
        let json = serde_json::to_string(&Screen::OrderTracking).unwrap();
        assert_eq!(json, "\"order-tracking\"");
    }
}
