//! # Screen Models
//!
//! Ephemeral per-screen state: form fields, step indices, filters. Render targets own
//! one of these for as long as their screen is active and talk to the [`crate::App`]
//! only to navigate or change the cart.
//!
//! | Screen | Model |
//! |--------|-------|
//! | Onboarding | [`onboarding::OnboardingPager`] |
//! | Auth | [`auth::AuthForm`] |
//! | Restaurants | [`listing::RestaurantQuery`] |
//! | Meal detail | [`meal::MealSelection`] |
//! | Cart | [`checkout::CheckoutFlow`] |
//! | Order tracking | [`tracking::TrackingProgress`] (held by the controller) |
//! | Notifications | [`notifications::NotificationFeed`] |
//! | Profile | [`profile::ProfileStats`] |

pub mod auth;
pub mod checkout;
pub mod listing;
pub mod meal;
pub mod notifications;
pub mod onboarding;
pub mod profile;
pub mod tracking;

pub use auth::{AuthForm, AuthMode, Credentials, SocialProvider};
pub use checkout::{Address, CheckoutFlow, CheckoutStep, PaymentMethod};
pub use listing::{RestaurantFilter, RestaurantQuery};
pub use meal::MealSelection;
pub use notifications::{NotificationFeed, NotificationFilter};
pub use onboarding::{OnboardingPager, PagerStep};
pub use profile::ProfileStats;
pub use tracking::{StepStatus, TrackingProgress};
