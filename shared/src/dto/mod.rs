//! # Data Transfer Objects (DTOs)
//!
//! Plain data carried between the catalog, the screen controller and the web
//! front-end.
//!
//! ## Module Organization
//!
//! - [`menu`] - Restaurants, surplus menu items and meal detail records
//! - [`cart`] - Aggregated cart line items
//! - [`community`] - Onboarding pages, NGOs and donation presets
//! - [`activity`] - Notifications, order history, achievements, delivery steps
//!
//! ## Serialization Format
//!
//! All DTOs derive `serde` traits:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Enums**: lowercase strings via `#[serde(rename_all = "lowercase")]`
//! - **Money**: whole rupees as [`Rupees`] (`u32`); the catalog has no paise

pub mod activity;
pub mod cart;
pub mod community;
pub mod menu;

pub use activity::{Achievement, Notification, NotificationKind, OrderHistoryEntry, TrackingStep};
pub use cart::CartLineItem;
pub use community::{CommunityGoal, DonationOption, Ngo, OnboardingPage};
pub use menu::{Category, FeaturedRestaurant, MealDetail, MenuItem, Nutrition, Restaurant};

/// Whole Indian rupees
pub type Rupees = u32;
