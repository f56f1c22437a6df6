//! Page modules, one per controller screen

pub mod auth;
pub mod cart;
pub mod donations;
pub mod home;
pub mod meal_detail;
pub mod notifications;
pub mod onboarding;
pub mod order_tracking;
pub mod profile;
pub mod restaurants;
pub mod splash;

pub use auth::AuthPage;
pub use cart::CartPage;
pub use donations::DonationsPage;
pub use home::HomePage;
pub use meal_detail::MealDetailPage;
pub use notifications::NotificationsPage;
pub use onboarding::OnboardingPage;
pub use order_tracking::OrderTrackingPage;
pub use profile::ProfilePage;
pub use restaurants::RestaurantsPage;
pub use splash::SplashPage;
