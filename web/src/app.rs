//! Feeding Future web app - Leptos root
//!
//! There is no URL routing: the controller's current [`Screen`] decides which page is
//! mounted, and every page change goes through the controller.

use feeding_controller::Screen;
use leptos::prelude::*;

use crate::components::ErrorBanner;
use crate::pages::{
    AuthPage, CartPage, DonationsPage, HomePage, MealDetailPage, NotificationsPage,
    OnboardingPage, OrderTrackingPage, ProfilePage, RestaurantsPage, SplashPage,
};
use crate::state::provide_app_context;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_app_context();

    // Pages own their per-screen models, so remount only when the screen changes
    let screen = Memo::new(move |_| ctx.screen());
    Effect::new(move |_| {
        log::debug!("Rendering {:?}", screen.get());
    });

    view! {
        <main class="app-shell">
            <ErrorBanner/>
            {move || match screen.get() {
                Screen::Splash => view! { <SplashPage/> }.into_any(),
                Screen::Onboarding => view! { <OnboardingPage/> }.into_any(),
                Screen::Auth => view! { <AuthPage/> }.into_any(),
                Screen::Home => view! { <HomePage/> }.into_any(),
                Screen::Restaurants => view! { <RestaurantsPage/> }.into_any(),
                Screen::MealDetail => view! { <MealDetailPage/> }.into_any(),
                Screen::Cart => view! { <CartPage/> }.into_any(),
                Screen::OrderTracking => view! { <OrderTrackingPage/> }.into_any(),
                Screen::Donations => view! { <DonationsPage/> }.into_any(),
                Screen::Profile => view! { <ProfilePage/> }.into_any(),
                Screen::Notifications => view! { <NotificationsPage/> }.into_any(),
            }}
        </main>
    }
}
