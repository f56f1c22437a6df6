//! Headless walkthrough of the screen controller.
//!
//! Drives one scripted session through the whole navigation cycle on a real Tokio
//! timer, logging every transition. Flags persist to the configured JSON file, so a
//! second run starts as a returning user.

use std::time::Duration;

use feeding_controller::core::service::SystemClock;
use feeding_controller::logging::{self, LogConfig};
use feeding_controller::screens::{AuthForm, CheckoutFlow};
use feeding_controller::services::flags::FileFlagStore;
use feeding_controller::services::scheduler::TokioScheduler;
use feeding_controller::{App, AppConfig, AppError, Screen};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let _log_guard = logging::init(&LogConfig::from_env());

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Walkthrough failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env();
    let flags = FileFlagStore::open(&config.flags_path)?;
    let scheduler = TokioScheduler::current()
        .ok_or_else(|| AppError::Config("no Tokio runtime available".to_string()))?;
    let splash_wait =
        Duration::from_millis(config.splash_fade_ms + config.splash_exit_ms + 50);
    let tracking_wait = config
        .tracking_step_offsets_ms
        .iter()
        .max()
        .map(|ms| Duration::from_millis(ms + 50))
        .unwrap_or_default();

    let mut app = App::with_services(
        config,
        Box::new(flags),
        Box::new(SystemClock),
        Box::new(scheduler),
    );

    tokio::time::sleep(splash_wait).await;
    app.on_tick();

    if app.current_screen() == Screen::Onboarding {
        app.complete_onboarding();
    }
    if app.current_screen() == Screen::Auth {
        app.login(&AuthForm::login("walkthrough@feedingfuture.org", "surplus"))?;
    }

    app.navigate(Screen::Restaurants)?;
    app.select_restaurant(1)?;
    app.add_meal_to_cart(2)?;

    let checkout = CheckoutFlow::new(app.config());
    let bill = checkout.bill(&app.snapshot().cart);
    tracing::info!(
        subtotal = bill.subtotal,
        savings = bill.savings,
        delivery_fee = bill.delivery_fee,
        total = bill.total,
        "Checkout bill"
    );

    let order_id = app.place_order()?;
    tracing::info!(order_id = %order_id, address = %checkout.address, "Tracking order");

    tokio::time::sleep(tracking_wait).await;
    app.on_tick();
    let tracking = app.snapshot().tracking;
    tracing::info!(
        step = tracking.step(),
        eta_minutes = tracking.eta_minutes(),
        delivered = tracking.is_delivered(),
        "Tracking status"
    );

    app.go_back();
    tracing::info!(screen = ?app.current_screen(), "Walkthrough complete");
    Ok(())
}
