//! End-to-end controller behavior through the public API

use std::time::Duration;

use feeding_controller::core::service::FixedClock;
use feeding_controller::screens::{AuthForm, SocialProvider};
use feeding_controller::services::flags::{
    FileFlagStore, MemoryFlagStore, PersistedFlags, HAS_SEEN_ONBOARDING, IS_LOGGED_IN,
};
use feeding_controller::services::scheduler::{ManualScheduler, TokioScheduler};
use feeding_controller::{App, AppConfig, AppError, CartChange, DeliveryOption, Screen};
use shared::CartLineItem;

const NOW: i64 = 1_700_000_246_810;

fn app_with_flags(pairs: &[(&'static str, &'static str)]) -> (App, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let app = App::with_services(
        AppConfig::default(),
        Box::new(MemoryFlagStore::with_flags(pairs.iter().copied())),
        Box::new(FixedClock(NOW)),
        Box::new(scheduler.clone()),
    );
    (app, scheduler)
}

fn logged_in_at_home() -> App {
    let (mut app, _) = app_with_flags(&[(HAS_SEEN_ONBOARDING, "true"), (IS_LOGGED_IN, "true")]);
    assert_eq!(app.complete_splash(), Screen::Home);
    app
}

fn menu_line(item_id: u32, quantity: u32) -> CartLineItem {
    let item = shared::catalog::menu_item(item_id).unwrap();
    CartLineItem::from_menu_item(&item, quantity)
}

#[test]
fn splash_routes_first_visit_to_onboarding() {
    let (mut app, scheduler) = app_with_flags(&[]);
    scheduler.advance(Duration::from_millis(2800));
    app.on_tick();
    assert_eq!(app.current_screen(), Screen::Onboarding);
}

#[test]
fn splash_routes_returning_logged_in_user_home() {
    let (mut app, scheduler) =
        app_with_flags(&[(HAS_SEEN_ONBOARDING, "true"), (IS_LOGGED_IN, "true")]);
    scheduler.advance(Duration::from_millis(2800));
    app.on_tick();
    assert_eq!(app.current_screen(), Screen::Home);
}

#[test]
fn splash_routes_returning_logged_out_user_to_auth() {
    let (mut app, scheduler) = app_with_flags(&[(HAS_SEEN_ONBOARDING, "true")]);
    scheduler.advance(Duration::from_millis(2800));
    app.on_tick();
    assert_eq!(app.current_screen(), Screen::Auth);
}

#[test]
fn splash_waits_for_full_delay() {
    let (mut app, scheduler) = app_with_flags(&[]);
    scheduler.advance(Duration::from_millis(2799));
    app.on_tick();
    assert_eq!(app.current_screen(), Screen::Splash);
}

#[test]
fn first_visit_onboarding_then_signup() {
    let (mut app, scheduler) = app_with_flags(&[]);
    scheduler.advance(Duration::from_secs(3));
    app.on_tick();

    app.complete_onboarding();
    assert_eq!(app.current_screen(), Screen::Auth);

    let bad = AuthForm::signup("new@user.in", "98765", "longenough", "longenough");
    assert!(matches!(app.login(&bad), Err(AppError::Validation(_))));
    assert_eq!(app.current_screen(), Screen::Auth);

    let good = AuthForm::signup("new@user.in", "9876543210", "longenough", "longenough");
    app.login(&good).unwrap();
    assert_eq!(app.current_screen(), Screen::Home);
    assert!(app.snapshot().is_logged_in);
}

#[test]
fn repeated_add_merges_into_one_line() {
    let mut app = logged_in_at_home();
    app.select_meal(4).unwrap();
    app.add_to_cart(menu_line(4, 1));
    app.add_to_cart(menu_line(4, 2));
    app.add_to_cart(menu_line(4, 1));

    let cart = app.snapshot().cart;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].cart_quantity, 4);
    assert_eq!(cart.items()[0].total_price, 4 * 199);
    assert_eq!(app.current_screen(), Screen::Cart);
}

#[test]
fn update_cart_with_zero_quantity_removes_item() {
    let mut app = logged_in_at_home();
    app.add_to_cart(menu_line(1, 1));
    app.add_to_cart(menu_line(2, 2));

    app.update_cart(vec![menu_line(1, 0), menu_line(2, 3)]);
    let cart = app.snapshot().cart;
    assert!(cart.get(1).is_none());
    assert!(cart.items().iter().all(|line| line.cart_quantity > 0));
    assert_eq!(cart.get(2).map(|line| line.total_price), Some(372));
}

#[test]
fn quantity_controls() {
    let mut app = logged_in_at_home();
    app.add_to_cart(menu_line(3, 1));

    assert_eq!(
        app.increment_item(3),
        Ok(CartChange::Updated { id: 3, quantity: 2 })
    );
    assert_eq!(
        app.set_item_quantity(3, 1),
        Ok(CartChange::Updated { id: 3, quantity: 1 })
    );
    assert_eq!(app.decrement_item(3), Ok(CartChange::Removed { id: 3 }));
    assert_eq!(app.decrement_item(3), Err(AppError::ItemNotInCart(3)));
    assert!(app.snapshot().cart.is_empty());
}

#[test]
fn bill_for_single_bowl_with_delivery() {
    let mut app = logged_in_at_home();
    app.add_to_cart(menu_line(1, 1));

    let bill = app.bill(DeliveryOption::Delivery, 0);
    assert_eq!(bill.subtotal, 149);
    assert_eq!(bill.savings, 150);
    assert_eq!(bill.delivery_fee, 29);
    assert_eq!(bill.total, 178);
}

#[test]
fn place_order_generates_id_and_clears_cart() {
    let mut app = logged_in_at_home();
    app.add_to_cart(menu_line(1, 2));

    let id = app.place_order().unwrap();
    assert_eq!(id, "FF246810");

    let state = app.snapshot();
    assert!(state.cart.is_empty());
    assert_eq!(state.current_order_id, id);
    assert_eq!(state.current_screen, Screen::OrderTracking);
}

#[test]
fn empty_cart_order_is_rejected() {
    let mut app = logged_in_at_home();
    app.view_cart().unwrap();

    assert_eq!(app.place_order(), Err(AppError::EmptyCart));
    assert_eq!(app.current_screen(), Screen::Cart);
    assert!(!app.snapshot().has_order());
}

#[test]
fn full_navigation_cycle_ends_home_with_empty_cart() {
    let mut app = logged_in_at_home();

    assert_eq!(app.navigate(Screen::Restaurants), Ok(Screen::Restaurants));
    assert_eq!(app.select_restaurant(2), Ok(Screen::MealDetail));
    app.add_meal_to_cart(2).unwrap();
    assert_eq!(app.current_screen(), Screen::Cart);
    app.place_order().unwrap();
    assert_eq!(app.current_screen(), Screen::OrderTracking);
    assert_eq!(app.go_back(), Screen::Home);

    let state = app.snapshot();
    assert_eq!(state.current_screen, Screen::Home);
    assert!(state.cart.is_empty());
}

#[test]
fn logged_out_navigation_redirects_to_auth() {
    let (mut app, _) = app_with_flags(&[(HAS_SEEN_ONBOARDING, "true")]);
    app.complete_splash();
    assert_eq!(app.navigate(Screen::Notifications), Ok(Screen::Auth));

    app.social_login(SocialProvider::Google);
    assert_eq!(app.navigate(Screen::Notifications), Ok(Screen::Notifications));

    app.logout();
    assert_eq!(app.current_screen(), Screen::Auth);
    assert_eq!(app.navigate(Screen::Profile), Ok(Screen::Auth));
}

#[test]
fn tracking_without_order_is_rejected() {
    let mut app = logged_in_at_home();
    let err = app.navigate(Screen::OrderTracking).unwrap_err();
    assert_eq!(
        err,
        AppError::Navigation {
            from: Screen::Home,
            to: Screen::OrderTracking,
            reason: "no order has been placed".to_string(),
        }
    );
    assert_eq!(app.current_screen(), Screen::Home);
}

#[test]
fn splash_cannot_be_reopened_after_startup() {
    let (mut app, scheduler) =
        app_with_flags(&[(HAS_SEEN_ONBOARDING, "true"), (IS_LOGGED_IN, "true")]);
    scheduler.advance(Duration::from_millis(2800));
    app.on_tick();
    assert_eq!(app.current_screen(), Screen::Home);

    assert!(matches!(
        app.navigate(Screen::Splash),
        Err(AppError::Navigation { to: Screen::Splash, .. })
    ));
    assert!(app.navigate(Screen::Onboarding).is_err());
    assert_eq!(app.current_screen(), Screen::Home);

    app.navigate(Screen::Donations).unwrap();
    assert_eq!(app.go_back(), Screen::Home);
}

#[test]
fn flags_survive_restart_in_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flags.json");

    let mut first = App::with_services(
        AppConfig::default(),
        Box::new(FileFlagStore::open(&path).unwrap()),
        Box::new(FixedClock(NOW)),
        Box::new(ManualScheduler::new()),
    );
    assert_eq!(first.complete_splash(), Screen::Onboarding);
    first.complete_onboarding();
    first.login(&AuthForm::login("asha@example.com", "pw")).unwrap();
    drop(first);

    let reopened = FileFlagStore::open(&path).unwrap();
    let flags = PersistedFlags::load(&reopened);
    assert!(flags.has_seen_onboarding);
    assert!(flags.is_logged_in);

    let mut second = App::with_services(
        AppConfig::default(),
        Box::new(reopened),
        Box::new(FixedClock(NOW)),
        Box::new(ManualScheduler::new()),
    );
    assert!(!second.snapshot().is_first_visit);
    assert_eq!(second.complete_splash(), Screen::Home);
}

#[tokio::test(start_paused = true)]
async fn tracking_follows_paused_tokio_clock() {
    let scheduler = TokioScheduler::current().unwrap();
    let mut app = App::with_services(
        AppConfig::default(),
        Box::new(MemoryFlagStore::with_flags([
            (HAS_SEEN_ONBOARDING, "true"),
            (IS_LOGGED_IN, "true"),
        ])),
        Box::new(FixedClock(NOW)),
        Box::new(scheduler),
    );

    tokio::time::sleep(Duration::from_millis(2850)).await;
    app.on_tick();
    assert_eq!(app.current_screen(), Screen::Home);

    app.select_meal(5).unwrap();
    app.add_meal_to_cart(1).unwrap();
    app.place_order().unwrap();
    assert_eq!(app.snapshot().tracking.step(), 1);

    tokio::time::sleep(Duration::from_millis(2001)).await;
    app.on_tick();
    assert_eq!(app.snapshot().tracking.step(), 2);

    tokio::time::sleep(Duration::from_secs(6)).await;
    app.on_tick();
    assert_eq!(app.snapshot().tracking.step(), 3);
    assert!(app.snapshot().tracking.shows_courier());

    tokio::time::sleep(Duration::from_secs(7)).await;
    app.on_tick();
    assert_eq!(app.snapshot().tracking.step(), 4);
    assert!(app.snapshot().tracking.is_delivered());

    tokio::time::sleep(Duration::from_secs(60)).await;
    app.on_tick();
    assert_eq!(app.snapshot().tracking.eta_minutes(), 24);
}

#[tokio::test(start_paused = true)]
async fn leaving_tracking_cancels_timeline() {
    let scheduler = TokioScheduler::current().unwrap();
    let mut app = App::with_services(
        AppConfig::default(),
        Box::new(MemoryFlagStore::with_flags([
            (HAS_SEEN_ONBOARDING, "true"),
            (IS_LOGGED_IN, "true"),
        ])),
        Box::new(FixedClock(NOW)),
        Box::new(scheduler),
    );
    app.complete_splash();
    app.select_meal(1).unwrap();
    app.add_meal_to_cart(1).unwrap();
    app.place_order().unwrap();

    tokio::time::sleep(Duration::from_millis(2001)).await;
    app.on_tick();
    assert_eq!(app.snapshot().tracking.step(), 2);

    app.go_back();
    assert!(!app.is_tracking_active());

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(app.on_tick(), 0);
    let state = app.snapshot();
    assert_eq!(state.current_screen, Screen::Home);
    assert_eq!(state.tracking.step(), 2);
    assert_eq!(state.tracking.eta_minutes(), 25);
}
