//! # Screen Controller
//!
//! The [`App`] struct owns everything that outlives a single screen: the active
//! [`Screen`], the cart, the current order id and the mirror of the persisted flags.
//! Render targets read [`AppState`] and call `App` methods on user intent.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 Render target (Leptos page)                  │
//! │  - reads AppState                                            │
//! │  - calls navigate() / add_to_cart() / place_order() ...      │
//! └────────────┬─────────────────────────────────────────────────┘
//!              │
//! ┌────────────▼─────────────────────────────────────────────────┐
//! │  App                                                          │
//! │  - handlers::*        intent → state change                  │
//! │  - on_tick()          drains scheduled events                │
//! │  - sync_timelines()   starts / cancels timed progressions    │
//! │  State: Arc<RwLock<AppState>>, locked briefly per handler    │
//! └────────────┬───────────────────────────────▲─────────────────┘
//!              │ Timeline                      │ async_channel
//! ┌────────────▼───────────────────────────────┴─────────────────┐
//! │  Scheduler (Tokio / gloo-timers / manual)                    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timed Progressions
//!
//! Two screens advance on their own: the splash hands over after a fixed delay, and
//! order tracking steps through its stages. Each runs as a [`Timeline`] owned by the
//! controller. Leaving the screen drops the task, so a stale timer can never move a
//! screen the user has already left.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::time::Duration;
//! use feeding_controller::core::service::FixedClock;
//! use feeding_controller::screens::AuthForm;
//! use feeding_controller::services::{flags::MemoryFlagStore, scheduler::ManualScheduler};
//! use feeding_controller::{App, AppConfig, Screen};
//!
//! let scheduler = ManualScheduler::new();
//! let mut app = App::with_services(
//!     AppConfig::default(),
//!     Box::new(MemoryFlagStore::new()),
//!     Box::new(FixedClock(1_700_000_123_456)),
//!     Box::new(scheduler.clone()),
//! );
//!
//! scheduler.advance(Duration::from_millis(2800));
//! app.on_tick();
//! assert_eq!(app.current_screen(), Screen::Onboarding);
//!
//! app.complete_onboarding();
//! app.login(&AuthForm::login("asha@example.com", "secret")).unwrap();
//! app.select_restaurant(1).unwrap();
//! app.add_meal_to_cart(2).unwrap();
//! assert_eq!(app.place_order().unwrap(), "FF123456");
//! assert_eq!(app.current_screen(), Screen::OrderTracking);
//! ```

mod cart;
mod events;
mod handlers;
mod state;

pub use cart::{BillSummary, Cart, CartChange, DeliveryOption};
pub use events::{AppEvent, Timeline};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::{CartLineItem, Rupees};

use crate::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{Clock, FlagStore, ScheduledTask, Scheduler};
use crate::screens::auth::{AuthForm, SocialProvider};
use crate::screens::meal::MealSelection;
use crate::services::flags::PersistedFlags;

/// Screen and cart controller.
///
/// Built from boxed service implementations so the same controller runs natively,
/// in the browser and under test (see [`crate::core::service`]).
pub struct App {
    /// Shared application state.
    ///
    /// Hold locks for minimal duration; handlers take the write lock once per intent.
    pub state: Arc<RwLock<AppState>>,

    config: AppConfig,
    flags: Box<dyn FlagStore>,
    clock: Box<dyn Clock>,
    scheduler: Box<dyn Scheduler>,

    /// Scheduled events, drained in [`App::on_tick`]
    event_rx: Receiver<AppEvent>,
    event_tx: Sender<AppEvent>,

    splash_task: Option<Box<dyn ScheduledTask>>,
    tracking_task: Option<Box<dyn ScheduledTask>>,
}

impl App {
    /// Create the controller on the splash screen and start the splash timeline.
    ///
    /// Persisted flags are read exactly once, here.
    pub fn with_services(
        config: AppConfig,
        flags: Box<dyn FlagStore>,
        clock: Box<dyn Clock>,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        let persisted = PersistedFlags::load(flags.as_ref());
        tracing::info!(
            first_visit = !persisted.has_seen_onboarding,
            logged_in = persisted.is_logged_in,
            "Starting screen controller"
        );

        let state = AppState::new(
            !persisted.has_seen_onboarding,
            persisted.is_logged_in,
            config.initial_eta_minutes,
        );
        let (event_tx, event_rx) = unbounded();

        let mut app = Self {
            state: Arc::new(RwLock::new(state)),
            config,
            flags,
            clock,
            scheduler,
            event_rx,
            event_tx,
            splash_task: None,
            tracking_task: None,
        };
        let splash = Timeline::splash(&app.config);
        app.splash_task = Some(app.scheduler.schedule(splash, app.event_tx.clone()));
        app
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn current_screen(&self) -> Screen {
        self.state.read().current_screen
    }

    /// Clone of the current state for rendering
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// True while a tracking timeline is still delivering
    pub fn is_tracking_active(&self) -> bool {
        self.tracking_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Apply every scheduled event that has arrived.
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::debug!(events_processed = processed, "on_tick: processed scheduled events");
        }
        processed
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SplashFadeOut => {
                let mut state = self.state.write();
                if state.current_screen == Screen::Splash {
                    state.splash_fading = true;
                }
            }
            AppEvent::SplashComplete => {
                self.complete_splash();
            }
            AppEvent::TrackingAdvanced(step) => {
                handlers::order::handle_tracking_advanced(self.state.clone(), step);
            }
            AppEvent::EtaTick => {
                handlers::order::handle_eta_tick(self.state.clone());
            }
        }
    }

    /// Leave the splash: onboarding on first visit, else home when logged in, else auth
    pub fn complete_splash(&mut self) -> Screen {
        let screen = handlers::navigation::handle_splash_complete(self.state.clone());
        self.sync_timelines();
        screen
    }

    /// Persist `hasSeenOnboarding` and go to auth
    pub fn complete_onboarding(&mut self) {
        handlers::auth::handle_onboarding_complete(self.state.clone(), self.flags.as_ref());
        self.sync_timelines();
    }

    /// Validate the auth form, persist `isLoggedIn` and go home.
    ///
    /// On a validation error the screen stays on auth.
    pub fn login(&mut self, form: &AuthForm) -> Result<()> {
        handlers::auth::handle_login(self.state.clone(), self.flags.as_ref(), form)?;
        self.sync_timelines();
        Ok(())
    }

    pub fn social_login(&mut self, provider: SocialProvider) {
        handlers::auth::handle_social_login(self.state.clone(), self.flags.as_ref(), provider);
        self.sync_timelines();
    }

    /// Clear `isLoggedIn` and return to auth
    pub fn logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone(), self.flags.as_ref());
        self.sync_timelines();
    }

    /// Navigate to `screen`, returning the screen actually shown.
    ///
    /// Login-only screens redirect to [`Screen::Auth`] when logged out. Order
    /// tracking without an order, or meal detail without a selection, is rejected.
    pub fn navigate(&mut self, screen: Screen) -> Result<Screen> {
        let result = handlers::navigation::handle_navigate(self.state.clone(), screen);
        self.sync_timelines();
        result
    }

    /// Follow the current screen's back button
    pub fn go_back(&mut self) -> Screen {
        let screen = handlers::navigation::handle_back(self.state.clone());
        self.sync_timelines();
        screen
    }

    /// Open meal detail for the restaurant's first surplus item
    pub fn select_restaurant(&mut self, restaurant_id: u32) -> Result<Screen> {
        let result =
            handlers::navigation::handle_select_restaurant(self.state.clone(), restaurant_id);
        self.sync_timelines();
        result
    }

    /// Open meal detail for a specific surplus item
    pub fn select_meal(&mut self, item_id: u32) -> Result<Screen> {
        let result = handlers::navigation::handle_select_meal(self.state.clone(), item_id);
        self.sync_timelines();
        result
    }

    /// Fresh quantity picker for the selected meal
    pub fn meal_selection(&self) -> Option<MealSelection> {
        self.state
            .read()
            .selected_meal
            .clone()
            .map(MealSelection::new)
    }

    /// Add a line (merging by identifier) and go to the cart
    pub fn add_to_cart(&mut self, item: CartLineItem) {
        handlers::cart::handle_add_to_cart(self.state.clone(), item);
        self.sync_timelines();
    }

    /// Add `quantity` portions of the selected meal and go to the cart
    pub fn add_meal_to_cart(&mut self, quantity: u32) -> Result<()> {
        let mut selection = self.meal_selection().ok_or_else(|| AppError::Navigation {
            from: self.current_screen(),
            to: Screen::Cart,
            reason: "no meal is selected".to_string(),
        })?;
        selection.set_quantity(quantity);
        self.add_to_cart(selection.to_cart_item());
        Ok(())
    }

    /// "View Cart": open the cart without changing it
    pub fn view_cart(&mut self) -> Result<Screen> {
        self.navigate(Screen::Cart)
    }

    /// Replace the cart contents
    pub fn update_cart(&mut self, items: Vec<CartLineItem>) {
        handlers::cart::handle_update_cart(self.state.clone(), items);
    }

    pub fn set_item_quantity(&mut self, item_id: u32, quantity: u32) -> Result<CartChange> {
        handlers::cart::handle_quantity_change(self.state.clone(), |cart| {
            cart.set_quantity(item_id, quantity)
        })
    }

    pub fn increment_item(&mut self, item_id: u32) -> Result<CartChange> {
        handlers::cart::handle_quantity_change(self.state.clone(), |cart| cart.increment(item_id))
    }

    /// Decrement an item; from quantity 1 this returns [`CartChange::Removed`]
    pub fn decrement_item(&mut self, item_id: u32) -> Result<CartChange> {
        handlers::cart::handle_quantity_change(self.state.clone(), |cart| cart.decrement(item_id))
    }

    pub fn remove_item(&mut self, item_id: u32) -> Result<CartChange> {
        handlers::cart::handle_quantity_change(self.state.clone(), |cart| cart.remove(item_id))
    }

    /// Bill for the current cart
    pub fn bill(&self, option: DeliveryOption, donation: Rupees) -> BillSummary {
        BillSummary::compute(
            &self.state.read().cart,
            option,
            donation,
            self.config.delivery_fee,
        )
    }

    /// Generate an order id, clear the cart and open order tracking
    pub fn place_order(&mut self) -> Result<String> {
        let now = self.clock.now_millis();
        let id = handlers::order::handle_place_order(self.state.clone(), &self.config, now)?;
        self.sync_timelines();
        Ok(id)
    }

    /// Start or stop timelines to match the current screen
    fn sync_timelines(&mut self) {
        let screen = self.current_screen();

        if screen != Screen::Splash {
            if let Some(mut task) = self.splash_task.take() {
                task.cancel();
            }
        }

        match (screen == Screen::OrderTracking, self.tracking_task.is_some()) {
            (true, false) => {
                let initial_eta = self.config.initial_eta_minutes;
                self.state.write().tracking = crate::screens::TrackingProgress::new(initial_eta);
                let timeline = Timeline::tracking(&self.config);
                self.tracking_task = Some(self.scheduler.schedule(timeline, self.event_tx.clone()));
                tracing::debug!("Order tracking timeline started");
            }
            (false, true) => {
                if let Some(mut task) = self.tracking_task.take() {
                    task.cancel();
                    tracing::debug!("Order tracking timeline cancelled");
                }
                // Drop tracking events already queued for the old screen
                self.drain_stale_tracking_events();
            }
            _ => {}
        }
    }

    fn drain_stale_tracking_events(&mut self) {
        let mut kept = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            if !matches!(event, AppEvent::TrackingAdvanced(_) | AppEvent::EtaTick) {
                kept.push(event);
            }
        }
        for event in kept {
            let _ = self.event_tx.try_send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::core::service::FixedClock;
    use crate::services::flags::{MemoryFlagStore, HAS_SEEN_ONBOARDING, IS_LOGGED_IN};
    use crate::services::scheduler::ManualScheduler;

    fn app_with(store: MemoryFlagStore) -> (App, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let app = App::with_services(
            AppConfig::default(),
            Box::new(store),
            Box::new(FixedClock(1_700_000_987_654)),
            Box::new(scheduler.clone()),
        );
        (app, scheduler)
    }

    fn returning_user() -> (App, ManualScheduler) {
        app_with(MemoryFlagStore::with_flags([
            (HAS_SEEN_ONBOARDING, "true"),
            (IS_LOGGED_IN, "true"),
        ]))
    }

    #[test]
    fn test_splash_fades_then_completes() {
        let (mut app, scheduler) = returning_user();
        assert_eq!(app.current_screen(), Screen::Splash);

        scheduler.advance(Duration::from_millis(2500));
        app.on_tick();
        assert!(app.snapshot().splash_fading);
        assert_eq!(app.current_screen(), Screen::Splash);

        scheduler.advance(Duration::from_millis(300));
        app.on_tick();
        assert_eq!(app.current_screen(), Screen::Home);
        assert_eq!(scheduler.active_timelines(), 0);
    }

    #[test]
    fn test_leaving_splash_early_cancels_timeline() {
        let (mut app, scheduler) = returning_user();
        app.complete_splash();
        app.navigate(Screen::Donations).unwrap();

        assert_eq!(scheduler.active_timelines(), 0);
        assert_eq!(scheduler.advance(Duration::from_secs(5)), 0);
        app.on_tick();
        assert_eq!(app.current_screen(), Screen::Donations);
    }

    #[test]
    fn test_view_cart_keeps_contents() {
        let (mut app, _scheduler) = returning_user();
        app.complete_splash();
        app.select_meal(5).unwrap();
        app.add_meal_to_cart(2).unwrap();
        app.navigate(Screen::Home).unwrap();

        assert_eq!(app.view_cart(), Ok(Screen::Cart));
        let snapshot = app.snapshot();
        assert_eq!(snapshot.cart.len(), 1);
        assert_eq!(snapshot.cart.items()[0].total_price, 238);
    }

    #[test]
    fn test_add_meal_without_selection() {
        let (mut app, _scheduler) = returning_user();
        app.complete_splash();
        assert!(matches!(
            app.add_meal_to_cart(1),
            Err(AppError::Navigation { .. })
        ));
        assert!(app.snapshot().cart.is_empty());
    }

    #[test]
    fn test_tracking_progresses_and_stops_on_leave() {
        let (mut app, scheduler) = returning_user();
        app.complete_splash();
        app.select_restaurant(3).unwrap();
        app.add_meal_to_cart(1).unwrap();
        assert_eq!(app.place_order().unwrap(), "FF987654");
        assert!(app.is_tracking_active());

        scheduler.advance(Duration::from_secs(8));
        app.on_tick();
        assert_eq!(app.snapshot().tracking.step(), 3);

        app.go_back();
        assert!(!app.is_tracking_active());
        assert_eq!(scheduler.advance(Duration::from_secs(60)), 0);
        app.on_tick();
        assert_eq!(app.snapshot().tracking.step(), 3);
    }

    #[test]
    fn test_reentering_tracking_discards_unticked_events() {
        let (mut app, scheduler) = returning_user();
        app.complete_splash();
        app.select_meal(2).unwrap();
        app.add_meal_to_cart(1).unwrap();
        app.place_order().unwrap();

        // Step 2 is queued but not yet applied
        assert_eq!(scheduler.advance(Duration::from_millis(2001)), 1);
        app.go_back();
        assert_eq!(app.navigate(Screen::OrderTracking), Ok(Screen::OrderTracking));

        assert_eq!(app.on_tick(), 0);
        assert_eq!(app.snapshot().tracking.step(), 1);
        assert_eq!(app.snapshot().tracking.eta_minutes(), 25);
    }

    #[test]
    fn test_eta_counts_down() {
        let (mut app, scheduler) = returning_user();
        app.complete_splash();
        app.select_meal(1).unwrap();
        app.add_meal_to_cart(1).unwrap();
        app.place_order().unwrap();

        scheduler.advance(Duration::from_secs(3 * 60));
        app.on_tick();
        let snapshot = app.snapshot();
        assert_eq!(snapshot.tracking.eta_minutes(), 22);
        assert!(snapshot.tracking.is_delivered());
    }

    #[test]
    fn test_bill_uses_configured_fee() {
        let (mut app, _scheduler) = returning_user();
        app.complete_splash();
        app.select_meal(1).unwrap();
        app.add_meal_to_cart(1).unwrap();

        assert_eq!(app.bill(DeliveryOption::Delivery, 0).total, 178);
        assert_eq!(app.bill(DeliveryOption::Pickup, 10).total, 159);
    }
}
