//! Controller context
//!
//! The screen controller is not `Send` (it owns `setTimeout` handles), so it lives in
//! a local [`StoredValue`]. Pages read through [`AppContext::state`], which tracks a
//! revision signal bumped after every intent, and mutate through
//! [`AppContext::dispatch`] / [`AppContext::try_dispatch`].

use feeding_controller::{App as Controller, AppState, Result, Screen};
use leptos::prelude::*;

use crate::services::{load_config, open_flag_store, BrowserClock, GlooScheduler};

/// Global controller context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Controller, LocalStorage>,
    revision: RwSignal<u64>,
    /// Bumped by the scheduler when a timed event lands in the controller's channel
    pending: RwSignal<u64>,
    error: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        let pending = RwSignal::new(0);
        let controller = Controller::with_services(
            load_config(),
            open_flag_store(),
            Box::new(BrowserClock),
            Box::new(GlooScheduler::new(pending)),
        );
        Self {
            controller: StoredValue::new_local(controller),
            revision: RwSignal::new(0),
            pending,
            error: RwSignal::new(None),
        }
    }

    /// Snapshot of the controller state; re-runs the caller on every change
    pub fn state(&self) -> AppState {
        self.revision.track();
        self.controller.with_value(|c| c.snapshot())
    }

    pub fn screen(&self) -> Screen {
        self.revision.track();
        self.controller.with_value(|c| c.current_screen())
    }

    /// Read from the controller without cloning the whole state
    pub fn with_controller<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        self.revision.track();
        self.controller.with_value(f)
    }

    /// Run an infallible intent and notify readers
    pub fn dispatch<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> R {
        let result = f(&mut self.controller.write_value());
        self.error.set(None);
        self.bump();
        result
    }

    /// Run a fallible intent. Errors are kept for [`AppContext::error`] and logged.
    pub fn try_dispatch<T>(&self, f: impl FnOnce(&mut Controller) -> Result<T>) -> Option<T> {
        let result = f(&mut self.controller.write_value());
        self.bump();
        match result {
            Ok(value) => {
                self.error.set(None);
                Some(value)
            }
            Err(e) => {
                log::warn!("Action rejected: {}", e);
                self.error.set(Some(e.to_string()));
                None
            }
        }
    }

    /// Last rejected action, cleared by the next successful one
    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Drain timed events into the controller
    fn tick(&self) {
        let processed = self.controller.write_value().on_tick();
        if processed > 0 {
            self.bump();
        }
    }

    fn bump(&self) {
        self.revision.update(|r| *r += 1);
    }
}

pub fn provide_app_context() -> AppContext {
    let context = AppContext::new();
    provide_context(context);

    let pending = context.pending;
    Effect::new(move |_| {
        pending.track();
        context.tick();
    });

    context
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
