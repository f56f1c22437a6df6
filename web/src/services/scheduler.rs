//! `setTimeout`-backed timeline scheduler
//!
//! Each timeline entry becomes one `gloo_timers` [`Timeout`] measured from the moment
//! the timeline was scheduled. A fired timeout pushes its event into the controller's
//! channel and bumps a signal; the app context watches that signal and calls
//! `App::on_tick`.

use std::cell::Cell;
use std::rc::Rc;

use async_channel::Sender;
use feeding_controller::app::{AppEvent, Timeline};
use feeding_controller::core::service::{ScheduledTask, Scheduler};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub struct GlooScheduler {
    pending: RwSignal<u64>,
}

impl GlooScheduler {
    /// `pending` is bumped after every delivered event
    pub fn new(pending: RwSignal<u64>) -> Self {
        Self { pending }
    }
}

impl Scheduler for GlooScheduler {
    fn schedule(&self, timeline: Timeline, events: Sender<AppEvent>) -> Box<dyn ScheduledTask> {
        let entries = timeline.into_entries();
        let remaining = Rc::new(Cell::new(entries.len()));
        let pending = self.pending;
        log::debug!("Starting timeline with {} events", entries.len());

        let timeouts = entries
            .into_iter()
            .map(|(offset, event)| {
                let events = events.clone();
                let remaining = remaining.clone();
                let millis = u32::try_from(offset.as_millis()).unwrap_or(u32::MAX);
                Timeout::new(millis, move || {
                    remaining.set(remaining.get().saturating_sub(1));
                    if events.try_send(event).is_ok() {
                        pending.update(|n| *n += 1);
                    }
                })
            })
            .collect();

        Box::new(GlooTask {
            timeouts,
            remaining,
        })
    }
}

/// Pending timeouts of one timeline; dropping a [`Timeout`] clears it
struct GlooTask {
    timeouts: Vec<Timeout>,
    remaining: Rc<Cell<usize>>,
}

impl ScheduledTask for GlooTask {
    fn cancel(&mut self) {
        self.timeouts.clear();
        self.remaining.set(0);
    }

    fn is_finished(&self) -> bool {
        self.remaining.get() == 0
    }
}
