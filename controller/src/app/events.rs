//! # Application Events
//!
//! Timed events delivered by a [`Scheduler`](crate::core::service::Scheduler) and the
//! [`Timeline`]s that produce them.

use std::time::Duration;

use crate::config::AppConfig;

/// Scheduled results sent to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Splash starts fading out
    SplashFadeOut,
    /// Splash finished; route to onboarding, home or auth
    SplashComplete,
    /// Order tracking reached the given step (1-based)
    TrackingAdvanced(u8),
    /// One minute off the delivery estimate
    EtaTick,
}

/// Ordered `(offset, event)` pairs, offsets measured from when the timeline starts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<(Duration, AppEvent)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event; entries stay sorted by offset, ties keep insertion order
    pub fn at(mut self, offset: Duration, event: AppEvent) -> Self {
        let index = self.entries.partition_point(|(existing, _)| *existing <= offset);
        self.entries.insert(index, (offset, event));
        self
    }

    pub fn entries(&self) -> &[(Duration, AppEvent)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(Duration, AppEvent)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fade-out, then completion a short moment later
    pub fn splash(config: &AppConfig) -> Self {
        let fade = Duration::from_millis(config.splash_fade_ms);
        Self::new()
            .at(fade, AppEvent::SplashFadeOut)
            .at(
                fade + Duration::from_millis(config.splash_exit_ms),
                AppEvent::SplashComplete,
            )
    }

    /// Step advances at the configured offsets plus one ETA tick per interval
    /// until the estimate reaches zero
    pub fn tracking(config: &AppConfig) -> Self {
        let mut timeline = Self::new();
        for (index, offset_ms) in config.tracking_step_offsets_ms.iter().enumerate() {
            let step = u8::try_from(index + 2).unwrap_or(u8::MAX);
            timeline = timeline.at(
                Duration::from_millis(*offset_ms),
                AppEvent::TrackingAdvanced(step),
            );
        }
        let tick = Duration::from_millis(config.eta_tick_ms);
        if !tick.is_zero() {
            for minute in 1..=config.initial_eta_minutes {
                timeline = timeline.at(tick * minute, AppEvent::EtaTick);
            }
        }
        timeline
    }
}
