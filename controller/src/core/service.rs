//! # Service Traits
//!
//! Seams between the controller and its environment. The controller never touches
//! browser storage, wall-clock time or timers directly; it goes through these traits
//! so the same state machine runs natively, in the browser, and under test.
//!
//! | Trait | Native | Browser | Tests |
//! |-------|--------|---------|-------|
//! | [`FlagStore`] | `FileFlagStore` | `localStorage` | `MemoryFlagStore` |
//! | [`Clock`] | [`SystemClock`] | `Date.now()` | [`FixedClock`] |
//! | [`Scheduler`] | `TokioScheduler` | `gloo-timers` | `ManualScheduler` |

use async_channel::Sender;

use crate::app::{AppEvent, Timeline};
use crate::core::error::Result;

/// String key/value storage that outlives a session.
///
/// Only two keys are ever written (see [`crate::services::flags`]), both holding
/// `"true"` or nothing.
pub trait FlagStore {
    /// Read a key, `Ok(None)` when unset
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Source of the current time in Unix milliseconds
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Handle to a running [`Timeline`].
///
/// Implementations stop delivering events once cancelled or dropped, so a handle
/// owned by the controller bounds the timeline to the screen that started it.
pub trait ScheduledTask {
    fn cancel(&mut self);

    /// True once every event was delivered or the task was cancelled
    fn is_finished(&self) -> bool;
}

/// Runs timelines, delivering each event on `events` after its offset elapses
pub trait Scheduler {
    fn schedule(&self, timeline: Timeline, events: Sender<AppEvent>) -> Box<dyn ScheduledTask>;
}
