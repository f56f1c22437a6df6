//! # Timeline Schedulers
//!
//! [`Scheduler`] implementations for the controller's timed progressions.
//!
//! - [`TokioScheduler`] (feature `native`): one Tokio task per timeline, aborted on
//!   cancel or drop.
//! - [`ManualScheduler`]: virtual time advanced by hand, for deterministic tests and
//!   headless hosts without a runtime.

use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;
use parking_lot::Mutex;

use crate::app::{AppEvent, Timeline};
use crate::core::service::{ScheduledTask, Scheduler};

#[cfg(feature = "native")]
pub use tokio_impl::TokioScheduler;

#[cfg(feature = "native")]
mod tokio_impl {
    use async_channel::Sender;
    use tokio::runtime::Handle;
    use tokio::task::JoinHandle;
    use tokio::time::{sleep_until, Instant};

    use crate::app::{AppEvent, Timeline};
    use crate::core::service::{ScheduledTask, Scheduler};

    /// Spawns each timeline onto a Tokio runtime
    #[derive(Debug, Clone)]
    pub struct TokioScheduler {
        handle: Handle,
    }

    impl TokioScheduler {
        pub fn new(handle: Handle) -> Self {
            Self { handle }
        }

        /// Scheduler on the runtime the caller is running in, if any
        pub fn current() -> Option<Self> {
            Handle::try_current().ok().map(Self::new)
        }
    }

    impl Scheduler for TokioScheduler {
        fn schedule(&self, timeline: Timeline, events: Sender<AppEvent>) -> Box<dyn ScheduledTask> {
            let entries = timeline.into_entries();
            tracing::debug!(events = entries.len(), "Starting timeline");
            let task = self.handle.spawn(async move {
                let start = Instant::now();
                for (offset, event) in entries {
                    sleep_until(start + offset).await;
                    if events.send(event).await.is_err() {
                        tracing::debug!("Event channel closed, stopping timeline");
                        break;
                    }
                }
            });
            Box::new(TokioTask { task })
        }
    }

    struct TokioTask {
        task: JoinHandle<()>,
    }

    impl ScheduledTask for TokioTask {
        fn cancel(&mut self) {
            self.task.abort();
        }

        fn is_finished(&self) -> bool {
            self.task.is_finished()
        }
    }

    impl Drop for TokioTask {
        fn drop(&mut self) {
            self.task.abort();
        }
    }
}

struct ManualTimeline {
    started_at: Duration,
    entries: Vec<(Duration, AppEvent)>,
    next: usize,
    cancelled: bool,
    events: Sender<AppEvent>,
}

impl ManualTimeline {
    fn is_finished(&self) -> bool {
        self.cancelled || self.next >= self.entries.len()
    }

    /// Deliver entries due at `now`, returning how many were sent
    fn deliver_until(&mut self, now: Duration) -> usize {
        let mut delivered = 0;
        while !self.is_finished() {
            let (offset, event) = self.entries[self.next];
            if self.started_at + offset > now {
                break;
            }
            self.next += 1;
            if self.events.try_send(event).is_ok() {
                delivered += 1;
            }
        }
        delivered
    }
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    timelines: Vec<Arc<Mutex<ManualTimeline>>>,
}

/// Scheduler driven by [`ManualScheduler::advance`].
///
/// Clones share the same virtual clock, so a test can keep one handle while the
/// controller owns another.
///
/// ```rust
/// use std::time::Duration;
/// use feeding_controller::app::{AppEvent, Timeline};
/// use feeding_controller::core::service::Scheduler;
/// use feeding_controller::services::scheduler::ManualScheduler;
///
/// let scheduler = ManualScheduler::new();
/// let (tx, rx) = async_channel::unbounded();
/// let timeline = Timeline::new().at(Duration::from_secs(1), AppEvent::EtaTick);
/// let _task = scheduler.schedule(timeline, tx);
///
/// assert_eq!(scheduler.advance(Duration::from_millis(999)), 0);
/// assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
/// assert_eq!(rx.try_recv(), Ok(AppEvent::EtaTick));
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward and deliver every event now due.
    ///
    /// Returns the number of events delivered.
    pub fn advance(&self, by: Duration) -> usize {
        let mut clock = self.inner.lock();
        clock.now += by;
        let now = clock.now;
        let delivered: usize = clock
            .timelines
            .iter()
            .map(|timeline| timeline.lock().deliver_until(now))
            .sum();
        clock.timelines.retain(|timeline| !timeline.lock().is_finished());
        delivered
    }

    /// Timelines with undelivered events
    pub fn active_timelines(&self) -> usize {
        self.inner
            .lock()
            .timelines
            .iter()
            .filter(|timeline| !timeline.lock().is_finished())
            .count()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, timeline: Timeline, events: Sender<AppEvent>) -> Box<dyn ScheduledTask> {
        let mut clock = self.inner.lock();
        let state = Arc::new(Mutex::new(ManualTimeline {
            started_at: clock.now,
            entries: timeline.into_entries(),
            next: 0,
            cancelled: false,
            events,
        }));
        clock.timelines.push(state.clone());
        Box::new(ManualTask { state })
    }
}

struct ManualTask {
    state: Arc<Mutex<ManualTimeline>>,
}

impl ScheduledTask for ManualTask {
    fn cancel(&mut self) {
        self.state.lock().cancelled = true;
    }

    fn is_finished(&self) -> bool {
        self.state.lock().is_finished()
    }
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_step() -> Timeline {
        Timeline::new()
            .at(Duration::from_secs(2), AppEvent::TrackingAdvanced(2))
            .at(Duration::from_secs(8), AppEvent::TrackingAdvanced(3))
    }

    #[test]
    fn test_manual_delivers_in_order() {
        let scheduler = ManualScheduler::new();
        let (tx, rx) = async_channel::unbounded();
        let task = scheduler.schedule(two_step(), tx);

        assert_eq!(scheduler.advance(Duration::from_secs(10)), 2);
        assert_eq!(rx.try_recv(), Ok(AppEvent::TrackingAdvanced(2)));
        assert_eq!(rx.try_recv(), Ok(AppEvent::TrackingAdvanced(3)));
        assert!(task.is_finished());
        assert_eq!(scheduler.active_timelines(), 0);
    }

    #[test]
    fn test_manual_offsets_relative_to_schedule_time() {
        let scheduler = ManualScheduler::new();
        scheduler.advance(Duration::from_secs(100));
        let (tx, rx) = async_channel::unbounded();
        let _task = scheduler.schedule(two_step(), tx);

        assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
        assert_eq!(scheduler.advance(Duration::from_secs(1)), 1);
        assert_eq!(rx.try_recv(), Ok(AppEvent::TrackingAdvanced(2)));
    }

    #[test]
    fn test_manual_cancel_and_drop_stop_delivery() {
        let scheduler = ManualScheduler::new();
        let (tx, rx) = async_channel::unbounded();

        let mut cancelled = scheduler.schedule(two_step(), tx.clone());
        cancelled.cancel();
        let dropped = scheduler.schedule(two_step(), tx);
        drop(dropped);

        assert_eq!(scheduler.advance(Duration::from_secs(60)), 0);
        assert!(rx.try_recv().is_err());
        assert!(cancelled.is_finished());
    }

    #[cfg(feature = "native")]
    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_follows_paused_clock() {
        let scheduler = TokioScheduler::current().unwrap();
        let (tx, rx) = async_channel::unbounded();
        let task = scheduler.schedule(two_step(), tx);

        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert_eq!(rx.try_recv(), Ok(AppEvent::TrackingAdvanced(2)));
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(rx.try_recv(), Ok(AppEvent::TrackingAdvanced(3)));

        tokio::task::yield_now().await;
        assert!(task.is_finished());
    }

    #[cfg(feature = "native")]
    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_drop_aborts() {
        let scheduler = TokioScheduler::current().unwrap();
        let (tx, rx) = async_channel::unbounded();
        let task = scheduler.schedule(two_step(), tx);
        drop(task);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
    }
}
