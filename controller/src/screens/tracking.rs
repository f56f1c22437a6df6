//! Order tracking progress: step index and delivery estimate

use serde::Serialize;

/// Number of tracking steps (confirmed, preparing, out for delivery, delivered)
pub const TRACKING_STEPS: u8 = 4;

/// Step at which the courier card appears
const COURIER_STEP: u8 = 3;

/// Display status of one tracking step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingProgress {
    step: u8,
    eta_minutes: u32,
}

impl TrackingProgress {
    pub fn new(eta_minutes: u32) -> Self {
        Self {
            step: 1,
            eta_minutes,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn eta_minutes(&self) -> u32 {
        self.eta_minutes
    }

    /// Move to `step`, clamped to `1..=4`. Steps never go backwards.
    pub fn advance_to(&mut self, step: u8) {
        let step = step.clamp(1, TRACKING_STEPS);
        if step > self.step {
            self.step = step;
        }
    }

    /// One minute off the estimate, stopping at zero
    pub fn tick_eta(&mut self) {
        self.eta_minutes = self.eta_minutes.saturating_sub(1);
    }

    pub fn status_of(&self, step_id: u8) -> StepStatus {
        match step_id.cmp(&self.step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    pub fn progress_percent(&self) -> f32 {
        f32::from(self.step) / f32::from(TRACKING_STEPS) * 100.0
    }

    pub fn shows_courier(&self) -> bool {
        self.step >= COURIER_STEP
    }

    pub fn is_delivered(&self) -> bool {
        self.step == TRACKING_STEPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_step() {
        let progress = TrackingProgress::new(25);
        assert_eq!(progress.step(), 1);
        assert_eq!(progress.eta_minutes(), 25);
        assert_eq!(progress.progress_percent(), 25.0);
        assert_eq!(progress.status_of(1), StepStatus::Current);
        assert_eq!(progress.status_of(2), StepStatus::Pending);
        assert!(!progress.shows_courier());
    }

    #[test]
    fn test_advance_is_monotonic_and_clamped() {
        let mut progress = TrackingProgress::new(25);
        progress.advance_to(3);
        progress.advance_to(2);
        assert_eq!(progress.step(), 3);
        assert!(progress.shows_courier());
        assert_eq!(progress.status_of(2), StepStatus::Completed);

        progress.advance_to(9);
        assert_eq!(progress.step(), 4);
        assert!(progress.is_delivered());
        assert_eq!(progress.progress_percent(), 100.0);
    }

    #[test]
    fn test_eta_stops_at_zero() {
        let mut progress = TrackingProgress::new(1);
        progress.tick_eta();
        progress.tick_eta();
        assert_eq!(progress.eta_minutes(), 0);
    }
}
