//! # Community Data Transfer Objects
//!
//! Onboarding pages, partner NGOs and quick-donation presets.

use serde::{Deserialize, Serialize};

use super::Rupees;

/// One page of the first-run onboarding carousel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnboardingPage {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Partner NGO receiving donations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ngo {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub description: String,
    pub location: String,
    pub meals_served: String,
    pub rating: f32,
    pub verified: bool,
}

/// Quick-donation preset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DonationOption {
    pub amount: Rupees,
    pub meals: u32,
    pub description: String,
}

/// Monthly community goal shown on the donation screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityGoal {
    pub meals_goal: u32,
    pub progress_percent: u32,
}

impl CommunityGoal {
    /// Meals still needed to reach the goal
    pub fn meals_remaining(&self) -> u32 {
        let done = self.meals_goal.saturating_mul(self.progress_percent) / 100;
        self.meals_goal.saturating_sub(done)
    }
}
