//! Profile impact statistics

use shared::{Achievement, OrderHistoryEntry, Rupees};

/// Surplus orders are assumed to save half the order amount
const SAVINGS_SHARE_PERCENT: u32 = 50;

const FOOD_SAVED_KG: f32 = 12.5;
const MEALS_DONATED: u32 = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStats {
    pub order_count: usize,
    /// Rounded to the nearest rupee, halves up
    pub total_saved: Rupees,
    pub food_saved_kg: f32,
    pub meals_donated: u32,
    pub badges_earned: usize,
}

impl ProfileStats {
    pub fn compute(history: &[OrderHistoryEntry], achievements: &[Achievement]) -> Self {
        let spent: u64 = history.iter().map(|order| u64::from(order.amount)).sum();
        let share = u64::from(SAVINGS_SHARE_PERCENT);
        let total_saved = (spent * share * 2 + 100) / 200;
        Self {
            order_count: history.len(),
            total_saved: Rupees::try_from(total_saved).unwrap_or(Rupees::MAX),
            food_saved_kg: FOOD_SAVED_KG,
            meals_donated: MEALS_DONATED,
            badges_earned: achievements.iter().filter(|a| a.earned).count(),
        }
    }
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self::compute(
            &shared::catalog::order_history(),
            &shared::catalog::achievements(),
        )
    }
}
