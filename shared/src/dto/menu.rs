//! # Menu Data Transfer Objects
//!
//! Restaurants, the surplus items they list, and the extended meal detail record
//! shown on the meal detail screen.

use serde::{Deserialize, Serialize};

use super::Rupees;

/// A discounted surplus item listed by a restaurant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub restaurant: String,
    pub image: String,
    pub original_price: Rupees,
    pub discounted_price: Rupees,
    /// Portions still available
    pub quantity: u32,
    /// Minutes until the item expires
    pub expiry_minutes: u32,
}

impl MenuItem {
    /// Whole-number discount, rounded to nearest (e.g. 299 → 149 is 50%)
    pub fn discount_percentage(&self) -> u32 {
        crate::utils::discount_percentage(self.original_price, self.discounted_price)
    }

    /// Per-portion saving against the original price
    pub fn unit_saving(&self) -> Rupees {
        self.original_price.saturating_sub(self.discounted_price)
    }

    /// Expiry formatted for badges ("2 hours", "1.5 hours", "45 mins")
    pub fn expiry_label(&self) -> String {
        crate::utils::format_expiry(self.expiry_minutes)
    }
}

/// Nutrition facts for a meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// Full record rendered by the meal detail screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealDetail {
    pub item: MenuItem,
    pub rating: f32,
    pub reviews: u32,
    pub description: String,
    pub ingredients: Vec<String>,
    pub nutrition: Option<Nutrition>,
    pub dietary_info: Vec<String>,
    pub pickup_time: String,
    pub distance: String,
}

/// Restaurant with its current surplus listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub rating: f32,
    pub category: String,
    pub distance_km: f32,
    pub delivery_time: String,
    pub surplus: Vec<MenuItem>,
}

impl Restaurant {
    pub fn distance_label(&self) -> String {
        format!("{} km", self.distance_km)
    }

    /// Largest discount among the surplus items, 0 when nothing is listed
    pub fn best_discount(&self) -> u32 {
        self.surplus
            .iter()
            .map(MenuItem::discount_percentage)
            .max()
            .unwrap_or(0)
    }

    /// Soonest expiry among the surplus items
    pub fn soonest_expiry_minutes(&self) -> Option<u32> {
        self.surplus.iter().map(|item| item.expiry_minutes).min()
    }
}

/// Card shown in the "featured" row of the home dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturedRestaurant {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub rating: f32,
    pub category: String,
    pub surplus_items: u32,
    pub distance: String,
    pub discount: String,
    pub estimated_savings: Rupees,
}

/// Home dashboard category shortcut
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub icon: String,
}
