//! # Activity Data Transfer Objects
//!
//! Notifications, past orders, achievements and the delivery steps shown while an
//! order is tracked.

use serde::{Deserialize, Serialize};

use super::Rupees;

/// Notification category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Order,
    Impact,
    Offer,
    Donation,
    Alert,
    Achievement,
    Reminder,
}

impl NotificationKind {
    /// Badge label
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Order => "Order",
            NotificationKind::Impact => "Impact",
            NotificationKind::Offer => "Offer",
            NotificationKind::Donation => "Donation",
            NotificationKind::Alert => "Alert",
            NotificationKind::Achievement => "Achievement",
            NotificationKind::Reminder => "Reminder",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub minutes_ago: u32,
    pub read: bool,
}

impl Notification {
    pub fn time_label(&self) -> String {
        crate::utils::format_minutes_ago(self.minutes_ago)
    }
}

/// Completed order listed on the profile screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderHistoryEntry {
    pub id: String,
    pub restaurant: String,
    pub items: Vec<String>,
    pub date: String,
    pub amount: Rupees,
    pub status: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
}

/// One stage of the scripted delivery timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingStep {
    /// 1-based position in the timeline
    pub id: u8,
    pub title: String,
    pub description: String,
}
