//! # Shared Utility Functions
//!
//! Formatting helpers used by both the controller and the web front-end.
//!
//! ## Functions
//!
//! - [`discount_percentage`] - Whole-number discount between two prices
//! - [`format_rupees`] - Render an amount with the rupee sign
//! - [`format_expiry`] - Render an expiry window ("2 hours", "45 mins")
//! - [`format_minutes_ago`] - Render a relative timestamp ("1 hour ago")
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{discount_percentage, format_rupees};
//!
//! assert_eq!(discount_percentage(299, 149), 50);
//! assert_eq!(format_rupees(178), "₹178");
//! ```

use crate::dto::Rupees;

/// Discount from `original` to `discounted`, rounded to the nearest whole percent.
///
/// Returns 0 when `original` is 0 or the "discounted" price is not lower.
///
/// # Examples
///
/// ```rust
/// use shared::utils::discount_percentage;
///
/// assert_eq!(discount_percentage(349, 209), 40);
/// assert_eq!(discount_percentage(299, 119), 60);
/// assert_eq!(discount_percentage(0, 0), 0);
/// ```
pub fn discount_percentage(original: Rupees, discounted: Rupees) -> u32 {
    if original == 0 || discounted >= original {
        return 0;
    }
    let saved = u64::from(original - discounted);
    let original = u64::from(original);
    // Round half up in integer arithmetic
    ((saved * 200 + original) / (original * 2)) as u32
}

/// Format an amount in rupees (e.g., 178 -> "₹178")
pub fn format_rupees(amount: Rupees) -> String {
    format!("₹{}", amount)
}

/// Format an expiry window given in minutes.
///
/// Whole hours render as "1 hour" / "2 hours", half hours as "1.5 hours", anything
/// under an hour as minutes.
///
/// ```rust
/// use shared::utils::format_expiry;
///
/// assert_eq!(format_expiry(120), "2 hours");
/// assert_eq!(format_expiry(90), "1.5 hours");
/// assert_eq!(format_expiry(45), "45 mins");
/// ```
pub fn format_expiry(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} mins", minutes);
    }
    match (minutes / 60, minutes % 60) {
        (1, 0) => "1 hour".to_string(),
        (hours, 0) => format!("{} hours", hours),
        (hours, 30) => format!("{}.5 hours", hours),
        (hours, rest) => format!("{}h {}m", hours, rest),
    }
}

/// Format a relative timestamp ("2 minutes ago", "1 hour ago", "3 days ago")
pub fn format_minutes_ago(minutes: u32) -> String {
    const HOUR: u32 = 60;
    const DAY: u32 = 24 * HOUR;

    let (value, unit) = match minutes {
        0 => return "just now".to_string(),
        m if m < HOUR => (m, "minute"),
        m if m < DAY => (m / HOUR, "hour"),
        m => (m / DAY, "day"),
    };

    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percentage_matches_catalog_badges() {
        assert_eq!(discount_percentage(299, 149), 50);
        assert_eq!(discount_percentage(249, 124), 50);
        assert_eq!(discount_percentage(349, 209), 40);
        assert_eq!(discount_percentage(399, 199), 50);
        assert_eq!(discount_percentage(299, 119), 60);
    }

    #[test]
    fn test_discount_percentage_degenerate() {
        assert_eq!(discount_percentage(0, 0), 0);
        assert_eq!(discount_percentage(100, 100), 0);
        assert_eq!(discount_percentage(100, 150), 0);
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry(60), "1 hour");
        assert_eq!(format_expiry(180), "3 hours");
        assert_eq!(format_expiry(90), "1.5 hours");
        assert_eq!(format_expiry(75), "1h 15m");
        assert_eq!(format_expiry(30), "30 mins");
    }

    #[test]
    fn test_format_minutes_ago() {
        assert_eq!(format_minutes_ago(0), "just now");
        assert_eq!(format_minutes_ago(1), "1 minute ago");
        assert_eq!(format_minutes_ago(2), "2 minutes ago");
        assert_eq!(format_minutes_ago(60), "1 hour ago");
        assert_eq!(format_minutes_ago(300), "5 hours ago");
        assert_eq!(format_minutes_ago(1440), "1 day ago");
        assert_eq!(format_minutes_ago(3 * 1440), "3 days ago");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(1234), "₹1234");
    }
}
