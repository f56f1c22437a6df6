//! # Formatting Utilities for the Web Front-end
//!
//! Display helpers that only the browser screens need. Prices, discounts and
//! relative times live in [`shared::utils`].
//!
//! ## Functions
//!
//! - [`format_eta`] - Delivery estimate ("25 mins", "Arriving now")
//! - [`format_rating`] - Star rating with one decimal
//! - [`format_percent`] - Progress bar width for inline styles
//! - [`format_meals`] - Pluralized meal count

/// Format a delivery estimate in minutes
///
/// ```rust
/// use feeding_web::utils::format::format_eta;
///
/// assert_eq!(format_eta(25), "25 mins");
/// assert_eq!(format_eta(1), "1 min");
/// assert_eq!(format_eta(0), "Arriving now");
/// ```
pub fn format_eta(minutes: u32) -> String {
    match minutes {
        0 => "Arriving now".to_string(),
        1 => "1 min".to_string(),
        n => format!("{} mins", n),
    }
}

/// Format a rating as "★ 4.5"
pub fn format_rating(rating: f32) -> String {
    format!("★ {:.1}", rating)
}

/// Format a percentage for a CSS width (e.g., 50.0 -> "50%")
pub fn format_percent(percent: f32) -> String {
    format!("{}%", percent.clamp(0.0, 100.0).round())
}

/// "1 meal" / "4 meals"
pub fn format_meals(count: u32) -> String {
    if count == 1 {
        "1 meal".to_string()
    } else {
        format!("{} meals", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.5), "★ 4.5");
        assert_eq!(format_rating(4.0), "★ 4.0");
    }

    #[test]
    fn test_format_percent_clamps() {
        assert_eq!(format_percent(75.0), "75%");
        assert_eq!(format_percent(120.0), "100%");
        assert_eq!(format_percent(-3.0), "0%");
    }

    #[test]
    fn test_format_meals() {
        assert_eq!(format_meals(1), "1 meal");
        assert_eq!(format_meals(20), "20 meals");
    }
}
