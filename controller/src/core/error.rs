//! # Common Error Types
//!
//! Consolidated error handling for the screen controller.
//!
//! Rejected intents come back as an [`AppError`]; the render target shows the message
//! and the current screen stays put.
//!
//! ## Error Categories
//!
//! - **Validation**: Auth form input rejected (bad email, short password, ...)
//! - **EmptyCart**: Order placement attempted with nothing in the cart
//! - **ItemNotInCart**: Quantity change for an item the cart does not hold
//! - **UnknownMenuItem**: Selection of an identifier missing from the catalog
//! - **Navigation**: Guarded screen change rejected
//! - **Storage**: Persisted flag read/write failed
//! - **Config**: Configuration file could not be read or parsed
//!
//! ## Usage Pattern
//!
//! ```rust
//! use feeding_controller::core::error::{AppError, Result};
//!
//! fn require_items(count: usize) -> Result<()> {
//!     if count == 0 {
//!         return Err(AppError::EmptyCart);
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(require_items(0).unwrap_err().to_string(), "Cannot place an order with an empty cart");
//! ```

use thiserror::Error;

use crate::app::Screen;

/// Controller-wide error type.
///
/// Handlers return [`Result<T>`]; render targets show the `Display` text to the user.
///
/// # Example
///
/// ```rust
/// use feeding_controller::core::error::AppError;
///
/// let err = AppError::Validation("Please enter a valid email address".to_string());
/// assert_eq!(err.to_string(), "Validation error: Please enter a valid email address");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Auth form input failed validation.
    ///
    /// The auth screen stays active and shows the message.
    #[error("Validation error: {0}")]
    Validation(String),

    /// `placeOrder` with no line items.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Quantity change for an identifier the cart does not contain.
    #[error("Item {0} is not in the cart")]
    ItemNotInCart(u32),

    /// Restaurant or menu item identifier missing from the catalog.
    #[error("Unknown menu selection: {0}")]
    UnknownMenuItem(u32),

    /// Guarded navigation rejected; the current screen is unchanged.
    #[error("Cannot open {to:?} from {from:?}: {reason}")]
    Navigation {
        from: Screen,
        to: Screen,
        reason: String,
    },

    /// Persisted flag storage failure.
    ///
    /// Persistence is best-effort: handlers log this and carry on navigating.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration file could not be loaded.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::ItemNotInCart(7).to_string(),
            "Item 7 is not in the cart"
        );
        assert_eq!(
            AppError::Storage("quota exceeded".to_string()).to_string(),
            "Storage error: quota exceeded"
        );
    }

    #[test]
    fn test_navigation_error_names_screens() {
        let err = AppError::Navigation {
            from: Screen::Home,
            to: Screen::OrderTracking,
            reason: "no order has been placed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot open OrderTracking from Home: no order has been placed"
        );
    }
}
