//! # Feeding Future Shared Library
//!
//! Catalog types and mock content shared by the screen controller and the web
//! front-end. Everything here is plain data: no I/O, no runtime, and it builds for
//! both native targets and `wasm32`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::menu`]**: Restaurants, surplus items, meal detail records
//!   - **[`dto::cart`]**: Cart line items
//!   - **[`dto::community`]**: Onboarding pages, NGOs, donation presets
//!   - **[`dto::activity`]**: Notifications, order history, achievements, delivery steps
//! - **[`catalog`]**: The hard-coded mock catalog backing every screen
//! - **[`utils`]**: Display formatting (rupees, discounts, relative times)
//!
//! ## Usage
//!
//! ```rust
//! use shared::catalog;
//! use shared::dto::CartLineItem;
//!
//! let bowl = catalog::menu_item(1).unwrap();
//! let line = CartLineItem::from_menu_item(&bowl, 2);
//! assert_eq!(line.total_price, 298);
//! ```

pub mod catalog;
pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
