//! # Event Handlers
//!
//! Event handlers organized by domain for better modularity and testability.

pub mod auth;
pub mod cart;
pub mod navigation;
pub mod order;
