//! # Environment Services
//!
//! Implementations of the [`crate::core::service`] traits that ship with the controller.
//!
//! - **[`flags`]**: persisted flag keys and the in-memory / file-backed stores
//! - **[`scheduler`]**: Tokio-backed and manually driven timeline schedulers

pub mod flags;
pub mod scheduler;
