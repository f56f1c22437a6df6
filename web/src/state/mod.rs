//! Reactive state shared by every page

pub mod app;

pub use app::{provide_app_context, use_app_context, AppContext};
