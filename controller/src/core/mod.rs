//! # Core Abstractions
//!
//! Error type and service traits shared by every part of the controller.
//!
//! ## Modules
//!
//! - **[`error`]**: Controller error type (`AppError`, `Result<T>`)
//! - **[`service`]**: Environment seams (`FlagStore`, `Clock`, `Scheduler`)
//!
//! ## Dependency Injection
//!
//! The [`crate::App`] is built from boxed trait objects, so tests swap in in-memory
//! storage, a frozen clock and a hand-cranked scheduler:
//!
//! ```rust
//! use feeding_controller::core::service::FixedClock;
//! use feeding_controller::services::{flags::MemoryFlagStore, scheduler::ManualScheduler};
//! use feeding_controller::{App, AppConfig, Screen};
//!
//! let app = App::with_services(
//!     AppConfig::default(),
//!     Box::new(MemoryFlagStore::new()),
//!     Box::new(FixedClock(1_700_000_123_456)),
//!     Box::new(ManualScheduler::new()),
//! );
//! assert_eq!(app.current_screen(), Screen::Splash);
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{Clock, FixedClock, FlagStore, ScheduledTask, Scheduler, SystemClock};
