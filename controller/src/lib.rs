//! # Feeding Future Screen Controller
//!
//! State machine behind the Feeding Future surplus-food app: which screen is showing,
//! what is in the cart, which order is being tracked, and the two flags that survive a
//! restart (`hasSeenOnboarding`, `isLoggedIn`).
//!
//! The crate has no UI. Render targets (the Leptos front-end in `feeding-web`, or the
//! headless walkthrough binary) read [`AppState`] and call [`App`] methods on user
//! intent.
//!
//! ## Screen Flow
//!
//! ```text
//! splash ──► onboarding ──► auth ──► home ──► restaurants ──► meal-detail ──► cart ──► order-tracking
//!    │        (first visit)   ▲        │                                         ▲
//!    ├──────────────────────► ┘        ├──► donations / profile / notifications  │
//!    └──► home (logged in)             └──────────────── view cart ──────────────┘
//!
//!                      every "back" button ──► home
//! ```
//!
//! ## Module Structure
//!
//! - **[`app`]**: [`App`] controller, [`AppState`], [`Screen`], [`Cart`], events and handlers
//! - **[`screens`]**: per-screen models (auth form, checkout flow, tracking progress, ...)
//! - **[`core`]**: [`AppError`] and the service traits ([`FlagStore`], [`Clock`], [`Scheduler`])
//! - **[`services`]**: flag stores and timeline schedulers
//! - **[`config`]**: [`AppConfig`]
//! - **[`utils`]**: input validation
//! - **`logging`** (feature `native`): file + stderr `tracing` subscriber
//!
//! ## Features
//!
//! - `native` (default): Tokio scheduler, file-backed flag store, logging setup and the
//!   `feeding-controller` binary. Disable it for `wasm32` builds.
//!
//! [`FlagStore`]: crate::core::service::FlagStore
//! [`Clock`]: crate::core::service::Clock
//! [`Scheduler`]: crate::core::service::Scheduler

pub mod app;
pub mod config;
pub mod core;
pub mod screens;
pub mod services;
pub mod utils;

#[cfg(feature = "native")]
pub mod logging;

pub use app::{App, AppEvent, AppState, BillSummary, Cart, CartChange, DeliveryOption, Screen};
pub use config::AppConfig;
pub use crate::core::error::{AppError, Result};
