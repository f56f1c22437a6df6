//! Browser implementations of the controller's service traits

pub mod clock;
pub mod config;
pub mod scheduler;
pub mod storage;

pub use clock::BrowserClock;
pub use config::load_config;
pub use scheduler::GlooScheduler;
pub use storage::{open_flag_store, LocalStorageFlagStore};
