//! # Native Logging
//!
//! File-based logging for the headless host:
//! - daily-rotated log file under `logs/` (non-blocking writes)
//! - compact stderr output
//! - filter from `RUST_LOG`, default `feeding_controller=info,warn`
//! - panic hook that routes panics through `tracing::error!`

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "feeding_controller=info,warn";
const LOG_FILE_NAME: &str = "feeding-controller.log";

/// Logging configuration from environment variables
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for rotated log files
    pub log_dir: PathBuf,
    /// Filter directive (e.g., "feeding_controller=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_FILTER.to_string(),
            stderr: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    ///
    /// - `FEEDING_LOG_DIR`: log directory (default `logs`)
    /// - `RUST_LOG`: filter directive
    /// - `FEEDING_LOG_STDERR`: `0` disables stderr output
    pub fn from_env() -> Self {
        Self {
            log_dir: std::env::var("FEEDING_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
            stderr: std::env::var("FEEDING_LOG_STDERR")
                .map(|v| v != "0")
                .unwrap_or(true),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

/// Initialize the logging system.
///
/// Returns the file writer guard; keep it alive for the lifetime of the program or
/// buffered lines are lost. Returns `None` when the log directory cannot be created,
/// in which case only stderr logging is installed.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let guard = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(stderr_layer(config.stderr))
                .init();
            Some(guard)
        }
        Err(e) => {
            eprintln!("Warning: Failed to create log directory: {}", e);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer(config.stderr))
                .init();
            None
        }
    };

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        file_logging = guard.is_some(),
        "Logging initialized"
    );

    setup_panic_hook();
    guard
}

/// Compact stderr layer, typed for whichever subscriber stack it joins
fn stderr_layer<S>(enabled: bool) -> Option<impl Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    enabled.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    })
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());

        tracing::error!(location = %location, message = %message, "PANIC");

        default_panic(panic_info);
    }));
}
