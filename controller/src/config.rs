//! Controller configuration: fees, order ids, timeline offsets, flag file location

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::Rupees;

use crate::core::error::{AppError, Result};

/// Tunable constants of the controller.
///
/// Every field has a default, so a config file only needs the keys it overrides:
///
/// ```json
/// { "delivery_fee": 39, "order_id_prefix": "FX" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Flat fee when the delivery option is "delivery"
    pub delivery_fee: Rupees,
    /// Donation presets offered at checkout
    pub donation_presets: Vec<Rupees>,
    pub order_id_prefix: String,
    /// Trailing timestamp digits in an order id
    pub order_id_digits: u32,
    /// Splash display time before the fade starts
    pub splash_fade_ms: u64,
    /// Fade duration before the splash hands over
    pub splash_exit_ms: u64,
    /// Offsets at which tracking reaches steps 2, 3 and 4
    pub tracking_step_offsets_ms: Vec<u64>,
    pub initial_eta_minutes: u32,
    /// Interval between ETA decrements
    pub eta_tick_ms: u64,
    /// `FileFlagStore` location
    pub flags_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            delivery_fee: 29,
            donation_presets: vec![10, 25, 50, 100],
            order_id_prefix: "FF".to_string(),
            order_id_digits: 6,
            splash_fade_ms: 2500,
            splash_exit_ms: 300,
            tracking_step_offsets_ms: vec![2000, 8000, 15000],
            initial_eta_minutes: 25,
            eta_tick_ms: 60_000,
            flags_path: PathBuf::from("./feeding-flags.json"),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load a config file, falling back to defaults when it is missing or malformed
    pub fn load(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `FEEDING_CONFIG`: JSON config file
    /// - `FEEDING_FLAGS_PATH`: overrides `flags_path`
    pub fn from_env() -> Self {
        let mut config = match std::env::var("FEEDING_CONFIG") {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Self::default(),
        };
        if let Ok(path) = std::env::var("FEEDING_FLAGS_PATH") {
            config.flags_path = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "delivery_fee": 39, "order_id_prefix": "FX" }}"#).unwrap();

        let config = AppConfig::load(file.path());
        assert_eq!(config.delivery_fee, 39);
        assert_eq!(config.order_id_prefix, "FX");
        assert_eq!(config.order_id_digits, 6);
        assert_eq!(config.tracking_step_offsets_ms, vec![2000, 8000, 15000]);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            AppConfig::load_from_file(file.path()),
            Err(AppError::Config(_))
        ));
        assert_eq!(AppConfig::load(file.path()), AppConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.json"));
        assert_eq!(config, AppConfig::default());
    }
}
