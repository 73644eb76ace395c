//! Application configuration: service endpoints, timers, and map defaults
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::{DEFAULT_CENTER, LatLng};

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: u64,
        value: u64,
    },
    #[error("traffic factor must be at least 1.0 (got {0:.2})")]
    TrafficFactor(f64),
    #[error("default center ({lat:.4}, {lon:.4}) is outside valid coordinate ranges")]
    InvalidCenter { lat: f64, lon: f64 },
    #[error("config JSON is malformed: {0}")]
    Json(String),
}

/// Runtime configuration shared by the web client and the tester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "AppConfig::default_api_base")]
    pub api_base: String,
    #[serde(default = "AppConfig::default_geocoder_base")]
    pub geocoder_base: String,
    #[serde(default = "AppConfig::default_router_base")]
    pub router_base: String,
    #[serde(default = "AppConfig::default_country_codes")]
    pub country_codes: String,
    #[serde(default = "AppConfig::default_suggestion_limit")]
    pub suggestion_limit: u8,
    #[serde(default = "AppConfig::default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "AppConfig::default_center")]
    pub default_center: LatLng,
    #[serde(default = "AppConfig::default_zoom")]
    pub default_zoom: u8,
    #[serde(default = "AppConfig::default_focus_zoom")]
    pub focus_zoom: u8,
    #[serde(default = "AppConfig::default_recenter_zoom")]
    pub recenter_zoom: u8,
    #[serde(default = "AppConfig::default_traffic_sim_interval_ms")]
    pub traffic_sim_interval_ms: u32,
    #[serde(default = "AppConfig::default_alert_interval_ms")]
    pub alert_interval_ms: u32,
    #[serde(default = "AppConfig::default_traffic_factor")]
    pub traffic_factor: f64,
    #[serde(default = "AppConfig::default_humidity")]
    pub default_humidity: u8,
}

impl AppConfig {
    fn default_api_base() -> String {
        "http://localhost:5001/api".to_string()
    }

    fn default_geocoder_base() -> String {
        "https://nominatim.openstreetmap.org".to_string()
    }

    fn default_router_base() -> String {
        "https://router.project-osrm.org/route/v1/driving".to_string()
    }

    fn default_country_codes() -> String {
        "in".to_string()
    }

    const fn default_suggestion_limit() -> u8 {
        5
    }

    const fn default_min_query_len() -> usize {
        3
    }

    const fn default_center() -> LatLng {
        DEFAULT_CENTER
    }

    const fn default_zoom() -> u8 {
        12
    }

    const fn default_focus_zoom() -> u8 {
        13
    }

    const fn default_recenter_zoom() -> u8 {
        15
    }

    const fn default_traffic_sim_interval_ms() -> u32 {
        15_000
    }

    const fn default_alert_interval_ms() -> u32 {
        30_000
    }

    const fn default_traffic_factor() -> f64 {
        1.2
    }

    const fn default_humidity() -> u8 {
        60
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self {
            api_base: Self::default_api_base(),
            geocoder_base: Self::default_geocoder_base(),
            router_base: Self::default_router_base(),
            country_codes: Self::default_country_codes(),
            suggestion_limit: Self::default_suggestion_limit(),
            min_query_len: Self::default_min_query_len(),
            default_center: Self::default_center(),
            default_zoom: Self::default_zoom(),
            focus_zoom: Self::default_focus_zoom(),
            recenter_zoom: Self::default_recenter_zoom(),
            traffic_sim_interval_ms: Self::default_traffic_sim_interval_ms(),
            alert_interval_ms: Self::default_alert_interval_ms(),
            traffic_factor: Self::default_traffic_factor(),
            default_humidity: Self::default_humidity(),
        }
    }

    /// Parse a configuration document, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Json(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Replace the backend base URL, trimming any trailing slash.
    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Full URL of a backend endpoint such as `predict` or `models`.
    #[must_use]
    pub fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Check configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("api_base", &self.api_base),
            ("geocoder_base", &self.geocoder_base),
            ("router_base", &self.router_base),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        let minimums = [
            ("suggestion_limit", u64::from(self.suggestion_limit), 1),
            (
                "min_query_len",
                u64::try_from(self.min_query_len).unwrap_or(u64::MAX),
                1,
            ),
            (
                "traffic_sim_interval_ms",
                u64::from(self.traffic_sim_interval_ms),
                1,
            ),
            ("alert_interval_ms", u64::from(self.alert_interval_ms), 1),
        ];
        for (field, value, min) in minimums {
            if value < min {
                return Err(ConfigError::MinViolation { field, min, value });
            }
        }
        if self.traffic_factor.is_nan() || self.traffic_factor < 1.0 {
            return Err(ConfigError::TrafficFactor(self.traffic_factor));
        }
        if !self.default_center.is_valid() {
            return Err(ConfigError::InvalidCenter {
                lat: self.default_center.lat,
                lon: self.default_center.lon,
            });
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
