//! Traffic prediction requests, responses, and their display values
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::ApiError;
use crate::config::AppConfig;
use crate::route::TrafficLevel;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PredictionError {
    #[error("Please enter both source and destination locations to get traffic predictions")]
    MissingEndpoints,
}

/// Raw values from the prediction form.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionInput {
    pub origin: String,
    pub destination: String,
    pub hour: u8,
    /// Monday = 0 … Sunday = 6.
    pub day_of_week: u8,
    pub rain_intensity: f64,
    pub temperature: i32,
    pub avg_speed: u32,
    pub event: bool,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            hour: 8,
            day_of_week: 0,
            rain_intensity: 0.0,
            temperature: 25,
            avg_speed: 35,
            event: false,
        }
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub origin: String,
    pub destination: String,
    pub hour: u8,
    pub day_of_week: u8,
    pub is_weekend: u8,
    pub rain_intensity: f64,
    pub temperature: i32,
    pub humidity: u8,
    pub event_flag: u8,
    pub rush_hour: u8,
    pub avg_speed: u32,
}

#[must_use]
pub const fn is_weekend(day_of_week: u8) -> bool {
    day_of_week >= 5
}

#[must_use]
pub const fn is_rush_hour(hour: u8) -> bool {
    matches!(hour, 7..=9 | 17..=19)
}

impl PredictionInput {
    /// Validate the form and derive the request body.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::MissingEndpoints`] when origin or destination
    /// is blank.
    pub fn to_request(&self, cfg: &AppConfig) -> Result<PredictionRequest, PredictionError> {
        let origin = self.origin.trim();
        let destination = self.destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(PredictionError::MissingEndpoints);
        }
        Ok(PredictionRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            hour: self.hour,
            day_of_week: self.day_of_week,
            is_weekend: u8::from(is_weekend(self.day_of_week)),
            rain_intensity: self.rain_intensity,
            temperature: self.temperature,
            humidity: cfg.default_humidity,
            event_flag: u8::from(self.event),
            rush_hour: u8::from(is_rush_hour(self.hour)),
            avg_speed: self.avg_speed,
        })
    }
}

/// Badge describing the predicted congestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBadge {
    pub level: String,
    #[serde(default)]
    pub icon: String,
    pub color: String,
}

impl LevelBadge {
    /// Badge text such as `"Moderate Traffic"`, prefixed by the icon when present.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {} Traffic", self.icon, self.level)
            .trim()
            .to_string()
    }

    #[must_use]
    pub fn traffic_level(&self) -> Option<TrafficLevel> {
        TrafficLevel::from_label(&self.level)
    }
}

/// Body returned by `POST /predict`, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub predicted_traffic: Option<f64>,
    #[serde(default)]
    pub route_score: Option<f64>,
    #[serde(default)]
    pub traffic_level: Option<LevelBadge>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub predicted_traffic: f64,
    pub route_score: f64,
    pub traffic_level: LevelBadge,
    pub recommendations: Vec<String>,
}

impl PredictionResponse {
    /// Split into a prediction or the backend's error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Backend`] for `success: false` and
    /// [`ApiError::Decode`] when a success body lacks required fields.
    pub fn into_prediction(self) -> Result<Prediction, ApiError> {
        if !self.success {
            return Err(ApiError::from_backend(self.error));
        }
        let missing = |field: &str| ApiError::Decode(format!("missing field `{field}`"));
        Ok(Prediction {
            predicted_traffic: self
                .predicted_traffic
                .ok_or_else(|| missing("predicted_traffic"))?,
            route_score: self.route_score.ok_or_else(|| missing("route_score"))?,
            traffic_level: self.traffic_level.ok_or_else(|| missing("traffic_level"))?,
            recommendations: self.recommendations,
        })
    }
}

/// Format a number without a trailing `.0` for whole values.
#[must_use]
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

impl Prediction {
    /// Vehicles per hour, truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn traffic_value(&self) -> i64 {
        self.predicted_traffic.trunc() as i64
    }

    /// Score as displayed, e.g. `"77/100"`.
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("{}/100", format_plain(self.route_score))
    }

    #[must_use]
    pub fn route_heading(origin: &str, destination: &str) -> String {
        format!("Route: {origin} → {destination}")
    }
}

/// Label for the hour slider, e.g. `"8:00"`.
#[must_use]
pub fn hour_label(hour: u8) -> String {
    format!("{hour}:00")
}

/// Label for the rain slider, one decimal.
#[must_use]
pub fn rain_label(rain: f64) -> String {
    format!("{rain:.1}")
}

#[must_use]
pub fn temperature_label(celsius: i32) -> String {
    format!("{celsius}°C")
}

#[must_use]
pub fn speed_label(kmh: u32) -> String {
    format!("{kmh} km/h")
}

/// Descriptive label for the route-planner rain slider.
#[must_use]
pub fn rain_descriptor(rain: f64) -> &'static str {
    if rain <= 0.0 {
        "No Rain"
    } else if rain <= 0.3 {
        "Light Rain"
    } else if rain <= 0.7 {
        "Moderate Rain"
    } else {
        "Heavy Rain"
    }
}
