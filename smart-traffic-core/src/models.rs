//! Model-metadata endpoint types and the accuracy chart series
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Bar colours, cycled when there are more models than entries.
pub const CHART_PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];
/// Upper bound of the accuracy axis, in percent.
pub const CHART_MAX: f64 = 100.0;

/// Evaluation metrics of one trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub name: String,
    pub mae: f64,
    pub rmse: f64,
    pub r2: f64,
    pub accuracy: f64,
}

impl ModelMetrics {
    #[must_use]
    pub fn accuracy_text(&self) -> String {
        format!("{}%", self.accuracy)
    }
}

/// Body returned by `GET /models`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub success: bool,
    #[serde(default)]
    pub models: Vec<ModelMetrics>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ModelsResponse {
    /// # Errors
    ///
    /// Returns [`ApiError::Backend`] when the backend reports failure.
    pub fn into_models(self) -> Result<Vec<ModelMetrics>, ApiError> {
        if self.success {
            Ok(self.models)
        } else {
            Err(ApiError::Backend(
                self.error
                    .unwrap_or_else(|| "Model metadata unavailable".to_string()),
            ))
        }
    }
}

/// One bar of the accuracy chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    /// Bar height as a fraction of the axis, clamped to `[0, 1]`.
    pub fill: f64,
}

#[must_use]
pub fn accuracy_chart(models: &[ModelMetrics]) -> Vec<ChartBar> {
    models
        .iter()
        .zip(CHART_PALETTE.iter().cycle())
        .map(|(model, color)| ChartBar {
            label: model.name.clone(),
            value: model.accuracy,
            color: *color,
            fill: (model.accuracy / CHART_MAX).clamp(0.0, 1.0),
        })
        .collect()
}
