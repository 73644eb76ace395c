//! Live traffic alert catalog
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Light,
    Moderate,
    Severe,
}

impl AlertSeverity {
    /// CSS modifier used by the alert list.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficAlert {
    pub severity: AlertSeverity,
    pub message: String,
}

/// Alerts shown per refresh.
pub const ALERTS_PER_REFRESH: usize = 2;

/// Placeholder shown when a refresh yields no alerts.
pub const NO_INCIDENTS: &str = "No traffic incidents reported";

const CATALOG: [(AlertSeverity, &str); 3] = [
    (
        AlertSeverity::Moderate,
        "Moderate traffic on Main Street - 5 min delay",
    ),
    (
        AlertSeverity::Light,
        "Construction ahead on Highway 101 - Right lane closed",
    ),
    (
        AlertSeverity::Severe,
        "Accident reported on Ring Road - Consider alternate route",
    ),
];

/// All known alerts in catalog order.
#[must_use]
pub fn catalog() -> Vec<TrafficAlert> {
    CATALOG
        .iter()
        .map(|(severity, message)| TrafficAlert {
            severity: *severity,
            message: (*message).to_string(),
        })
        .collect()
}
