//! Route candidates and their construction from routing-service results
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::duration::format_minutes;
use crate::geo::LatLng;
use crate::routing::RouteSummary;
use crate::signal::TrafficSignal;

/// Base score of the first candidate; each later candidate loses `SCORE_STEP`.
const BASE_SCORE: f64 = 95.0;
const SCORE_STEP: f64 = 8.0;
const FALLBACK_SCORE: f64 = 85.0;
/// Number of steps a route card lists before summarising the rest.
pub const PREVIEW_STEPS: usize = 3;

/// Coarse congestion label attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrafficLevel {
    #[default]
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    pub const ALL: [Self; 3] = [Self::Light, Self::Moderate, Self::Heavy];

    /// Initial label for the candidate at `index` in routing-service order.
    #[must_use]
    pub const fn for_rank(index: usize) -> Self {
        match index {
            0 => Self::Light,
            1 => Self::Moderate,
            _ => Self::Heavy,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Heavy => "Heavy",
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Light => "traffic.levels.Light",
            Self::Moderate => "traffic.levels.Moderate",
            Self::Heavy => "traffic.levels.Heavy",
        }
    }

    /// Parse a backend label; unknown labels are rejected.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One path option between origin and destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub name: String,
    pub distance: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_traffic: Option<String>,
    pub steps: Vec<String>,
    pub coordinates: Vec<LatLng>,
    pub traffic_level: TrafficLevel,
    pub score: f64,
    pub index: usize,
}

impl RouteCandidate {
    /// Duration shown to the user: in-traffic when known, else free-flow.
    #[must_use]
    pub fn effective_duration(&self) -> &str {
        self.duration_in_traffic.as_deref().unwrap_or(&self.duration)
    }

    /// Score as shown on cards, e.g. `"87/100"`.
    #[must_use]
    pub fn score_text(&self) -> String {
        score_text(self.score)
    }

    /// The first few steps plus how many were left out.
    #[must_use]
    pub fn step_preview(&self) -> (&[String], usize) {
        let shown = self.steps.len().min(PREVIEW_STEPS);
        (&self.steps[..shown], self.steps.len() - shown)
    }
}

/// Format a score rounded to the nearest whole point, e.g. `"87/100"`.
#[must_use]
pub fn score_text(score: f64) -> String {
    format!("{}/100", score.round())
}

/// Display name for the candidate at `index`.
#[must_use]
pub fn candidate_name(index: usize) -> String {
    if index == 0 {
        "Fastest Route".to_string()
    } else {
        format!("Alternative {index}")
    }
}

/// Metres rendered as kilometres with one decimal, e.g. `"15.2 km"`.
#[must_use]
pub fn format_distance(metres: f64) -> String {
    format!("{:.1} km", metres / 1000.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_minutes(minutes: f64) -> u32 {
    minutes.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Build a candidate from one routing-service result.
#[must_use]
pub fn build_candidate<S: TrafficSignal + ?Sized>(
    index: usize,
    summary: &RouteSummary,
    traffic_factor: f64,
    signal: &mut S,
) -> RouteCandidate {
    let minutes = whole_minutes(summary.total_time_s / 60.0);
    let in_traffic = whole_minutes(f64::from(minutes) * traffic_factor);
    #[allow(clippy::cast_precision_loss)]
    let rank_penalty = SCORE_STEP * index as f64;
    RouteCandidate {
        name: candidate_name(index),
        distance: format_distance(summary.total_distance_m),
        duration: format_minutes(minutes),
        duration_in_traffic: Some(format_minutes(in_traffic)),
        steps: summary.instructions.clone(),
        coordinates: summary.coordinates.clone(),
        traffic_level: TrafficLevel::for_rank(index),
        score: BASE_SCORE - rank_penalty + signal.score_jitter(index),
        index,
    }
}

/// Build the full candidate set in routing-service order.
#[must_use]
pub fn build_candidates<S: TrafficSignal + ?Sized>(
    summaries: &[RouteSummary],
    traffic_factor: f64,
    signal: &mut S,
) -> Vec<RouteCandidate> {
    summaries
        .iter()
        .enumerate()
        .map(|(index, summary)| build_candidate(index, summary, traffic_factor, signal))
        .collect()
}

/// Single hardcoded route shown when the routing service fails.
#[must_use]
pub fn fallback_routes(origin: &str, destination: &str) -> Vec<RouteCandidate> {
    vec![RouteCandidate {
        name: "Main Route".to_string(),
        distance: "15.2 km".to_string(),
        duration: "22 min".to_string(),
        duration_in_traffic: Some("28 min".to_string()),
        steps: vec![
            format!("Start from {origin}"),
            "Follow main roads".to_string(),
            format!("Arrive at {destination}"),
        ],
        coordinates: vec![LatLng::new(12.9716, 77.5946), LatLng::new(12.2958, 76.6394)],
        traffic_level: TrafficLevel::Moderate,
        score: FALLBACK_SCORE,
        index: 0,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::FixedSignal;

    fn summary(distance_m: f64, time_s: f64, steps: &[&str]) -> RouteSummary {
        RouteSummary {
            total_distance_m: distance_m,
            total_time_s: time_s,
            instructions: steps.iter().map(ToString::to_string).collect(),
            coordinates: vec![LatLng::new(12.0, 77.0), LatLng::new(12.1, 77.1)],
        }
    }

    #[test]
    fn candidates_follow_rank_rules() {
        let mut signal = FixedSignal::new(4.0, TrafficLevel::Heavy);
        let summaries = [
            summary(15_234.0, 1_320.0, &["Head north", "Arrive"]),
            summary(17_800.0, 1_500.0, &["Head east"]),
            summary(21_000.0, 1_800.0, &[]),
        ];
        let routes = build_candidates(&summaries, 1.2, &mut signal);
        assert_eq!(routes.len(), 3);

        assert_eq!(routes[0].name, "Fastest Route");
        assert_eq!(routes[0].distance, "15.2 km");
        assert_eq!(routes[0].duration, "22 min");
        assert_eq!(routes[0].duration_in_traffic.as_deref(), Some("26 min"));
        assert_eq!(routes[0].traffic_level, TrafficLevel::Light);
        assert!((routes[0].score - 99.0).abs() < f64::EPSILON);

        assert_eq!(routes[1].name, "Alternative 1");
        assert_eq!(routes[1].duration_in_traffic.as_deref(), Some("30 min"));
        assert_eq!(routes[1].traffic_level, TrafficLevel::Moderate);
        assert!((routes[1].score - 91.0).abs() < f64::EPSILON);

        assert_eq!(routes[2].name, "Alternative 2");
        assert_eq!(routes[2].traffic_level, TrafficLevel::Heavy);
        assert_eq!(routes[2].index, 2);
    }

    #[test]
    fn fallback_route_mentions_endpoints() {
        let routes = fallback_routes("Indiranagar", "Koramangala");
        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.name, "Main Route");
        assert_eq!(route.effective_duration(), "28 min");
        assert_eq!(route.steps.first().map(String::as_str), Some("Start from Indiranagar"));
        assert_eq!(route.steps.last().map(String::as_str), Some("Arrive at Koramangala"));
        assert_eq!(route.score_text(), "85/100");
    }

    #[test]
    fn step_preview_truncates_after_three() {
        let mut route = fallback_routes("A", "B").remove(0);
        route.steps.push("Turn left".into());
        route.steps.push("Turn right".into());
        let (shown, hidden) = route.step_preview();
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn effective_duration_falls_back_to_free_flow() {
        let mut route = fallback_routes("A", "B").remove(0);
        route.duration_in_traffic = None;
        assert_eq!(route.effective_duration(), "22 min");
    }

    #[test]
    fn traffic_level_labels_round_trip() {
        for level in TrafficLevel::ALL {
            assert_eq!(TrafficLevel::from_label(level.label()), Some(level));
        }
        assert_eq!(TrafficLevel::from_label(" heavy "), Some(TrafficLevel::Heavy));
        assert_eq!(TrafficLevel::from_label("Very Heavy"), None);
    }
}
