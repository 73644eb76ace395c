//! Smart Traffic Core
//!
//! Platform-agnostic logic for the Smart Traffic route planner: candidate
//! construction and ranking, turn-by-turn stepping, prediction payloads, and
//! the geocoding/routing wire formats. No browser or network code lives here;
//! the web client and the tester drive these types through their own I/O.

pub mod alerts;
pub mod api;
pub mod config;
pub mod duration;
pub mod geo;
pub mod geocode;
pub mod models;
pub mod navigation;
pub mod planner;
pub mod prediction;
pub mod ranking;
pub mod route;
pub mod routing;
pub mod search;
pub mod signal;

// Re-export commonly used types
pub use alerts::{ALERTS_PER_REFRESH, AlertSeverity, NO_INCIDENTS, TrafficAlert};
pub use api::ApiError;
pub use config::{AppConfig, ConfigError};
pub use duration::{format_minutes, parse_minutes, time_saved};
pub use geo::{
    AddressField, DEFAULT_CENTER, FieldCoords, LatLng, LocationTracker, MapView, fallback_coords,
};
pub use geocode::{AddressMatch, should_suggest};
pub use models::{ChartBar, ModelMetrics, ModelsResponse, accuracy_chart};
pub use navigation::{NavigationError, NavigationState, NavigationStepper};
pub use planner::{
    PlannerError, RouteDashboard, RoutePlanner, SearchOutcome, SearchTicket,
};
pub use prediction::{
    LevelBadge, Prediction, PredictionError, PredictionInput, PredictionRequest,
    PredictionResponse,
};
pub use ranking::{RouteBoard, best_index};
pub use route::{RouteCandidate, TrafficLevel, build_candidates, fallback_routes};
pub use routing::{RouteSummary, RoutingError, parse_routes, route_url};
pub use search::{SearchToken, SearchTokens};
pub use signal::{FixedSignal, SimulatedSignal, TrafficSignal};
