//! Route planner: the single owner of search, selection, and navigation state
//!
//! Every UI callback goes through a [`RoutePlanner`] method; responses carry
//! the [`SearchToken`] they were issued with so late arrivals are dropped.
use thiserror::Error;

use crate::alerts::TrafficAlert;
use crate::config::AppConfig;
use crate::duration::{format_minutes, time_saved};
use crate::geo::{AddressField, FieldCoords, LatLng, LocationTracker, MapView};
use crate::navigation::{NavigationError, NavigationStepper};
use crate::ranking::RouteBoard;
use crate::route::{RouteCandidate, TrafficLevel, build_candidates, fallback_routes};
use crate::routing::{RouteSummary, RoutingError};
use crate::search::{SearchToken, SearchTokens};
use crate::signal::TrafficSignal;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Please enter both origin and destination")]
    MissingEndpoints,
}

/// Everything a platform needs to run one route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub token: SearchToken,
    pub origin: String,
    pub destination: String,
    /// Coordinates already chosen from suggestions, if any.
    pub origin_coords: Option<LatLng>,
    pub destination_coords: Option<LatLng>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Routing results replaced the candidate set.
    Applied { routes: usize },
    /// Routing failed; the hardcoded fallback route is shown.
    Fallback,
    /// A newer search superseded this response; nothing changed.
    Stale,
}

/// Summary figures shown above the route cards.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDashboard {
    pub total_routes: usize,
    pub best_index: usize,
    pub best_name: String,
    pub best_score_text: String,
    pub time_saved_minutes: u32,
    pub traffic_level: TrafficLevel,
}

impl RouteDashboard {
    #[must_use]
    pub fn time_saved_text(&self) -> String {
        format_minutes(self.time_saved_minutes)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PendingSearch {
    token: SearchToken,
    origin: String,
    destination: String,
}

#[derive(Debug, Clone)]
pub struct RoutePlanner<S> {
    config: AppConfig,
    board: RouteBoard,
    stepper: NavigationStepper,
    tokens: SearchTokens,
    pending: Option<PendingSearch>,
    fields: FieldCoords,
    location: LocationTracker,
    alerts: Vec<TrafficAlert>,
    live_level: Option<TrafficLevel>,
    live_updates: bool,
    signal: S,
}

impl<S: TrafficSignal> RoutePlanner<S> {
    #[must_use]
    pub fn new(config: AppConfig, signal: S) -> Self {
        let location =
            LocationTracker::new(config.default_center, config.default_zoom, config.recenter_zoom);
        Self {
            config,
            board: RouteBoard::default(),
            stepper: NavigationStepper::new(),
            tokens: SearchTokens::new(),
            pending: None,
            fields: FieldCoords::default(),
            location,
            alerts: Vec::new(),
            live_level: None,
            live_updates: false,
            signal,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn board(&self) -> &RouteBoard {
        &self.board
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteCandidate] {
        self.board.routes()
    }

    #[must_use]
    pub const fn stepper(&self) -> &NavigationStepper {
        &self.stepper
    }

    #[must_use]
    pub const fn location(&self) -> &LocationTracker {
        &self.location
    }

    #[must_use]
    pub fn alerts(&self) -> &[TrafficAlert] {
        &self.alerts
    }

    /// True once a search has completed and periodic updates should run.
    #[must_use]
    pub const fn live_updates(&self) -> bool {
        self.live_updates
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn field_coords(&self, field: AddressField) -> Option<LatLng> {
        self.fields.get(field)
    }

    /// Start a new route search, superseding any in flight.
    ///
    /// Clears the candidate set and selection and stops navigation.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::MissingEndpoints`] when either address is blank;
    /// state is untouched in that case.
    pub fn begin_search(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> Result<SearchTicket, PlannerError> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(PlannerError::MissingEndpoints);
        }
        let token = self.tokens.issue();
        log::debug!("route search {} started: {origin} -> {destination}", token.value());
        self.board.clear();
        self.stepper.stop();
        self.live_level = None;
        self.pending = Some(PendingSearch {
            token,
            origin: origin.to_string(),
            destination: destination.to_string(),
        });
        Ok(SearchTicket {
            token,
            origin: origin.to_string(),
            destination: destination.to_string(),
            origin_coords: self.fields.get(AddressField::Origin),
            destination_coords: self.fields.get(AddressField::Destination),
        })
    }

    /// Apply the routing result for `token`.
    pub fn resolve_search(
        &mut self,
        token: SearchToken,
        result: Result<Vec<RouteSummary>, RoutingError>,
    ) -> SearchOutcome {
        let pending = match self.pending.take() {
            Some(pending) if pending.token == token && self.tokens.is_current(token) => pending,
            other => {
                self.pending = other;
                log::debug!("discarding stale route response {}", token.value());
                return SearchOutcome::Stale;
            }
        };

        let candidates = match result {
            Ok(summaries) if !summaries.is_empty() => {
                build_candidates(&summaries, self.config.traffic_factor, &mut self.signal)
            }
            Ok(_) => {
                log::warn!("routing returned no routes; using fallback route");
                Vec::new()
            }
            Err(err) => {
                log::warn!("routing failed ({err}); using fallback route");
                Vec::new()
            }
        };

        let outcome = if candidates.is_empty() {
            self.board
                .replace(fallback_routes(&pending.origin, &pending.destination));
            SearchOutcome::Fallback
        } else {
            let routes = candidates.len();
            self.board.replace(candidates);
            SearchOutcome::Applied { routes }
        };
        self.live_updates = true;
        self.refresh_alerts();
        outcome
    }

    /// Override the best route with the user's pick. Out-of-range is ignored.
    ///
    /// Picking another route while navigating restarts guidance on it from
    /// the first instruction and drops the live label of the old route.
    pub fn select_route(&mut self, index: usize) -> bool {
        let previous = self.board.selected_index();
        if !self.board.select(index) {
            return false;
        }
        if previous != Some(index) && self.stepper.is_active() {
            let steps = self.board.selected().map_or(0, |route| route.steps.len());
            self.stepper.switch_route(steps);
            self.live_level = None;
        }
        true
    }

    #[must_use]
    pub fn best_route(&self) -> Option<&RouteCandidate> {
        self.board.best()
    }

    #[must_use]
    pub fn selected_route(&self) -> Option<&RouteCandidate> {
        self.board.selected()
    }

    /// Figures for the dashboard, or `None` before any routes exist.
    #[must_use]
    pub fn dashboard(&self) -> Option<RouteDashboard> {
        let best_index = self.board.best_index()?;
        let best = self.board.routes().get(best_index)?;
        Some(RouteDashboard {
            total_routes: self.board.len(),
            best_index,
            best_name: best.name.clone(),
            best_score_text: best.score_text(),
            time_saved_minutes: time_saved(self.board.routes()),
            traffic_level: self.live_level.unwrap_or(best.traffic_level),
        })
    }

    /// # Errors
    ///
    /// Returns [`NavigationError::NoRoutes`] when there is nothing to navigate
    /// and [`NavigationError::NoSteps`] when the route has no instructions.
    pub fn start_navigation(&mut self) -> Result<usize, NavigationError> {
        let index = self.stepper.start(&mut self.board)?;
        self.live_level = None;
        Ok(index)
    }

    pub fn next_step(&mut self) -> bool {
        let steps = self.board.selected().map_or(0, |route| route.steps.len());
        self.stepper.advance(steps)
    }

    /// End guidance; the dashboard falls back to the best route's label.
    pub fn stop_navigation(&mut self) {
        self.stepper.stop();
        self.live_level = None;
    }

    /// Instructions of the route being navigated with the active index.
    #[must_use]
    pub fn navigation_steps(&self) -> Option<(&[String], usize)> {
        if !self.stepper.is_active() {
            return None;
        }
        self.board
            .selected()
            .map(|route| (route.steps.as_slice(), self.stepper.cursor()))
    }

    /// Relabel the navigated route from the traffic signal.
    pub fn tick_live_traffic(&mut self) -> Option<TrafficLevel> {
        if !self.stepper.is_active() {
            return None;
        }
        let route = self.board.selected_mut()?;
        let level = self.signal.live_level();
        route.traffic_level = level;
        self.live_level = Some(level);
        Some(level)
    }

    pub fn refresh_alerts(&mut self) {
        if self.live_updates {
            self.alerts = self.signal.alerts();
        }
    }

    /// Remember a suggestion the user picked; returns the view to focus, if any.
    pub fn choose_address(&mut self, field: AddressField, coords: LatLng) -> Option<MapView> {
        self.fields.set(field, coords);
        field.focuses_map().then_some(MapView {
            center: coords,
            zoom: self.config.focus_zoom,
        })
    }

    /// Like [`Self::choose_address`] for the device position, also updating the tracker.
    pub fn choose_current_location(
        &mut self,
        field: AddressField,
        coords: LatLng,
    ) -> Option<MapView> {
        self.location.update(coords);
        self.fields.set(field, coords);
        field.focuses_map().then_some(MapView {
            center: coords,
            zoom: self.config.recenter_zoom,
        })
    }

    /// Forget the coordinate of a field whose text the user edited.
    pub fn clear_address(&mut self, field: AddressField) {
        self.fields.clear(field);
    }

    pub fn record_position(&mut self, position: LatLng) {
        self.location.update(position);
        if self.stepper.is_active() && self.board.selected().is_some() {
            log::debug!(
                "navigation progress at ({:.5}, {:.5}), step {}",
                position.lat,
                position.lon,
                self.stepper.cursor()
            );
        }
    }

    #[must_use]
    pub fn recenter(&self) -> MapView {
        self.location.recenter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationState;
    use crate::signal::FixedSignal;

    fn planner() -> RoutePlanner<FixedSignal> {
        RoutePlanner::new(
            AppConfig::default_config(),
            FixedSignal::new(0.0, TrafficLevel::Heavy),
        )
    }

    fn summary(minutes: f64, steps: usize) -> RouteSummary {
        RouteSummary {
            total_distance_m: minutes * 700.0,
            total_time_s: minutes * 60.0,
            instructions: (0..steps).map(|i| format!("Step {i}")).collect(),
            coordinates: Vec::new(),
        }
    }

    #[test]
    fn blank_search_is_rejected_without_side_effects() {
        let mut p = planner();
        let ticket = p.begin_search("A", "B").expect("valid");
        p.resolve_search(ticket.token, Ok(vec![summary(20.0, 3)]));
        assert_eq!(p.begin_search(" ", "B"), Err(PlannerError::MissingEndpoints));
        assert_eq!(p.routes().len(), 1);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut p = planner();
        let first = p.begin_search("A", "B").expect("valid");
        let second = p.begin_search("C", "D").expect("valid");

        let outcome = p.resolve_search(second.token, Ok(vec![summary(20.0, 2)]));
        assert_eq!(outcome, SearchOutcome::Applied { routes: 1 });

        let outcome = p.resolve_search(first.token, Ok(vec![summary(10.0, 2), summary(12.0, 2)]));
        assert_eq!(outcome, SearchOutcome::Stale);
        assert_eq!(p.routes().len(), 1);
        assert_eq!(p.routes()[0].duration, "20 min");
    }

    #[test]
    fn stale_response_does_not_cancel_pending_search() {
        let mut p = planner();
        let first = p.begin_search("A", "B").expect("valid");
        let second = p.begin_search("C", "D").expect("valid");
        assert_eq!(
            p.resolve_search(first.token, Err(RoutingError::NoRoute)),
            SearchOutcome::Stale
        );
        assert!(p.is_searching());
        assert_eq!(
            p.resolve_search(second.token, Err(RoutingError::NoRoute)),
            SearchOutcome::Fallback
        );
        assert_eq!(p.routes()[0].steps[0], "Start from C");
        assert_eq!(
            p.resolve_search(second.token, Ok(vec![summary(5.0, 1)])),
            SearchOutcome::Stale
        );
    }

    #[test]
    fn dashboard_reports_best_and_time_saved() {
        let mut p = planner();
        let ticket = p.begin_search("A", "B").expect("valid");
        p.resolve_search(
            ticket.token,
            Ok(vec![summary(20.0, 3), summary(25.0, 3), summary(30.0, 3)]),
        );
        let dash = p.dashboard().expect("routes exist");
        assert_eq!(dash.total_routes, 3);
        assert_eq!(dash.best_index, 0);
        assert_eq!(dash.best_name, "Fastest Route");
        assert_eq!(dash.best_score_text, "95/100");
        // in-traffic: 24, 30, 36
        assert_eq!(dash.time_saved_minutes, 12);
        assert_eq!(dash.time_saved_text(), "12 min");
        assert_eq!(dash.traffic_level, TrafficLevel::Light);
    }

    #[test]
    fn new_search_resets_selection_and_navigation() {
        let mut p = planner();
        let ticket = p.begin_search("A", "B").expect("valid");
        p.resolve_search(ticket.token, Ok(vec![summary(20.0, 3), summary(25.0, 3)]));
        assert!(p.select_route(1));
        p.start_navigation().expect("routes");
        p.next_step();

        p.begin_search("A", "C").expect("valid");
        assert!(p.routes().is_empty());
        assert_eq!(p.selected_route(), None);
        assert_eq!(p.stepper().state(), NavigationState::Inactive);
        assert_eq!(p.stepper().cursor(), 0);
    }

    #[test]
    fn navigation_without_routes_is_rejected() {
        let mut p = planner();
        assert_eq!(p.start_navigation(), Err(NavigationError::NoRoutes));
        assert!(!p.stepper().is_active());
        assert_eq!(p.navigation_steps(), None);
    }

    #[test]
    fn live_traffic_only_relabels_navigated_route() {
        let mut p = planner();
        let ticket = p.begin_search("A", "B").expect("valid");
        p.resolve_search(ticket.token, Ok(vec![summary(20.0, 3), summary(25.0, 3)]));
        assert_eq!(p.tick_live_traffic(), None);

        p.select_route(1);
        p.start_navigation().expect("routes");
        assert_eq!(p.tick_live_traffic(), Some(TrafficLevel::Heavy));
        assert_eq!(p.routes()[1].traffic_level, TrafficLevel::Heavy);
        assert_eq!(p.routes()[0].traffic_level, TrafficLevel::Light);
        assert_eq!(
            p.dashboard().map(|d| d.traffic_level),
            Some(TrafficLevel::Heavy)
        );
    }

    #[test]
    fn stepping_follows_selected_route() {
        let mut p = planner();
        let ticket = p.begin_search("A", "B").expect("valid");
        p.resolve_search(ticket.token, Ok(vec![summary(20.0, 2), summary(25.0, 4)]));
        p.select_route(1);
        p.start_navigation().expect("routes");
        for _ in 0..5 {
            p.next_step();
        }
        let (steps, cursor) = p.navigation_steps().expect("active");
        assert_eq!(steps.len(), 4);
        assert_eq!(cursor, 3);
        p.stop_navigation();
        assert_eq!(p.stepper().cursor(), 0);
    }

    #[test]
    fn reselecting_during_navigation_keeps_cursor_in_range() {
        let mut p = planner();
        let ticket = p.begin_search("A", "B").expect("valid");
        p.resolve_search(ticket.token, Ok(vec![summary(20.0, 2), summary(25.0, 5)]));
        p.select_route(1);
        p.start_navigation().expect("routes");
        for _ in 0..4 {
            p.next_step();
        }
        assert_eq!(p.navigation_steps().map(|(_, cursor)| cursor), Some(4));

        assert!(p.select_route(0));
        let (steps, cursor) = p.navigation_steps().expect("still navigating");
        assert_eq!(steps.len(), 2);
        assert_eq!(cursor, 0);
        assert!(p.next_step());
        assert!(!p.next_step());
        assert_eq!(p.stepper().cursor(), 1);
    }

    #[test]
    fn reselecting_current_route_keeps_progress() {
        let mut p = planner();
        let ticket = p.begin_search("A", "B").expect("valid");
        p.resolve_search(ticket.token, Ok(vec![summary(20.0, 3)]));
        p.start_navigation().expect("routes");
        p.next_step();
        assert!(p.select_route(0));
        assert_eq!(p.stepper().cursor(), 1);
        assert!(!p.select_route(7));
        assert_eq!(p.stepper().cursor(), 1);
    }

    #[test]
    fn switching_to_route_without_steps_ends_navigation() {
        let mut p = planner();
        let ticket = p.begin_search("A", "B").expect("valid");
        p.resolve_search(ticket.token, Ok(vec![summary(20.0, 3), summary(25.0, 0)]));
        p.start_navigation().expect("routes");
        p.next_step();
        assert!(p.select_route(1));
        assert!(!p.stepper().is_active());
        assert_eq!(p.navigation_steps(), None);
        assert_eq!(p.start_navigation(), Err(NavigationError::NoSteps));
        assert_eq!(p.selected_route().map(|r| r.index), Some(1));
    }

    #[test]
    fn live_label_is_dropped_when_guidance_ends_or_moves() {
        let mut p = planner();
        let ticket = p.begin_search("A", "B").expect("valid");
        p.resolve_search(ticket.token, Ok(vec![summary(20.0, 3), summary(25.0, 3)]));
        let level = |p: &RoutePlanner<FixedSignal>| p.dashboard().map(|d| d.traffic_level);

        p.select_route(1);
        p.start_navigation().expect("routes");
        p.tick_live_traffic();
        assert_eq!(level(&p), Some(TrafficLevel::Heavy));
        p.stop_navigation();
        assert_eq!(level(&p), Some(TrafficLevel::Light));

        p.start_navigation().expect("routes");
        p.tick_live_traffic();
        assert_eq!(level(&p), Some(TrafficLevel::Heavy));
        p.select_route(0);
        assert!(p.stepper().is_active());
        assert_eq!(level(&p), Some(TrafficLevel::Light));
    }

    #[test]
    fn address_choices_focus_only_route_fields() {
        let mut p = planner();
        let here = LatLng::new(12.93, 77.62);
        assert_eq!(
            p.choose_address(AddressField::Origin, here),
            Some(MapView {
                center: here,
                zoom: 13
            })
        );
        assert_eq!(p.choose_address(AddressField::PredOrigin, here), None);
        let ticket = p.begin_search("Koramangala", "MG Road").expect("valid");
        assert_eq!(ticket.origin_coords, Some(here));
        assert_eq!(ticket.destination_coords, None);

        let view = p.choose_current_location(AddressField::Destination, here);
        assert_eq!(view.map(|v| v.zoom), Some(15));
        assert_eq!(p.recenter().center, here);
        p.clear_address(AddressField::Origin);
        assert_eq!(p.field_coords(AddressField::Origin), None);
    }
}
