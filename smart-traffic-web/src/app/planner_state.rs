//! Reducer wrapping the route planner for the component tree
//!
//! All route-tab interactions become [`PlannerAction`]s. Asynchronous work
//! (routing requests, timers, position fixes) dispatches actions back in, and
//! the planner's search tokens decide whether a late reply still applies.
use std::rc::Rc;

use smart_traffic_core::{
    AddressField, LatLng, MapView, NavigationError, RouteCandidate, RouteDashboard, RouteSummary,
    RoutingError, SearchOutcome, SearchTicket, SearchToken, TrafficAlert,
};
use yew::prelude::*;

use crate::traffic::{WebPlanner, new_planner};

/// User-facing problem raised by the last action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannerNotice {
    MissingEndpoints,
    NoRoutes,
    NoSteps,
}

impl PlannerNotice {
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::MissingEndpoints => "routes.missing",
            Self::NoRoutes => "routes.find_first",
            Self::NoSteps => "routes.no_steps",
        }
    }
}

#[derive(Clone, Debug)]
pub enum PlannerAction {
    Search {
        origin: String,
        destination: String,
    },
    Resolve {
        token: SearchToken,
        result: Result<Vec<RouteSummary>, RoutingError>,
    },
    Select(usize),
    StartNavigation,
    NextStep,
    StopNavigation,
    TickTraffic,
    RefreshAlerts,
    ChooseAddress {
        field: AddressField,
        coords: LatLng,
        current_location: bool,
    },
    ClearAddress(AddressField),
    Position(LatLng),
    Recenter,
}

#[derive(Clone, Debug)]
pub struct PlannerState {
    pub planner: WebPlanner,
    /// Search waiting for its routing reply.
    pub ticket: Option<SearchTicket>,
    pub outcome: Option<SearchOutcome>,
    pub notice: Option<PlannerNotice>,
    pub map_view: MapView,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::with_planner(new_planner())
    }
}

impl PlannerState {
    #[must_use]
    pub fn with_planner(planner: WebPlanner) -> Self {
        let map_view = MapView {
            center: planner.location().initial_center(),
            zoom: planner.config().default_zoom,
        };
        Self {
            planner,
            ticket: None,
            outcome: None,
            notice: None,
            map_view,
        }
    }

    pub fn apply(&mut self, action: PlannerAction) {
        match action {
            PlannerAction::Search {
                origin,
                destination,
            } => match self.planner.begin_search(&origin, &destination) {
                Ok(ticket) => {
                    self.ticket = Some(ticket);
                    self.outcome = None;
                    self.notice = None;
                }
                Err(err) => {
                    log::info!("route search rejected: {err}");
                    self.notice = Some(PlannerNotice::MissingEndpoints);
                }
            },
            PlannerAction::Resolve { token, result } => {
                let outcome = self.planner.resolve_search(token, result);
                if outcome != SearchOutcome::Stale {
                    self.ticket = None;
                    self.outcome = Some(outcome);
                }
            }
            PlannerAction::Select(index) => {
                self.planner.select_route(index);
            }
            PlannerAction::StartNavigation => match self.planner.start_navigation() {
                Ok(_) => self.notice = None,
                Err(err) => {
                    log::warn!("navigation not started: {err}");
                    self.notice = Some(match err {
                        NavigationError::NoRoutes => PlannerNotice::NoRoutes,
                        NavigationError::NoSteps => PlannerNotice::NoSteps,
                    });
                }
            },
            PlannerAction::NextStep => {
                self.planner.next_step();
            }
            PlannerAction::StopNavigation => self.planner.stop_navigation(),
            PlannerAction::TickTraffic => {
                self.planner.tick_live_traffic();
            }
            PlannerAction::RefreshAlerts => self.planner.refresh_alerts(),
            PlannerAction::ChooseAddress {
                field,
                coords,
                current_location,
            } => {
                let view = if current_location {
                    self.planner.choose_current_location(field, coords)
                } else {
                    self.planner.choose_address(field, coords)
                };
                if let Some(view) = view {
                    self.map_view = view;
                }
            }
            PlannerAction::ClearAddress(field) => self.planner.clear_address(field),
            PlannerAction::Position(position) => {
                let first_fix = self.planner.location().user_position().is_none();
                self.planner.record_position(position);
                if first_fix {
                    self.map_view = self.planner.recenter();
                }
            }
            PlannerAction::Recenter => self.map_view = self.planner.recenter(),
        }
    }

    /// Snapshot of everything the route tab renders.
    #[must_use]
    pub fn view(&self) -> RoutesView {
        let board = self.planner.board();
        let (steps, cursor) = self
            .planner
            .navigation_steps()
            .map_or((Vec::new(), 0), |(steps, cursor)| (steps.to_vec(), cursor));
        RoutesView {
            routes: board.routes().to_vec(),
            best_index: board.best_index(),
            selected: board.selected_index(),
            searching: self.ticket.is_some(),
            fallback: self.outcome == Some(SearchOutcome::Fallback),
            dashboard: self.planner.dashboard(),
            navigating: self.planner.stepper().is_active(),
            steps,
            cursor,
            alerts: self.planner.alerts().to_vec(),
            live: self.planner.live_updates(),
            map_view: self.map_view,
            user: self.planner.location().user_position(),
            notice: self.notice,
        }
    }
}

impl Reducible for PlannerState {
    type Action = PlannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Render-ready projection of [`PlannerState`].
#[derive(Clone, Debug, PartialEq)]
pub struct RoutesView {
    pub routes: Vec<RouteCandidate>,
    pub best_index: Option<usize>,
    pub selected: Option<usize>,
    pub searching: bool,
    pub fallback: bool,
    pub dashboard: Option<RouteDashboard>,
    pub navigating: bool,
    pub steps: Vec<String>,
    pub cursor: usize,
    pub alerts: Vec<TrafficAlert>,
    pub live: bool,
    pub map_view: MapView,
    pub user: Option<LatLng>,
    pub notice: Option<PlannerNotice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_traffic_core::{ALERTS_PER_REFRESH, DEFAULT_CENTER};

    fn summary(minutes: f64, steps: usize) -> RouteSummary {
        RouteSummary {
            total_distance_m: 12_000.0,
            total_time_s: minutes * 60.0,
            instructions: (1..=steps).map(|i| format!("Step {i}")).collect(),
            coordinates: vec![DEFAULT_CENTER],
        }
    }

    fn search(state: &mut PlannerState) -> SearchToken {
        state.apply(PlannerAction::Search {
            origin: "Whitefield".into(),
            destination: "MG Road".into(),
        });
        state.ticket.as_ref().map(|t| t.token).expect("ticket issued")
    }

    #[test]
    fn blank_search_raises_notice_without_ticket() {
        let mut state = PlannerState::default();
        state.apply(PlannerAction::Search {
            origin: "  ".into(),
            destination: "MG Road".into(),
        });
        assert!(state.ticket.is_none());
        assert_eq!(state.notice, Some(PlannerNotice::MissingEndpoints));
    }

    #[test]
    fn resolve_clears_ticket_and_starts_live_updates() {
        let mut state = PlannerState::default();
        let token = search(&mut state);
        assert!(state.view().searching);
        state.apply(PlannerAction::Resolve {
            token,
            result: Ok(vec![summary(20.0, 3), summary(26.0, 2)]),
        });
        let view = state.view();
        assert!(!view.searching);
        assert_eq!(view.routes.len(), 2);
        assert!(view.live);
        assert_eq!(view.alerts.len(), ALERTS_PER_REFRESH);
        assert_eq!(state.outcome, Some(SearchOutcome::Applied { routes: 2 }));
    }

    #[test]
    fn stale_reply_keeps_newer_search_pending() {
        let mut state = PlannerState::default();
        let first = search(&mut state);
        let second = search(&mut state);
        state.apply(PlannerAction::Resolve {
            token: first,
            result: Ok(vec![summary(20.0, 1)]),
        });
        assert_eq!(state.ticket.as_ref().map(|t| t.token), Some(second));
        assert!(state.view().routes.is_empty());
    }

    #[test]
    fn routing_failure_shows_fallback() {
        let mut state = PlannerState::default();
        let token = search(&mut state);
        state.apply(PlannerAction::Resolve {
            token,
            result: Err(RoutingError::NoRoute),
        });
        let view = state.view();
        assert!(view.fallback);
        assert_eq!(view.routes[0].name, "Main Route");
    }

    #[test]
    fn navigation_without_routes_raises_notice() {
        let mut state = PlannerState::default();
        state.apply(PlannerAction::StartNavigation);
        assert_eq!(state.notice, Some(PlannerNotice::NoRoutes));
        assert!(!state.view().navigating);
    }

    #[test]
    fn route_without_steps_raises_its_own_notice() {
        let mut state = PlannerState::default();
        let token = search(&mut state);
        state.apply(PlannerAction::Resolve {
            token,
            result: Ok(vec![summary(20.0, 0)]),
        });
        state.apply(PlannerAction::StartNavigation);
        assert_eq!(state.notice, Some(PlannerNotice::NoSteps));
        assert!(!state.view().navigating);
    }

    #[test]
    fn picking_another_route_restarts_guidance() {
        let mut state = PlannerState::default();
        let token = search(&mut state);
        state.apply(PlannerAction::Resolve {
            token,
            result: Ok(vec![summary(20.0, 2), summary(26.0, 5)]),
        });
        state.apply(PlannerAction::Select(1));
        state.apply(PlannerAction::StartNavigation);
        for _ in 0..4 {
            state.apply(PlannerAction::NextStep);
        }
        assert_eq!(state.view().cursor, 4);
        state.apply(PlannerAction::Select(0));
        let view = state.view();
        assert!(view.navigating);
        assert_eq!(view.steps.len(), 2);
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn navigation_steps_follow_cursor() {
        let mut state = PlannerState::default();
        let token = search(&mut state);
        state.apply(PlannerAction::Resolve {
            token,
            result: Ok(vec![summary(20.0, 3)]),
        });
        state.apply(PlannerAction::StartNavigation);
        state.apply(PlannerAction::NextStep);
        let view = state.view();
        assert!(view.navigating);
        assert_eq!(view.steps.len(), 3);
        assert_eq!(view.cursor, 1);
        state.apply(PlannerAction::StopNavigation);
        assert!(!state.view().navigating);
    }

    #[test]
    fn first_position_fix_moves_map() {
        let mut state = PlannerState::default();
        assert_eq!(state.map_view.center, DEFAULT_CENTER);
        let here = LatLng::new(12.2958, 76.6394);
        state.apply(PlannerAction::Position(here));
        assert_eq!(state.map_view.center, here);
        let view = state.map_view;
        state.apply(PlannerAction::Position(LatLng::new(12.3, 76.64)));
        assert_eq!(state.map_view, view);
    }

    #[test]
    fn choosing_origin_focuses_map_but_prediction_fields_do_not() {
        let mut state = PlannerState::default();
        let spot = LatLng::new(13.0827, 80.2707);
        state.apply(PlannerAction::ChooseAddress {
            field: AddressField::PredOrigin,
            coords: spot,
            current_location: false,
        });
        assert_eq!(state.map_view.center, DEFAULT_CENTER);
        state.apply(PlannerAction::ChooseAddress {
            field: AddressField::Origin,
            coords: spot,
            current_location: false,
        });
        assert_eq!(state.map_view.center, spot);
        assert_eq!(state.map_view.zoom, state.planner.config().focus_zoom);
    }
}
