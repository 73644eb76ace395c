use smart_traffic_core::{
    AppConfig, FixedSignal, NavigationError, NavigationState, RouteCandidate, RoutePlanner,
    RoutingError, SearchOutcome, SimulatedSignal, TrafficLevel, best_index, fallback_routes,
    parse_routes, time_saved,
};

const OSRM_BODY: &str = r#"{
    "code": "Ok",
    "routes": [
        {
            "distance": 15234.5,
            "duration": 1320.0,
            "geometry": { "type": "LineString", "coordinates": [[77.5946, 12.9716], [77.6101, 12.9352]] },
            "legs": [{ "steps": [
                { "name": "MG Road", "maneuver": { "type": "depart", "bearing_after": 180 } },
                { "name": "Hosur Road", "maneuver": { "type": "turn", "modifier": "right" } },
                { "name": "", "maneuver": { "type": "arrive" } }
            ]}]
        },
        {
            "distance": 18100.0,
            "duration": 1680.0,
            "legs": [{ "steps": [
                { "name": "Residency Road", "maneuver": { "type": "depart", "bearing_after": 90 } },
                { "name": "", "maneuver": { "type": "arrive" } }
            ]}]
        }
    ]
}"#;

fn with_durations(durations: &[&str]) -> Vec<RouteCandidate> {
    durations
        .iter()
        .enumerate()
        .map(|(idx, duration)| {
            let mut route = fallback_routes("A", "B").remove(0);
            route.index = idx;
            route.duration_in_traffic = Some((*duration).to_string());
            route
        })
        .collect()
}

#[test]
fn best_route_is_first_strict_maximum_for_random_sets() {
    for seed in 0..64 {
        let mut planner = RoutePlanner::new(
            AppConfig::default_config(),
            SimulatedSignal::from_seed(seed),
        );
        let ticket = planner.begin_search("Indiranagar", "Koramangala").unwrap();
        let summaries = parse_routes(OSRM_BODY).unwrap();
        planner.resolve_search(ticket.token, Ok(summaries));

        let routes = planner.routes();
        let best = best_index(routes).unwrap();
        for (idx, route) in routes.iter().enumerate() {
            if idx < best {
                assert!(route.score < routes[best].score, "seed {seed}");
            } else {
                assert!(route.score <= routes[best].score, "seed {seed}");
            }
        }
        assert_eq!(planner.dashboard().unwrap().best_index, best);
    }
}

#[test]
fn time_saved_examples() {
    assert_eq!(time_saved(&with_durations(&["22 min", "28 min"])), 6);
    assert_eq!(time_saved(&with_durations(&["22 min"])), 0);
    assert_eq!(time_saved(&with_durations(&["1 h 5 min", "40 min"])), 25);
    assert_eq!(time_saved(&with_durations(&["22 min", "soon"])), 0);
}

#[test]
fn three_step_route_clamps_cursor() {
    let mut planner = RoutePlanner::new(
        AppConfig::default_config(),
        FixedSignal::new(0.0, TrafficLevel::Moderate),
    );
    let ticket = planner.begin_search("Indiranagar", "Koramangala").unwrap();
    planner.resolve_search(ticket.token, parse_routes(OSRM_BODY));
    planner.start_navigation().unwrap();

    let mut cursors = vec![planner.stepper().cursor()];
    for _ in 0..3 {
        planner.next_step();
        cursors.push(planner.stepper().cursor());
    }
    assert_eq!(cursors, vec![0, 1, 2, 2]);

    let (steps, active) = planner.navigation_steps().unwrap();
    assert_eq!(steps[active], "You have arrived at your destination");

    planner.stop_navigation();
    assert_eq!(planner.stepper().cursor(), 0);
    assert_eq!(planner.stepper().state(), NavigationState::Inactive);
}

#[test]
fn empty_set_navigation_is_refused_and_state_unchanged() {
    let mut planner = RoutePlanner::new(
        AppConfig::default_config(),
        FixedSignal::new(0.0, TrafficLevel::Light),
    );
    let before = *planner.stepper();
    assert_eq!(planner.start_navigation(), Err(NavigationError::NoRoutes));
    assert_eq!(planner.stepper(), &before);
    assert!(planner.selected_route().is_none());
    assert!(!planner.next_step());
}

#[test]
fn out_of_order_responses_keep_latest_search() {
    let mut planner = RoutePlanner::new(
        AppConfig::default_config(),
        FixedSignal::new(0.0, TrafficLevel::Light),
    );
    let slow = planner.begin_search("Whitefield", "Hebbal").unwrap();
    let fast = planner.begin_search("Indiranagar", "Koramangala").unwrap();

    assert_eq!(
        planner.resolve_search(fast.token, parse_routes(OSRM_BODY)),
        SearchOutcome::Applied { routes: 2 }
    );
    planner.select_route(1);
    assert_eq!(
        planner.resolve_search(slow.token, Err(RoutingError::NoRoute)),
        SearchOutcome::Stale
    );
    assert_eq!(planner.routes().len(), 2);
    assert_eq!(planner.selected_route().map(|r| r.index), Some(1));
}

#[test]
fn routing_failure_shows_fallback_route() {
    let mut planner = RoutePlanner::new(
        AppConfig::default_config(),
        FixedSignal::new(0.0, TrafficLevel::Light),
    );
    let ticket = planner.begin_search("Mysore Palace", "Chennai Central").unwrap();
    let outcome = planner.resolve_search(
        ticket.token,
        parse_routes(r#"{ "code": "NoRoute", "message": "Impossible route" }"#),
    );
    assert_eq!(outcome, SearchOutcome::Fallback);
    let dash = planner.dashboard().unwrap();
    assert_eq!(dash.total_routes, 1);
    assert_eq!(dash.best_name, "Main Route");
    assert_eq!(dash.best_score_text, "85/100");
    assert_eq!(dash.time_saved_text(), "0 min");
    assert_eq!(dash.traffic_level, TrafficLevel::Moderate);
    assert!(planner.live_updates());
}

#[test]
fn simulated_alerts_start_after_first_search() {
    let mut planner = RoutePlanner::new(
        AppConfig::default_config(),
        SimulatedSignal::from_seed(11),
    );
    planner.refresh_alerts();
    assert!(planner.alerts().is_empty());

    let ticket = planner.begin_search("A", "B").unwrap();
    planner.resolve_search(ticket.token, parse_routes(OSRM_BODY));
    assert_eq!(planner.alerts().len(), 2);
}
