//! Logic scenario catalog
//!
//! Each scenario drives a [`RoutePlanner`] with a seeded simulated signal and
//! fails with a description of the first broken expectation.
use anyhow::Result;
use smart_traffic_core::{AppConfig, LatLng, RoutePlanner, RouteSummary, SimulatedSignal};

pub mod navigation;
pub mod planning;

/// Signature of a scenario check; the argument is the iteration seed.
pub type ScenarioCheck = fn(u64) -> Result<()>;

#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub description: &'static str,
    pub check: ScenarioCheck,
}

const CATALOG: &[(&str, &str, ScenarioCheck)] = &[
    (
        "smoke",
        "Search, resolve, and read back a dashboard",
        planning::smoke,
    ),
    (
        "ranking",
        "Best route is the first candidate with the top score",
        planning::ranking,
    ),
    (
        "time-saved",
        "Time saved equals slowest minus fastest duration",
        planning::time_saved_matches_durations,
    ),
    (
        "navigation",
        "Step cursor advances, clamps on the last step, and resets",
        navigation::navigation,
    ),
    (
        "stale-search",
        "Replies to superseded searches never touch state",
        planning::stale_search,
    ),
    (
        "fallback",
        "Routing failures show the estimated main route",
        planning::fallback,
    ),
    (
        "live-traffic",
        "Live relabelling only while navigating, mirrored on the dashboard",
        navigation::live_traffic,
    ),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|(name, desc, _)| (*name, *desc)).collect()
}

pub fn scenario_names() -> Vec<String> {
    CATALOG.iter().map(|(name, _, _)| (*name).to_string()).collect()
}

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    CATALOG
        .iter()
        .find(|(key, _, _)| *key == name)
        .map(|(key, description, check)| TestScenario {
            name: (*key).to_string(),
            description,
            check: *check,
        })
}

pub(crate) fn planner(seed: u64) -> RoutePlanner<SimulatedSignal> {
    RoutePlanner::new(AppConfig::default_config(), SimulatedSignal::from_seed(seed))
}

/// Three routes of 20, 26 and 31 minutes; the first has four steps.
pub(crate) fn sample_summaries() -> Vec<RouteSummary> {
    let route = |km: f64, minutes: f64, steps: &[&str]| RouteSummary {
        total_distance_m: km * 1000.0,
        total_time_s: minutes * 60.0,
        instructions: steps.iter().map(|s| (*s).to_string()).collect(),
        coordinates: vec![LatLng::new(12.9698, 77.7500), LatLng::new(12.9756, 77.6066)],
    };
    vec![
        route(
            15.2,
            20.0,
            &[
                "Head west on Whitefield Main Road",
                "Turn left onto Old Airport Road",
                "Turn right onto MG Road",
                "You have arrived at your destination",
            ],
        ),
        route(
            17.9,
            26.0,
            &["Head south on ITPL Road", "You have arrived at your destination"],
        ),
        route(14.1, 31.0, &["You have arrived at your destination"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_passes_for_several_seeds() {
        for (name, _) in list_scenarios() {
            let scenario = get_scenario(name).expect("listed scenario resolves");
            for seed in [1, 7, 1337] {
                if let Err(err) = (scenario.check)(seed) {
                    panic!("{name} failed for seed {seed}: {err:#}");
                }
            }
        }
    }

    #[test]
    fn unknown_scenario_is_none() {
        assert!(get_scenario("does-not-exist").is_none());
        assert_eq!(scenario_names().len(), list_scenarios().len());
    }
}
