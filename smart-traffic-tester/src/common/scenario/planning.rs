use anyhow::{Result, bail, ensure};
use smart_traffic_core::{
    RoutingError, SearchOutcome, TrafficLevel, parse_minutes, time_saved,
};

use super::{planner, sample_summaries};

pub fn smoke(seed: u64) -> Result<()> {
    let mut planner = planner(seed);
    let ticket = planner.begin_search("Whitefield", "MG Road")?;
    ensure!(planner.is_searching(), "search should be pending after begin_search");
    let outcome = planner.resolve_search(ticket.token, Ok(sample_summaries()));
    ensure!(
        outcome == SearchOutcome::Applied { routes: 3 },
        "unexpected outcome {outcome:?}"
    );
    let Some(dashboard) = planner.dashboard() else {
        bail!("dashboard missing after a successful search");
    };
    ensure!(dashboard.total_routes == 3, "total routes {}", dashboard.total_routes);
    ensure!(planner.live_updates(), "live updates should start after a search");
    ensure!(!planner.alerts().is_empty(), "alerts should refresh after a search");
    Ok(())
}

pub fn ranking(seed: u64) -> Result<()> {
    let mut planner = planner(seed);
    let ticket = planner.begin_search("Whitefield", "MG Road")?;
    planner.resolve_search(ticket.token, Ok(sample_summaries()));
    let routes = planner.routes();
    let mut expected = 0;
    for (i, route) in routes.iter().enumerate() {
        if route.score > routes[expected].score {
            expected = i;
        }
    }
    let best = planner.board().best_index();
    ensure!(best == Some(expected), "best index {best:?}, expected {expected}");
    ensure!(
        planner.board().selected_index() == Some(expected),
        "best route should be preselected"
    );
    for (i, route) in routes.iter().enumerate() {
        ensure!(
            route.traffic_level == TrafficLevel::for_rank(i),
            "{} starts at {:?}",
            route.name,
            route.traffic_level
        );
    }
    Ok(())
}

pub fn time_saved_matches_durations(seed: u64) -> Result<()> {
    let mut planner = planner(seed);
    let ticket = planner.begin_search("Whitefield", "MG Road")?;
    planner.resolve_search(ticket.token, Ok(sample_summaries()));
    let minutes: Vec<u32> = planner
        .routes()
        .iter()
        .filter_map(|r| parse_minutes(r.effective_duration()))
        .collect();
    let (Some(max), Some(min)) = (minutes.iter().max(), minutes.iter().min()) else {
        bail!("no parsable durations");
    };
    let saved = time_saved(planner.routes());
    ensure!(saved == max - min, "time saved {saved}, expected {}", max - min);
    Ok(())
}

pub fn stale_search(seed: u64) -> Result<()> {
    let mut planner = planner(seed);
    let first = planner.begin_search("Whitefield", "MG Road")?;
    let second = planner.begin_search("Koramangala", "Indiranagar")?;
    let outcome = planner.resolve_search(first.token, Ok(sample_summaries()));
    ensure!(outcome == SearchOutcome::Stale, "first reply was {outcome:?}");
    ensure!(planner.routes().is_empty(), "stale reply populated routes");
    ensure!(!planner.live_updates(), "stale reply started live updates");
    let outcome = planner.resolve_search(second.token, Err(RoutingError::NoRoute));
    ensure!(outcome == SearchOutcome::Fallback, "second reply was {outcome:?}");
    let outcome = planner.resolve_search(second.token, Ok(sample_summaries()));
    ensure!(outcome == SearchOutcome::Stale, "duplicate reply was {outcome:?}");
    Ok(())
}

pub fn fallback(seed: u64) -> Result<()> {
    let mut planner = planner(seed);
    let ticket = planner.begin_search("Whitefield", "MG Road")?;
    let outcome = planner.resolve_search(ticket.token, Err(RoutingError::Status(503)));
    ensure!(outcome == SearchOutcome::Fallback, "outcome {outcome:?}");
    let Some(route) = planner.best_route() else {
        bail!("fallback route missing");
    };
    ensure!(route.name == "Main Route", "fallback name {}", route.name);
    ensure!(
        route.steps.first().map(String::as_str) == Some("Start from Whitefield"),
        "fallback steps {:?}",
        route.steps
    );
    let Some(dashboard) = planner.dashboard() else {
        bail!("dashboard missing for fallback");
    };
    ensure!(dashboard.best_score_text == "85/100", "score {}", dashboard.best_score_text);
    ensure!(dashboard.time_saved_minutes == 0, "single route saves nothing");
    ensure!(planner.live_updates(), "fallback still enables live updates");
    Ok(())
}
