use anyhow::{Result, ensure};
use smart_traffic_core::{NavigationError, NavigationState};

use super::{planner, sample_summaries};

pub fn navigation(seed: u64) -> Result<()> {
    let mut planner = planner(seed);
    ensure!(
        planner.start_navigation() == Err(NavigationError::NoRoutes),
        "navigation started without routes"
    );

    let ticket = planner.begin_search("Whitefield", "MG Road")?;
    planner.resolve_search(ticket.token, Ok(sample_summaries()));
    planner.select_route(0);
    planner.start_navigation()?;
    ensure!(planner.stepper().state() == NavigationState::Active, "not active");

    let steps = planner.routes()[0].steps.len();
    let mut cursors = vec![planner.stepper().cursor()];
    for _ in 0..steps {
        planner.next_step();
        cursors.push(planner.stepper().cursor());
    }
    let expected: Vec<usize> = (0..steps).chain(std::iter::once(steps - 1)).collect();
    ensure!(cursors == expected, "cursor path {cursors:?}, expected {expected:?}");

    for index in (1..planner.routes().len()).chain(std::iter::once(0)) {
        planner.select_route(index);
        let Some((steps, cursor)) = planner.navigation_steps() else {
            anyhow::bail!("switching to route {index} ended navigation");
        };
        ensure!(
            cursor == 0 && !steps.is_empty(),
            "route {index}: cursor {cursor} of {} steps after switching",
            steps.len()
        );
    }

    planner.stop_navigation();
    ensure!(
        planner.stepper().state() == NavigationState::Inactive && planner.stepper().cursor() == 0,
        "stop should reset the stepper"
    );
    ensure!(planner.navigation_steps().is_none(), "steps shown after stop");
    Ok(())
}

pub fn live_traffic(seed: u64) -> Result<()> {
    let mut planner = planner(seed);
    let ticket = planner.begin_search("Whitefield", "MG Road")?;
    planner.resolve_search(ticket.token, Ok(sample_summaries()));
    ensure!(
        planner.tick_live_traffic().is_none(),
        "relabelled traffic while not navigating"
    );
    planner.start_navigation()?;
    for _ in 0..5 {
        let Some(level) = planner.tick_live_traffic() else {
            anyhow::bail!("no live label while navigating");
        };
        let shown = planner.dashboard().map(|d| d.traffic_level);
        ensure!(shown == Some(level), "dashboard shows {shown:?}, live {level:?}");
        ensure!(
            planner.selected_route().map(|r| r.traffic_level) == Some(level),
            "selected route not relabelled"
        );
    }
    Ok(())
}
