//! Effects that keep the route tab live: searches, timers, announcements
use yew::prelude::*;

use crate::dom::Interval;

/// Run `on_tick` every `period_ms` while `enabled`.
#[hook]
pub fn use_interval(period_ms: u32, enabled: bool, on_tick: Callback<()>) {
    use_effect_with((period_ms, enabled), move |&(period_ms, enabled)| {
        let timer = if enabled {
            Interval::start(period_ms, move || on_tick.emit(()))
        } else {
            None
        };
        move || drop(timer)
    });
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::collections::BTreeMap;

    use smart_traffic_core::SearchOutcome;
    use yew::prelude::*;

    use super::use_interval;
    use crate::app::planner_state::{PlannerAction, PlannerState};
    use crate::i18n::{t, tr};

    /// Run the routing request for each new search ticket.
    #[hook]
    pub fn use_route_search(planner: &UseReducerHandle<PlannerState>) {
        let dispatcher = planner.dispatcher();
        let cfg = planner.planner.config().clone();
        use_effect_with(planner.ticket.clone(), move |ticket| {
            if let Some(ticket) = ticket.clone() {
                crate::a11y::set_status(&t("routes.searching"));
                wasm_bindgen_futures::spawn_local(async move {
                    let result = crate::services::routing::run_search(&cfg, &ticket).await;
                    dispatcher.dispatch(PlannerAction::Resolve {
                        token: ticket.token,
                        result,
                    });
                });
            }
            || {}
        });
    }

    /// Relabel traffic while navigating and rotate alerts once searches succeed.
    #[hook]
    pub fn use_live_updates(planner: &UseReducerHandle<PlannerState>) {
        let cfg = planner.planner.config();
        let tick = {
            let dispatcher = planner.dispatcher();
            Callback::from(move |()| dispatcher.dispatch(PlannerAction::TickTraffic))
        };
        let refresh = {
            let dispatcher = planner.dispatcher();
            Callback::from(move |()| dispatcher.dispatch(PlannerAction::RefreshAlerts))
        };
        use_interval(
            cfg.traffic_sim_interval_ms,
            planner.planner.stepper().is_active(),
            tick,
        );
        use_interval(cfg.alert_interval_ms, planner.planner.live_updates(), refresh);
    }

    /// Announce finished searches through the live region.
    #[hook]
    pub fn use_search_announcements(planner: &UseReducerHandle<PlannerState>) {
        use_effect_with(planner.outcome, |outcome| {
            match outcome {
                Some(SearchOutcome::Applied { routes }) => {
                    let count = routes.to_string();
                    let mut args = BTreeMap::new();
                    args.insert("count", count.as_str());
                    crate::a11y::set_status(&tr("routes.found", Some(&args)));
                }
                Some(SearchOutcome::Fallback) => crate::a11y::set_status(&t("routes.fallback")),
                Some(SearchOutcome::Stale) | None => {}
            }
            || {}
        });
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{use_live_updates, use_route_search, use_search_announcements};
