use smart_traffic_core::RouteDashboard;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub dashboard: Option<RouteDashboard>,
}

fn stat(id: &'static str, value: String, label_key: &str) -> Html {
    html! {
        <div class="dashboard-stat">
            <span id={id} class="stat-value">{ value }</span>
            <span class="stat-label">{ t(label_key) }</span>
        </div>
    }
}

#[function_component(RouteDashboardView)]
pub fn route_dashboard(p: &Props) -> Html {
    let Some(board) = &p.dashboard else {
        return Html::default();
    };
    html! {
        <div class="route-dashboard" aria-live="polite">
            { stat("total-routes", board.total_routes.to_string(), "dashboard.total_routes") }
            { stat("best-score", board.best_score_text.clone(), "dashboard.best_score") }
            { stat("time-saved", board.time_saved_text(), "dashboard.time_saved") }
            { stat("traffic-level", t(board.traffic_level.i18n_key()), "dashboard.traffic_level") }
        </div>
    }
}
