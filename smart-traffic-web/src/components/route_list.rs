use std::collections::BTreeMap;

use smart_traffic_core::RouteCandidate;
use yew::prelude::*;

use crate::components::route_card::RouteCard;
use crate::i18n::{t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub routes: Vec<RouteCandidate>,
    pub best_index: Option<usize>,
    pub selected: Option<usize>,
    #[prop_or_default]
    pub searching: bool,
    /// The shown route is the offline estimate.
    #[prop_or_default]
    pub fallback: bool,
    pub on_select: Callback<usize>,
}

#[function_component(RouteList)]
pub fn route_list(p: &Props) -> Html {
    if p.searching {
        return html! {
            <div id="route-results" class="loading" aria-busy="true">{ t("routes.searching") }</div>
        };
    }
    if p.routes.is_empty() {
        return html! { <div id="route-results"></div> };
    }

    let header = p.best_index.and_then(|i| p.routes.get(i)).map(|best| {
        let mut args = BTreeMap::new();
        args.insert("name", best.name.as_str());
        html! {
            <div class="recommendation-header">
                <h3>{ tr("routes.recommended", Some(&args)) }</h3>
                <p>{ t("routes.recommended_note") }</p>
            </div>
        }
    });

    html! {
        <div id="route-results">
            { for header }
            if p.fallback {
                <p class="fallback-notice" role="status">{ t("routes.fallback") }</p>
            }
            <div class="route-cards">
                { for p.routes.iter().map(|route| html! {
                    <RouteCard
                        key={route.index}
                        route={route.clone()}
                        best={p.best_index == Some(route.index)}
                        selected={p.selected == Some(route.index)}
                        on_select={p.on_select.clone()}
                    />
                }) }
            </div>
        </div>
    }
}
