use std::collections::BTreeMap;

use smart_traffic_core::RouteCandidate;
use yew::prelude::*;

use crate::i18n::{t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub route: RouteCandidate,
    /// Highest-scoring candidate; gets the OPTIMAL badge.
    pub best: bool,
    pub selected: bool,
    pub on_select: Callback<usize>,
}

fn detail(label_key: &str, value: String) -> Html {
    html! {
        <div class="route-detail">
            <span class="detail-label">{ t(label_key) }</span>
            <span class="detail-value">{ value }</span>
        </div>
    }
}

#[function_component(RouteCard)]
pub fn route_card(p: &Props) -> Html {
    let route = &p.route;
    let onclick = {
        let cb = p.on_select.clone();
        let index = route.index;
        Callback::from(move |_: MouseEvent| cb.emit(index))
    };
    let (preview, hidden) = route.step_preview();
    let more = (hidden > 0).then(|| {
        let count = hidden.to_string();
        let mut args = BTreeMap::new();
        args.insert("count", count.as_str());
        tr("routes.more_steps", Some(&args))
    });
    let level_class = format!("traffic-{}", route.traffic_level.label().to_lowercase());

    html! {
        <article
            class={classes!("route-card", p.best.then_some("best"), p.selected.then_some("selected"))}
            data-index={route.index.to_string()}
            aria-selected={p.selected.to_string()}
            tabindex="0"
            {onclick}
        >
            <header class="route-card-header">
                <h4>{ route.name.clone() }</h4>
                if p.best {
                    <span class="optimal-badge">{ t("routes.optimal") }</span>
                }
            </header>
            <div class="route-details">
                { detail("routes.distance", route.distance.clone()) }
                { detail("routes.duration", route.effective_duration().to_string()) }
                <div class="route-detail">
                    <span class="detail-label">{ t("routes.traffic") }</span>
                    <span class={classes!("detail-value", level_class)}>
                        { t(route.traffic_level.i18n_key()) }
                    </span>
                </div>
                { detail("routes.score", route.score_text()) }
            </div>
            if !preview.is_empty() {
                <div class="route-steps">
                    <strong>{ t("routes.turn_by_turn") }</strong>
                    <ol>
                        { for preview.iter().map(|step| html! { <li>{ step.clone() }</li> }) }
                    </ol>
                    if let Some(more) = more {
                        <p class="more-steps">{ more }</p>
                    }
                </div>
            }
        </article>
    }
}
