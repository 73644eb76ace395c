use smart_traffic_core::{NO_INCIDENTS, TrafficAlert};
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub alerts: Vec<TrafficAlert>,
    /// Alerts refresh only after a successful search.
    pub live: bool,
}

#[function_component(AlertsPanel)]
pub fn alerts_panel(p: &Props) -> Html {
    let body = if !p.live {
        html! { <p class="alerts-waiting">{ t("alerts.waiting") }</p> }
    } else if p.alerts.is_empty() {
        html! { <p class="alert-item">{ NO_INCIDENTS }</p> }
    } else {
        html! {
            <ul class="alert-list">
                { for p.alerts.iter().map(|alert| html! {
                    <li class={classes!("alert-item", alert.severity.css_class())}>
                        { alert.message.clone() }
                    </li>
                }) }
            </ul>
        }
    };
    html! {
        <section id="traffic-alerts" class="alerts-panel" aria-live="polite">
            <h3>{ t("alerts.heading") }</h3>
            { body }
        </section>
    }
}
