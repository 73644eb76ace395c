//! Map viewport summary and controls
//!
//! Tile rendering belongs to the host page; this panel publishes the
//! requested view as data attributes and offers the traffic-layer toggle
//! and recenter control.
use std::collections::BTreeMap;

use smart_traffic_core::{LatLng, MapView};
use yew::prelude::*;

use crate::i18n::{t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: MapView,
    #[prop_or_default]
    pub user: Option<LatLng>,
    pub traffic_layer: bool,
    pub on_toggle_traffic: Callback<()>,
    pub on_recenter: Callback<()>,
}

fn view_label(view: MapView) -> String {
    let lat = format!("{:.4}", view.center.lat);
    let lon = format!("{:.4}", view.center.lon);
    let zoom = view.zoom.to_string();
    let mut args = BTreeMap::new();
    args.insert("lat", lat.as_str());
    args.insert("lon", lon.as_str());
    args.insert("zoom", zoom.as_str());
    tr("map.label", Some(&args))
}

#[function_component(MapPanel)]
pub fn map_panel(p: &Props) -> Html {
    let on_toggle = {
        let cb = p.on_toggle_traffic.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_recenter = {
        let cb = p.on_recenter.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let label = view_label(p.view);
    html! {
        <section class="map-panel">
            <div
                id="map"
                class={classes!("map", p.traffic_layer.then_some("traffic-on"))}
                role="img"
                aria-label={label.clone()}
                data-lat={p.view.center.lat.to_string()}
                data-lon={p.view.center.lon.to_string()}
                data-zoom={p.view.zoom.to_string()}
                data-user-lat={p.user.map(|u| u.lat.to_string())}
                data-user-lon={p.user.map(|u| u.lon.to_string())}
            >
                <p class="map-caption">{ label }</p>
            </div>
            <div class="map-controls">
                <button
                    id="traffic-layer-toggle"
                    class={classes!("btn", p.traffic_layer.then_some("active"))}
                    aria-pressed={p.traffic_layer.to_string()}
                    onclick={on_toggle}
                >
                    { t("map.toggle_traffic") }
                </button>
                <button id="recenter-map" class="btn" onclick={on_recenter}>{ t("map.recenter") }</button>
            </div>
        </section>
    }
}
