use smart_traffic_core::{ModelMetrics, accuracy_chart};
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub models: Vec<ModelMetrics>,
}

/// Vertical bar chart of model accuracy on a 0–100 axis.
#[function_component(AccuracyChart)]
pub fn accuracy_chart_view(p: &Props) -> Html {
    let bars = accuracy_chart(&p.models);
    html! {
        <figure id="accuracy-chart" class="accuracy-chart">
            <figcaption>{ t("models.chart") }</figcaption>
            <div class="chart-bars" role="list">
                { for bars.iter().map(|bar| {
                    let style = format!(
                        "height: {:.1}%; background-color: {}",
                        bar.fill * 100.0,
                        bar.color
                    );
                    html! {
                        <div class="chart-bar" role="listitem" aria-label={format!("{}: {}%", bar.label, bar.value)}>
                            <div class="bar-fill" style={style}></div>
                            <span class="bar-label">{ bar.label.clone() }</span>
                        </div>
                    }
                }) }
            </div>
        </figure>
    }
}
