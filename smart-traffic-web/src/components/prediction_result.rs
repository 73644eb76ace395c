use std::collections::BTreeMap;

use smart_traffic_core::Prediction;
use yew::prelude::*;

use crate::i18n::{t, tr};

/// What the prediction panel currently shows.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PredictionView {
    #[default]
    Idle,
    /// Form submitted without both endpoints.
    Invalid,
    Loading,
    Failed(String),
    Ready {
        prediction: Prediction,
        origin: String,
        destination: String,
    },
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: PredictionView,
}

fn render_ready(prediction: &Prediction, origin: &str, destination: &str) -> Html {
    let mut args = BTreeMap::new();
    args.insert("origin", origin);
    args.insert("destination", destination);
    let badge = &prediction.traffic_level;
    let badge_style = format!("background-color: {}", badge.color);
    html! {
        <div class="prediction-card">
            <h3>{ tr("predict.route_heading", Some(&args)) }</h3>
            <div class="prediction-stats">
                <div class="stat">
                    <span id="traffic-value" class="stat-value">{ prediction.traffic_value().to_string() }</span>
                    <span class="stat-label">{ t("predict.traffic_label") }</span>
                </div>
                <div class="stat">
                    <span id="score-value" class="stat-value">{ prediction.score_text() }</span>
                    <span class="stat-label">{ t("predict.score_label") }</span>
                </div>
            </div>
            <span id="traffic-level-badge" class="traffic-badge" style={badge_style}>
                { badge.text() }
            </span>
            if !prediction.recommendations.is_empty() {
                <div class="recommendations">
                    <h4>{ t("predict.recommendations") }</h4>
                    <ul>
                        { for prediction.recommendations.iter().map(|rec| html! { <li>{ rec.clone() }</li> }) }
                    </ul>
                </div>
            }
        </div>
    }
}

#[function_component(PredictionResult)]
pub fn prediction_result(p: &Props) -> Html {
    let body = match &p.view {
        PredictionView::Idle => Html::default(),
        PredictionView::Invalid => html! {
            <p class="validation-message" role="alert">{ t("predict.missing") }</p>
        },
        PredictionView::Loading => html! {
            <div class="loading" aria-busy="true">{ t("predict.loading") }</div>
        },
        PredictionView::Failed(message) => {
            let mut args = BTreeMap::new();
            args.insert("message", message.as_str());
            html! { <p class="error" role="alert">{ tr("predict.error", Some(&args)) }</p> }
        }
        PredictionView::Ready {
            prediction,
            origin,
            destination,
        } => render_ready(prediction, origin, destination),
    };
    html! {
        <section id="prediction-result" class="result-panel" aria-live="polite">{ body }</section>
    }
}
