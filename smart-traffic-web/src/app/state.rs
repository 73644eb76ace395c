use smart_traffic_core::{ApiError, ModelMetrics, PredictionInput, SearchTokens};
use yew::prelude::*;

use crate::app::planner_state::PlannerState;
use crate::components::prediction_result::PredictionView;

/// Inputs of the route planner form.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteForm {
    pub origin: String,
    pub destination: String,
    pub hour: u8,
    pub rain: f64,
}

impl Default for RouteForm {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            hour: 8,
            rain: 0.0,
        }
    }
}

/// Model metadata as loaded at startup.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModelsView {
    #[default]
    Loading,
    Ready(Vec<ModelMetrics>),
    /// The backend could not be reached; the tab shows a placeholder.
    Unavailable,
}

impl ModelsView {
    #[must_use]
    pub fn from_result(result: Result<Vec<ModelMetrics>, ApiError>) -> Self {
        match result {
            Ok(models) => Self::Ready(models),
            Err(err) => {
                log::warn!("model metadata unavailable: {err}");
                Self::Unavailable
            }
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub planner: UseReducerHandle<PlannerState>,
    pub route_form: UseStateHandle<RouteForm>,
    pub prediction_form: UseStateHandle<PredictionInput>,
    pub prediction: UseStateHandle<PredictionView>,
    /// Issues a token per prediction request so only the latest reply shows.
    pub prediction_tokens: std::rc::Rc<std::cell::RefCell<SearchTokens>>,
    pub models: UseStateHandle<ModelsView>,
    pub traffic_layer: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        planner: use_reducer(PlannerState::default),
        route_form: use_state(RouteForm::default),
        prediction_form: use_state(PredictionInput::default),
        prediction: use_state(PredictionView::default),
        prediction_tokens: use_mut_ref(SearchTokens::new),
        models: use_state(ModelsView::default),
        traffic_layer: use_state(|| false),
        current_language: use_state(crate::i18n::current_lang),
    }
}
