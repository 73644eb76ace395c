use smart_traffic_core::{AddressField, PredictionInput};
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::app::Tab;
use crate::app::planner_state::PlannerAction;
use crate::app::routing::next_route_for_tab;
use crate::app::state::{AppState, RouteForm};
use crate::components::address_input::AddressChoice;
use crate::components::prediction_result::PredictionView;
use crate::router::Route;

#[derive(Clone)]
pub struct AppHandlers {
    pub lang_change: Callback<String>,
    pub select_tab: Callback<Tab>,
    pub planner: Callback<PlannerAction>,
    pub route_form: Callback<RouteForm>,
    pub prediction_form: Callback<PredictionInput>,
    pub choose_address: Callback<AddressChoice>,
    pub clear_address: Callback<AddressField>,
    pub search: Callback<()>,
    pub predict: Callback<()>,
    pub toggle_traffic: Callback<()>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Self {
        Self {
            lang_change: build_lang_change(state),
            select_tab: build_select_tab(route, navigator.clone()),
            planner: build_planner(state),
            route_form: build_route_form(state),
            prediction_form: build_prediction_form(state),
            choose_address: build_choose_address(state),
            clear_address: build_clear_address(state),
            search: build_search(state),
            predict: build_predict(state),
            toggle_traffic: build_toggle_traffic(state),
            go_home: build_go_home(navigator),
        }
    }
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |lang: String| current_language.set(lang))
}

fn build_select_tab(route: Option<&Route>, navigator: Option<Navigator>) -> Callback<Tab> {
    let route = route.cloned();
    Callback::from(move |tab: Tab| {
        if let (Some(nav), Some(next)) = (navigator.as_ref(), next_route_for_tab(tab, route.as_ref())) {
            nav.push(&next);
        }
    })
}

/// Dispatches planner actions; starting navigation with no routes alerts instead.
fn build_planner(state: &AppState) -> Callback<PlannerAction> {
    let planner = state.planner.clone();
    Callback::from(move |action: PlannerAction| {
        if matches!(action, PlannerAction::StartNavigation) && planner.planner.routes().is_empty() {
            crate::dom::alert(&crate::i18n::t("routes.find_first"));
            return;
        }
        planner.dispatch(action);
    })
}

fn build_route_form(state: &AppState) -> Callback<RouteForm> {
    let form = state.route_form.clone();
    Callback::from(move |next: RouteForm| form.set(next))
}

fn build_prediction_form(state: &AppState) -> Callback<PredictionInput> {
    let form = state.prediction_form.clone();
    Callback::from(move |next: PredictionInput| form.set(next))
}

fn build_choose_address(state: &AppState) -> Callback<AddressChoice> {
    let route_form = state.route_form.clone();
    let prediction_form = state.prediction_form.clone();
    let planner = state.planner.dispatcher();
    Callback::from(move |choice: AddressChoice| {
        match choice.field {
            AddressField::Origin => route_form.set(RouteForm {
                origin: choice.text.clone(),
                ..(*route_form).clone()
            }),
            AddressField::Destination => route_form.set(RouteForm {
                destination: choice.text.clone(),
                ..(*route_form).clone()
            }),
            AddressField::PredOrigin => prediction_form.set(PredictionInput {
                origin: choice.text.clone(),
                ..(*prediction_form).clone()
            }),
            AddressField::PredDestination => prediction_form.set(PredictionInput {
                destination: choice.text.clone(),
                ..(*prediction_form).clone()
            }),
        }
        planner.dispatch(PlannerAction::ChooseAddress {
            field: choice.field,
            coords: choice.coords,
            current_location: choice.current_location,
        });
    })
}

fn build_clear_address(state: &AppState) -> Callback<AddressField> {
    let planner = state.planner.dispatcher();
    Callback::from(move |field: AddressField| planner.dispatch(PlannerAction::ClearAddress(field)))
}

fn build_search(state: &AppState) -> Callback<()> {
    let form = state.route_form.clone();
    let planner = state.planner.dispatcher();
    Callback::from(move |()| {
        planner.dispatch(PlannerAction::Search {
            origin: form.origin.clone(),
            destination: form.destination.clone(),
        });
    })
}

fn build_predict(state: &AppState) -> Callback<()> {
    let form = state.prediction_form.clone();
    let result = state.prediction.clone();
    let tokens = state.prediction_tokens.clone();
    let cfg = state.planner.planner.config().clone();
    Callback::from(move |()| {
        let request = match form.to_request(&cfg) {
            Ok(request) => request,
            Err(err) => {
                log::info!("prediction rejected: {err}");
                result.set(PredictionView::Invalid);
                return;
            }
        };
        let token = tokens.borrow_mut().issue();
        result.set(PredictionView::Loading);
        let cfg = cfg.clone();
        let result = result.clone();
        let tokens = tokens.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let view = match crate::services::backend::predict(&cfg, &request).await {
                Ok(prediction) => PredictionView::Ready {
                    prediction,
                    origin: request.origin.clone(),
                    destination: request.destination.clone(),
                },
                Err(err) => {
                    log::warn!("prediction failed: {err}");
                    PredictionView::Failed(err.to_string())
                }
            };
            if tokens.borrow().is_current(token) {
                result.set(view);
            }
        });
    })
}

fn build_toggle_traffic(state: &AppState) -> Callback<()> {
    let layer = state.traffic_layer.clone();
    Callback::from(move |()| layer.set(!*layer))
}

fn build_go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Predict);
        }
    })
}
