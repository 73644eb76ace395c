#[cfg(target_arch = "wasm32")]
use crate::app::planner_state::PlannerAction;
#[cfg(target_arch = "wasm32")]
use crate::app::state::{AppState, ModelsView};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Load model metadata and start following the device position.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let models = app_state.models.clone();
    let dispatcher = app_state.planner.dispatcher();
    let cfg = app_state.planner.planner.config().clone();

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::services::backend::models(&cfg).await;
            models.set(ModelsView::from_result(result));
        });
        let watch = crate::services::geolocation::PositionWatch::start(move |position| {
            dispatcher.dispatch(PlannerAction::Position(position));
        });
        if watch.is_none() {
            log::info!("geolocation unavailable; map stays on the default centre");
        }
        move || drop(watch)
    });
}
