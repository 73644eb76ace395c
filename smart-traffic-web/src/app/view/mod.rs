mod handlers;

pub use handlers::AppHandlers;

use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::app::Tab;
use crate::app::routing::active_tab;
use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::tab_bar::TabBar;
use crate::pages::models::ModelsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::predict::PredictPage;
use crate::pages::routes::RoutesPage;
use crate::router::Route;

fn render_tab(state: &AppState, handlers: &AppHandlers, tab: Option<Tab>) -> Html {
    let config = state.planner.planner.config().clone();
    match tab {
        Some(Tab::Predict) => html! {
            <PredictPage
                {config}
                form={(*state.prediction_form).clone()}
                result={(*state.prediction).clone()}
                on_form={handlers.prediction_form.clone()}
                on_address={handlers.choose_address.clone()}
                on_clear={handlers.clear_address.clone()}
                on_submit={handlers.predict.clone()}
            />
        },
        Some(Tab::Routes) => html! {
            <RoutesPage
                {config}
                form={(*state.route_form).clone()}
                view={state.planner.view()}
                traffic_layer={*state.traffic_layer}
                on_form={handlers.route_form.clone()}
                on_address={handlers.choose_address.clone()}
                on_action={handlers.planner.clone()}
                on_search={handlers.search.clone()}
                on_toggle_traffic={handlers.toggle_traffic.clone()}
            />
        },
        Some(Tab::Models) => html! { <ModelsPage models={(*state.models).clone()} /> },
        None => html! { <NotFoundPage on_back={handlers.go_home.clone()} /> },
    }
}

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, route, navigator);
    let tab = active_tab(route);
    html! {
        <>
            <Header
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <TabBar active={tab} on_select={handlers.select_tab.clone()} />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { render_tab(state, &handlers, tab) }
            </main>
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
            <Footer />
        </>
    }
}
