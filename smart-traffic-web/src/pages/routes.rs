use smart_traffic_core::{AddressField, AppConfig, hour_label, rain_descriptor};
use yew::prelude::*;

use crate::app::planner_state::{PlannerAction, RoutesView};
use crate::app::state::RouteForm;
use crate::components::address_input::{AddressChoice, AddressInput};
use crate::components::alerts_panel::AlertsPanel;
use crate::components::map_panel::MapPanel;
use crate::components::navigation_panel::NavigationPanel;
use crate::components::route_dashboard::RouteDashboardView;
use crate::components::route_list::RouteList;
use crate::components::slider::Slider;
use crate::i18n::t;
use crate::pages::slider_u8;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: AppConfig,
    pub form: RouteForm,
    pub view: RoutesView,
    pub traffic_layer: bool,
    pub on_form: Callback<RouteForm>,
    pub on_address: Callback<AddressChoice>,
    pub on_action: Callback<PlannerAction>,
    pub on_search: Callback<()>,
    pub on_toggle_traffic: Callback<()>,
}

fn action(on_action: &Callback<PlannerAction>, make: fn() -> PlannerAction) -> Callback<()> {
    let on_action = on_action.clone();
    Callback::from(move |()| on_action.emit(make()))
}

fn address_text(p: &Props, field: AddressField) -> Callback<String> {
    let form = p.form.clone();
    let on_form = p.on_form.clone();
    let on_action = p.on_action.clone();
    Callback::from(move |text: String| {
        let mut next = form.clone();
        if field == AddressField::Origin {
            next.origin = text;
        } else {
            next.destination = text;
        }
        on_form.emit(next);
        on_action.emit(PlannerAction::ClearAddress(field));
    })
}

#[function_component(RoutesPage)]
pub fn routes_page(p: &Props) -> Html {
    let view = &p.view;
    let on_hour = {
        let form = p.form.clone();
        let on_form = p.on_form.clone();
        Callback::from(move |v: f64| {
            on_form.emit(RouteForm {
                hour: slider_u8(v),
                ..form.clone()
            });
        })
    };
    let on_rain = {
        let form = p.form.clone();
        let on_form = p.on_form.clone();
        Callback::from(move |rain: f64| on_form.emit(RouteForm { rain, ..form.clone() }))
    };
    let on_find = {
        let cb = p.on_search.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_select = {
        let on_action = p.on_action.clone();
        Callback::from(move |index: usize| on_action.emit(PlannerAction::Select(index)))
    };

    html! {
        <section id="routes" class="tab-content" role="tabpanel" aria-labelledby="tab-routes">
            <h2>{ t("routes.heading") }</h2>
            <div class="route-layout">
                <div class="route-form">
                    <AddressInput
                        field={AddressField::Origin}
                        value={p.form.origin.clone()}
                        config={p.config.clone()}
                        on_input={address_text(p, AddressField::Origin)}
                        on_choose={p.on_address.clone()}
                    />
                    <AddressInput
                        field={AddressField::Destination}
                        value={p.form.destination.clone()}
                        config={p.config.clone()}
                        on_input={address_text(p, AddressField::Destination)}
                        on_choose={p.on_address.clone()}
                    />
                    <Slider
                        id="route-hour"
                        label={t("routes.hour")}
                        min={0.0}
                        max={23.0}
                        value={f64::from(p.form.hour)}
                        display={hour_label(p.form.hour)}
                        on_change={on_hour}
                    />
                    <Slider
                        id="route-rain"
                        label={t("routes.rain")}
                        min={0.0}
                        max={1.0}
                        step={0.1}
                        value={p.form.rain}
                        display={rain_descriptor(p.form.rain)}
                        on_change={on_rain}
                    />
                    <button id="find-routes" class="btn btn-primary" onclick={on_find} disabled={view.searching}>
                        { t("routes.find") }
                    </button>
                    if let Some(notice) = view.notice {
                        <p class="validation-message" role="alert">{ t(notice.i18n_key()) }</p>
                    }
                    <RouteDashboardView dashboard={view.dashboard.clone()} />
                    <NavigationPanel
                        active={view.navigating}
                        steps={view.steps.clone()}
                        cursor={view.cursor}
                        on_start={action(&p.on_action, || PlannerAction::StartNavigation)}
                        on_next={action(&p.on_action, || PlannerAction::NextStep)}
                        on_stop={action(&p.on_action, || PlannerAction::StopNavigation)}
                    />
                    <AlertsPanel alerts={view.alerts.clone()} live={view.live} />
                </div>
                <div class="route-map">
                    <MapPanel
                        view={view.map_view}
                        user={view.user}
                        traffic_layer={p.traffic_layer}
                        on_toggle_traffic={p.on_toggle_traffic.clone()}
                        on_recenter={action(&p.on_action, || PlannerAction::Recenter)}
                    />
                    <RouteList
                        routes={view.routes.clone()}
                        best_index={view.best_index}
                        selected={view.selected}
                        searching={view.searching}
                        fallback={view.fallback}
                        {on_select}
                    />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::planner_state::PlannerState;
    use futures::executor::block_on;
    use smart_traffic_core::{DEFAULT_CENTER, RouteSummary};
    use yew::LocalServerRenderer;

    fn props(view: RoutesView) -> Props {
        Props {
            config: AppConfig::default_config(),
            form: RouteForm {
                origin: "Whitefield".into(),
                destination: "MG Road".into(),
                hour: 17,
                rain: 0.5,
            },
            view,
            traffic_layer: false,
            on_form: Callback::noop(),
            on_address: Callback::noop(),
            on_action: Callback::noop(),
            on_search: Callback::noop(),
            on_toggle_traffic: Callback::noop(),
        }
    }

    #[test]
    fn empty_planner_renders_form_and_waiting_alerts() {
        let html = block_on(
            LocalServerRenderer::<RoutesPage>::with_props(props(PlannerState::default().view()))
                .render(),
        );
        assert!(html.contains("17:00"));
        assert!(html.contains("Moderate Rain"));
        assert!(html.contains("Start Navigation"));
        assert!(html.contains("first route search"));
        assert!(!html.contains("route-card"));
    }

    #[test]
    fn resolved_search_renders_dashboard_and_cards() {
        let mut state = PlannerState::default();
        state.apply(PlannerAction::Search {
            origin: "Whitefield".into(),
            destination: "MG Road".into(),
        });
        let token = state.ticket.as_ref().map(|t| t.token).expect("ticket");
        let summary = |minutes: f64| RouteSummary {
            total_distance_m: 15_200.0,
            total_time_s: minutes * 60.0,
            instructions: vec!["Head north on MG Road".into()],
            coordinates: vec![DEFAULT_CENTER],
        };
        state.apply(PlannerAction::Resolve {
            token,
            result: Ok(vec![summary(20.0), summary(30.0)]),
        });
        let html = block_on(LocalServerRenderer::<RoutesPage>::with_props(props(state.view())).render());
        assert!(html.contains("route-dashboard"));
        assert!(html.contains("Fastest Route"));
        assert!(html.contains("Alternative 1"));
        assert!(html.contains("OPTIMAL"));
        assert!(html.contains("alert-item"));
    }
}
