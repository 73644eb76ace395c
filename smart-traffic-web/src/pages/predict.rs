use smart_traffic_core::{
    AddressField, AppConfig, PredictionInput, hour_label, rain_label, speed_label,
    temperature_label,
};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::address_input::{AddressChoice, AddressInput};
use crate::components::prediction_result::{PredictionResult, PredictionView};
use crate::components::slider::Slider;
use crate::i18n::t;
use crate::pages::{slider_i32, slider_u8, slider_u32};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: AppConfig,
    pub form: PredictionInput,
    pub result: PredictionView,
    pub on_form: Callback<PredictionInput>,
    pub on_address: Callback<AddressChoice>,
    pub on_clear: Callback<AddressField>,
    pub on_submit: Callback<()>,
}

/// Callback that applies one edit to a copy of the form and emits it.
fn edit<T: 'static>(
    form: &PredictionInput,
    on_form: &Callback<PredictionInput>,
    apply: impl Fn(&mut PredictionInput, T) + 'static,
) -> Callback<T> {
    let form = form.clone();
    let on_form = on_form.clone();
    Callback::from(move |value: T| {
        let mut next = form.clone();
        apply(&mut next, value);
        on_form.emit(next);
    })
}

fn address_text(p: &Props, field: AddressField) -> Callback<String> {
    let on_clear = p.on_clear.clone();
    let set_text = edit(&p.form, &p.on_form, move |form, text: String| {
        if field == AddressField::PredOrigin {
            form.origin = text;
        } else {
            form.destination = text;
        }
    });
    Callback::from(move |text: String| {
        set_text.emit(text);
        on_clear.emit(field);
    })
}

#[function_component(PredictPage)]
pub fn predict_page(p: &Props) -> Html {
    let form = &p.form;
    let on_day = {
        let set_day = edit(form, &p.on_form, |form, day: u8| form.day_of_week = day);
        Callback::from(move |e: web_sys::Event| {
            if let Some(day) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                .and_then(|sel| sel.value().parse::<u8>().ok())
            {
                set_day.emit(day);
            }
        })
    };
    let on_event = {
        let set_event = edit(form, &p.on_form, |form, flag: bool| form.event = flag);
        Callback::from(move |e: web_sys::Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                set_event.emit(input.checked());
            }
        })
    };
    let on_submit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    html! {
        <section id="predict" class="tab-content" role="tabpanel" aria-labelledby="tab-predict">
            <h2>{ t("predict.heading") }</h2>
            <form class="prediction-form" onsubmit={on_submit}>
                <AddressInput
                    field={AddressField::PredOrigin}
                    value={form.origin.clone()}
                    config={p.config.clone()}
                    on_input={address_text(p, AddressField::PredOrigin)}
                    on_choose={p.on_address.clone()}
                />
                <AddressInput
                    field={AddressField::PredDestination}
                    value={form.destination.clone()}
                    config={p.config.clone()}
                    on_input={address_text(p, AddressField::PredDestination)}
                    on_choose={p.on_address.clone()}
                />
                <Slider
                    id="hour"
                    label={t("predict.hour")}
                    min={0.0}
                    max={23.0}
                    value={f64::from(form.hour)}
                    display={hour_label(form.hour)}
                    on_change={edit(form, &p.on_form, |form, v: f64| form.hour = slider_u8(v))}
                />
                <div class="form-group">
                    <label for="day-of-week">{ t("predict.day") }</label>
                    <select id="day-of-week" onchange={on_day}>
                        { for (0_u8..7).map(|day| html! {
                            <option value={day.to_string()} selected={day == form.day_of_week}>
                                { t(&format!("predict.days.{day}")) }
                            </option>
                        }) }
                    </select>
                </div>
                <Slider
                    id="rain"
                    label={t("predict.rain")}
                    min={0.0}
                    max={1.0}
                    step={0.1}
                    value={form.rain_intensity}
                    display={rain_label(form.rain_intensity)}
                    on_change={edit(form, &p.on_form, |form, v: f64| form.rain_intensity = v)}
                />
                <Slider
                    id="temperature"
                    label={t("predict.temperature")}
                    min={0.0}
                    max={45.0}
                    value={f64::from(form.temperature)}
                    display={temperature_label(form.temperature)}
                    on_change={edit(form, &p.on_form, |form, v: f64| form.temperature = slider_i32(v))}
                />
                <Slider
                    id="speed"
                    label={t("predict.speed")}
                    min={5.0}
                    max={100.0}
                    value={f64::from(form.avg_speed)}
                    display={speed_label(form.avg_speed)}
                    on_change={edit(form, &p.on_form, |form, v: f64| form.avg_speed = slider_u32(v))}
                />
                <div class="form-group checkbox-group">
                    <input type="checkbox" id="event" checked={form.event} onchange={on_event} />
                    <label for="event">{ t("predict.event") }</label>
                </div>
                <button type="submit" class="btn btn-primary">{ t("predict.submit") }</button>
            </form>
            <PredictionResult view={p.result.clone()} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn form_shows_slider_labels_from_input() {
        let form = PredictionInput {
            origin: "Whitefield".into(),
            hour: 18,
            day_of_week: 5,
            rain_intensity: 0.3,
            temperature: 31,
            ..PredictionInput::default()
        };
        let props = Props {
            config: AppConfig::default_config(),
            form,
            result: PredictionView::Invalid,
            on_form: Callback::noop(),
            on_address: Callback::noop(),
            on_clear: Callback::noop(),
            on_submit: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<PredictPage>::with_props(props).render());
        assert!(html.contains("18:00"));
        assert!(html.contains("0.3"));
        assert!(html.contains("31°C"));
        assert!(html.contains("35 km/h"));
        assert!(html.contains("Saturday"));
        assert!(html.contains("pred-origin"));
        assert!(html.contains("Please enter both source and destination"));
    }
}
