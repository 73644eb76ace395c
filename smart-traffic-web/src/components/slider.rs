use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    pub min: f64,
    pub max: f64,
    #[prop_or(1.0)]
    pub step: f64,
    pub value: f64,
    /// Formatted value shown next to the label.
    pub display: AttrValue,
    pub on_change: Callback<f64>,
}

#[function_component(Slider)]
pub fn slider(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.value().parse::<f64>().ok())
            {
                cb.emit(value);
            }
        })
    };
    let value_id = format!("{}-value", p.id);
    html! {
        <div class="form-group slider-group">
            <label for={p.id.clone()}>
                { p.label.clone() }{ ": " }
                <span id={value_id}>{ p.display.clone() }</span>
            </label>
            <input
                type="range"
                id={p.id.clone()}
                min={p.min.to_string()}
                max={p.max.to_string()}
                step={p.step.to_string()}
                value={p.value.to_string()}
                {oninput}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn slider_renders_value_label() {
        let props = Props {
            id: AttrValue::from("hour"),
            label: AttrValue::from("Hour of day"),
            min: 0.0,
            max: 23.0,
            step: 1.0,
            value: 8.0,
            display: AttrValue::from("8:00"),
            on_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Slider>::with_props(props).render());
        assert!(html.contains("hour-value"));
        assert!(html.contains("8:00"));
        assert!(html.contains("type=\"range\""));
    }
}
