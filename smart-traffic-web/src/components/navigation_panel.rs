use std::collections::BTreeMap;

use yew::prelude::*;

use crate::i18n::{t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: bool,
    /// Directions of the selected route while navigating.
    pub steps: Vec<String>,
    pub cursor: usize,
    pub on_start: Callback<()>,
    pub on_next: Callback<()>,
    pub on_stop: Callback<()>,
}

fn step_counter(cursor: usize, total: usize) -> String {
    let current = (cursor + 1).to_string();
    let total = total.to_string();
    let mut args = BTreeMap::new();
    args.insert("current", current.as_str());
    args.insert("total", total.as_str());
    tr("navigation.step", Some(&args))
}

#[function_component(NavigationPanel)]
pub fn navigation_panel(p: &Props) -> Html {
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    if !p.active {
        return html! {
            <div class="navigation-controls">
                <button id="start-navigation" class="btn btn-primary" onclick={emit(&p.on_start)}>
                    { t("navigation.start") }
                </button>
            </div>
        };
    }

    html! {
        <section id="navigation-panel" class="navigation-panel" aria-label={t("navigation.heading")}>
            <h3>{ t("navigation.heading") }</h3>
            <p class="step-counter" aria-live="polite">{ step_counter(p.cursor, p.steps.len()) }</p>
            <ol id="direction-steps">
                { for p.steps.iter().enumerate().map(|(i, step)| html! {
                    <li
                        class={classes!("direction-step", (i == p.cursor).then_some("active"))}
                        aria-current={(i == p.cursor).then_some("step")}
                    >
                        { step.clone() }
                    </li>
                }) }
            </ol>
            <div class="navigation-controls">
                <button id="next-step" class="btn" onclick={emit(&p.on_next)}>{ t("navigation.next") }</button>
                <button id="stop-navigation" class="btn btn-secondary" onclick={emit(&p.on_stop)}>
                    { t("navigation.stop") }
                </button>
            </div>
        </section>
    }
}
