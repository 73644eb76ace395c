use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_back: Callback<()>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <section class="tab-content not-found" role="alert">
            <h2>{ t("not_found.heading") }</h2>
            <button class="btn" {onclick}>{ t("not_found.back") }</button>
        </section>
    }
}
