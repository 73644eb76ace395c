use crate::app::Tab;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Option<Tab>,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(p: &Props) -> Html {
    html! {
        <nav class="tabs" role="tablist" aria-label={t("nav.tabs")}>
            { for Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                let active = p.active == Some(tab);
                let onclick = {
                    let cb = p.on_select.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(tab))
                };
                html! {
                    <button
                        id={format!("tab-{}", tab.panel_id())}
                        class={classes!("tab-btn", active.then_some("active"))}
                        role="tab"
                        aria-selected={active.to_string()}
                        aria-controls={tab.panel_id()}
                        {onclick}
                    >
                        { t(tab.i18n_key()) }
                    </button>
                }
            }) }
        </nav>
    }
}
