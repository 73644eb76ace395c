use yew::prelude::*;

use crate::app::state::ModelsView;
use crate::components::accuracy_chart::AccuracyChart;
use crate::components::model_table::ModelTable;
use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub models: ModelsView,
}

#[function_component(ModelsPage)]
pub fn models_page(p: &Props) -> Html {
    let body = match &p.models {
        ModelsView::Ready(models) if !models.is_empty() => html! {
            <>
                <ModelTable models={models.clone()} />
                <AccuracyChart models={models.clone()} />
            </>
        },
        _ => html! { <p class="models-empty">{ t("models.empty") }</p> },
    };
    html! {
        <section id="models" class="tab-content" role="tabpanel" aria-labelledby="tab-models">
            <h2>{ t("models.heading") }</h2>
            { body }
        </section>
    }
}
