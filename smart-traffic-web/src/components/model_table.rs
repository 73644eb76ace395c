use smart_traffic_core::ModelMetrics;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub models: Vec<ModelMetrics>,
}

#[function_component(ModelTable)]
pub fn model_table(p: &Props) -> Html {
    html! {
        <table id="model-table" class="model-table">
            <thead>
                <tr>
                    <th scope="col">{ t("models.name") }</th>
                    <th scope="col">{ t("models.mae") }</th>
                    <th scope="col">{ t("models.rmse") }</th>
                    <th scope="col">{ t("models.r2") }</th>
                    <th scope="col">{ t("models.accuracy") }</th>
                </tr>
            </thead>
            <tbody>
                { for p.models.iter().map(|m| html! {
                    <tr>
                        <th scope="row">{ m.name.clone() }</th>
                        <td>{ m.mae.to_string() }</td>
                        <td>{ m.rmse.to_string() }</td>
                        <td>{ m.r2.to_string() }</td>
                        <td>{ m.accuracy_text() }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
