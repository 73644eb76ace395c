use crate::i18n::t;
use yew::prelude::*;

const OSM_COPYRIGHT: &str = "https://www.openstreetmap.org/copyright";

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <a href={OSM_COPYRIGHT} target="_blank" rel="noopener">{ t("footer.copyright") }</a>
        </footer>
    }
}
