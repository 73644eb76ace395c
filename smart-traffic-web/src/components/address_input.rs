//! Address input with geocoder suggestions and a current-location shortcut
//!
//! Suggestions are fetched once the query reaches the configured minimum
//! length. Each request takes a fresh [`SearchToken`] so that a slow reply
//! for an older query never replaces the list of a newer one.
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use smart_traffic_core::{AddressField, AddressMatch, AppConfig, LatLng, SearchTokens, should_suggest};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::i18n::{t, tr};

/// A coordinate picked for a field, from a suggestion or the device.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressChoice {
    pub field: AddressField,
    pub text: String,
    pub coords: LatLng,
    pub current_location: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub field: AddressField,
    pub value: AttrValue,
    pub config: AppConfig,
    pub on_input: Callback<String>,
    pub on_choose: Callback<AddressChoice>,
    /// Suggestions to show before any typing; used by tests and previews.
    #[prop_or_default]
    pub initial_suggestions: Vec<AddressMatch>,
}

fn placeholder_key(field: AddressField) -> &'static str {
    match field {
        AddressField::Origin | AddressField::PredOrigin => "fields.origin_placeholder",
        AddressField::Destination | AddressField::PredDestination => {
            "fields.destination_placeholder"
        }
    }
}

/// Text filled in for a device position the reverse geocoder could not name.
#[must_use]
pub fn coords_text(coords: LatLng) -> String {
    format!("{:.6}, {:.6}", coords.lat, coords.lon)
}

fn request_suggestions(
    cfg: AppConfig,
    query: String,
    tokens: Rc<RefCell<SearchTokens>>,
    suggestions: UseStateHandle<Vec<AddressMatch>>,
) {
    let token = tokens.borrow_mut().issue();
    wasm_bindgen_futures::spawn_local(async move {
        match crate::services::geocoder::suggest(&cfg, &query).await {
            Ok(found) => {
                if tokens.borrow().is_current(token) {
                    suggestions.set(found);
                }
            }
            Err(err) => log::warn!("address suggestions for {query:?} failed: {err}"),
        }
    });
}

fn locate(
    cfg: AppConfig,
    field: AddressField,
    locating: UseStateHandle<bool>,
    on_choose: Callback<AddressChoice>,
) {
    locating.set(true);
    wasm_bindgen_futures::spawn_local(async move {
        match crate::services::geolocation::current_position().await {
            Ok(coords) => {
                let text = crate::services::geocoder::reverse(&cfg, coords)
                    .await
                    .unwrap_or_else(|| coords_text(coords));
                on_choose.emit(AddressChoice {
                    field,
                    text,
                    coords,
                    current_location: true,
                });
            }
            Err(err) => {
                log::warn!("current location for {field:?}: {err}");
                crate::dom::alert(&t("geo.unavailable"));
            }
        }
        locating.set(false);
    });
}

#[function_component(AddressInput)]
pub fn address_input(p: &Props) -> Html {
    let suggestions = {
        let initial = p.initial_suggestions.clone();
        use_state(move || initial)
    };
    let tokens = use_mut_ref(SearchTokens::new);
    let locating = use_state(|| false);

    let oninput = {
        let cfg = p.config.clone();
        let on_input = p.on_input.clone();
        let tokens = tokens.clone();
        let suggestions = suggestions.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let query = input.value();
            on_input.emit(query.clone());
            if should_suggest(&query, &cfg) {
                request_suggestions(cfg.clone(), query, tokens.clone(), suggestions.clone());
            } else {
                tokens.borrow_mut().issue();
                suggestions.set(Vec::new());
            }
        })
    };

    let on_locate = {
        let cfg = p.config.clone();
        let field = p.field;
        let locating = locating.clone();
        let on_choose = p.on_choose.clone();
        Callback::from(move |_: MouseEvent| {
            locate(cfg.clone(), field, locating.clone(), on_choose.clone());
        })
    };

    let input_id = p.field.input_id();
    let list_id = format!("{input_id}-suggestions");
    let field_label = t(p.field.i18n_key());
    let mut list_args = BTreeMap::new();
    list_args.insert("field", field_label.as_str());
    let list_label = tr("fields.suggestions", Some(&list_args));

    let items = suggestions.iter().cloned().map(|found| {
        let onclick = {
            let on_choose = p.on_choose.clone();
            let field = p.field;
            let tokens = tokens.clone();
            let suggestions = suggestions.clone();
            let found = found.clone();
            Callback::from(move |_: MouseEvent| {
                tokens.borrow_mut().issue();
                suggestions.set(Vec::new());
                on_choose.emit(AddressChoice {
                    field,
                    text: found.display_name.clone(),
                    coords: found.coords,
                    current_location: false,
                });
            })
        };
        html! {
            <li class="suggestion-item" role="option" {onclick}>{ found.display_name.clone() }</li>
        }
    });

    html! {
        <div class="form-group address-group">
            <label for={input_id}>{ field_label.clone() }</label>
            <div class="address-row">
                <input
                    type="text"
                    id={input_id}
                    value={p.value.clone()}
                    placeholder={t(placeholder_key(p.field))}
                    autocomplete="off"
                    aria-controls={list_id.clone()}
                    {oninput}
                />
                <button
                    type="button"
                    class="location-btn"
                    onclick={on_locate}
                    disabled={*locating}
                    aria-label={t("fields.use_location")}
                    title={t("fields.use_location")}
                >
                    { if *locating { t("fields.locating") } else { "📍".to_string() } }
                </button>
            </div>
            if !suggestions.is_empty() {
                <ul id={list_id} class="suggestions" role="listbox" aria-label={list_label}>
                    { for items }
                </ul>
            }
        </div>
    }
}
