use crate::i18n::locales::{LocaleMeta, english, find};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const STORAGE_KEY: &str = "smart_traffic.locale";

/// Translations in effect plus the English tree used for missing keys.
pub struct ActiveLocale {
    pub meta: &'static LocaleMeta,
    pub strings: Value,
    pub english: Rc<Value>,
}

thread_local! {
    static ENGLISH: Rc<Value> =
        Rc::new(english().strings().unwrap_or_else(|| Value::Object(serde_json::Map::new())));
    static ACTIVE: RefCell<ActiveLocale> = RefCell::new(
        activate(&saved_lang()).unwrap_or_else(english_only),
    );
}

fn english_tree() -> Rc<Value> {
    ENGLISH.with(Rc::clone)
}

fn activate(lang: &str) -> Option<ActiveLocale> {
    let meta = find(lang)?;
    let english = english_tree();
    let strings = if meta.code == english().code {
        (*english).clone()
    } else {
        meta.strings()?
    };
    Some(ActiveLocale {
        meta,
        strings,
        english,
    })
}

fn english_only() -> ActiveLocale {
    let english_strings = english_tree();
    ActiveLocale {
        meta: english(),
        strings: (*english_strings).clone(),
        english: english_strings,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| english().code.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        english().code.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
fn reflect_in_document(lang: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute("lang", lang);
    }
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(STORAGE_KEY, lang);
    }
}

pub(super) fn with_active<R>(f: impl FnOnce(&ActiveLocale) -> R) -> R {
    ACTIVE.with(|cell| f(&cell.borrow()))
}

/// Switch the UI language. Unknown codes are ignored.
///
/// In the browser the choice is mirrored to `<html lang>` and remembered in
/// localStorage.
pub fn set_lang(lang: &str) {
    let Some(next) = activate(lang) else {
        log::warn!("ignoring unsupported locale {lang:?}");
        return;
    };
    ACTIVE.with(|cell| cell.replace(next));
    #[cfg(target_arch = "wasm32")]
    reflect_in_document(lang);
}

#[must_use]
pub fn current_lang() -> String {
    with_active(|active| active.meta.code.to_string())
}
