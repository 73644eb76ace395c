//! i18n coverage tests to ensure locale files stay consistent with English

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn every_locale_is_registered() {
    let on_disk = locale_codes();
    let registered: Vec<String> = crate::i18n::locales()
        .iter()
        .map(|meta| meta.code.to_string())
        .collect();
    let mut registered_sorted = registered.clone();
    registered_sorted.sort();
    assert_eq!(on_disk, registered_sorted);
}

#[test]
fn translations_only_use_english_keys() {
    let mut english = BTreeSet::new();
    collect_keys("", &load_locale("en"), &mut english);
    for locale in locale_codes() {
        let mut keys = BTreeSet::new();
        collect_keys("", &load_locale(&locale), &mut keys);
        let unknown: Vec<_> = keys.difference(&english).collect();
        assert!(unknown.is_empty(), "{locale} has unknown keys: {unknown:?}");
    }
}

#[test]
fn traffic_level_keys_exist() {
    let english = load_locale("en");
    for level in smart_traffic_core::TrafficLevel::ALL {
        let mut current = &english;
        for part in level.i18n_key().split('.') {
            current = current
                .get(part)
                .unwrap_or_else(|| panic!("missing {}", level.i18n_key()));
        }
        assert!(current.is_string());
    }
}

#[test]
fn lookups_fall_back_to_english() {
    crate::i18n::set_lang("hi");
    assert_eq!(crate::i18n::t("routes.fallback"), "Live routing unavailable; showing an estimated route.");
    assert_eq!(crate::i18n::t("dashboard.time_saved"), "बचा समय");
    crate::i18n::set_lang("en");
    assert_eq!(crate::i18n::t("no.such.key"), "no.such.key");
}
