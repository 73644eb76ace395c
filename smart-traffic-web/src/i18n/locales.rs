use serde_json::Value;

/// A bundled translation file and the name shown in the language picker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    source: &'static str,
}

const ENGLISH: LocaleMeta = LocaleMeta {
    code: "en",
    name: "English",
    source: include_str!("../../i18n/en.json"),
};

static LOCALES: [LocaleMeta; 2] = [
    ENGLISH,
    LocaleMeta {
        code: "hi",
        name: "हिन्दी",
        source: include_str!("../../i18n/hi.json"),
    },
];

/// Supported locales with their native names, English first.
#[must_use]
pub fn locales() -> &'static [LocaleMeta] {
    &LOCALES
}

#[must_use]
pub fn find(lang: &str) -> Option<&'static LocaleMeta> {
    LOCALES.iter().find(|meta| meta.code == lang)
}

#[must_use]
pub fn english() -> &'static LocaleMeta {
    &LOCALES[0]
}

impl LocaleMeta {
    /// Parsed translation tree; `None` if the bundled JSON is malformed.
    #[must_use]
    pub fn strings(&self) -> Option<Value> {
        match serde_json::from_str(self.source) {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!("locale {} failed to parse: {err}", self.code);
                None
            }
        }
    }
}
