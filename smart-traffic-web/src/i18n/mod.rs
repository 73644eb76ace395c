mod bundle;
mod locales;
mod render;

pub use bundle::{ActiveLocale, current_lang, set_lang};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
