//! Web-specific wiring of the routing core
//!
//! Re-exports the core types and supplies the browser's configuration and
//! traffic signal seed.

pub use smart_traffic_core::*;

use crate::paths;

/// Signal driving scores, live labels, and alerts in the browser.
pub type WebSignal = SimulatedSignal;

/// Planner type held by the application state.
pub type WebPlanner = RoutePlanner<WebSignal>;

/// Configuration with any compile-time backend override applied.
#[must_use]
pub fn app_config() -> AppConfig {
    let cfg = AppConfig::default_config();
    match paths::api_base_override() {
        Some(base) => cfg.with_api_base(&base),
        None => cfg,
    }
}

/// Seed for the simulated signal: wall-clock time in the browser, fixed elsewhere.
#[must_use]
pub fn signal_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().to_bits()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5EED_7AFF
    }
}

#[must_use]
pub fn new_planner() -> WebPlanner {
    RoutePlanner::new(app_config(), SimulatedSignal::from_seed(signal_seed()))
}
