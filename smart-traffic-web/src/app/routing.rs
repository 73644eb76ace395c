use crate::app::Tab;
use crate::router::Route;

/// Tab shown for `route`; `None` renders the not-found page.
///
/// Without a matched route the app opens on predictions.
#[must_use]
pub fn active_tab(route: Option<&Route>) -> Option<Tab> {
    route.map_or(Some(Tab::default()), Route::to_tab)
}

/// Route to push when `tab` is picked, or `None` when already there.
#[must_use]
pub fn next_route_for_tab(tab: Tab, current_route: Option<&Route>) -> Option<Route> {
    if active_tab(current_route) == Some(tab) {
        None
    } else {
        Some(Route::from_tab(tab))
    }
}
