use smart_traffic_core::{
    AppConfig, LatLng, RouteSummary, RoutingError, SearchTicket, fallback_coords, parse_routes,
    route_url,
};

use crate::dom;
use crate::services::geocoder;

/// Driving routes with alternatives between two coordinates.
///
/// # Errors
/// Returns a [`RoutingError`] for network failures, non-2xx replies, and
/// service-reported or malformed responses.
#[allow(clippy::future_not_send)]
pub async fn fetch_routes(
    cfg: &AppConfig,
    from: LatLng,
    to: LatLng,
) -> Result<Vec<RouteSummary>, RoutingError> {
    let url = route_url(&cfg.router_base, from, to);
    let response = dom::fetch_response(&url)
        .await
        .map_err(|err| RoutingError::Network(dom::js_error_message(&err)))?;
    if !response.ok() {
        return Err(RoutingError::Status(response.status()));
    }
    let body = dom::response_text(&response)
        .await
        .map_err(|err| RoutingError::Network(dom::js_error_message(&err)))?;
    parse_routes(&body)
}

#[allow(clippy::future_not_send)]
async fn endpoint(cfg: &AppConfig, address: &str, chosen: Option<LatLng>) -> LatLng {
    if let Some(coords) = chosen {
        return coords;
    }
    match geocoder::lookup(cfg, address).await {
        Some(coords) => coords,
        None => fallback_coords(address, cfg.default_center),
    }
}

/// Resolve both endpoints of a search and fetch its routes.
///
/// # Errors
/// See [`fetch_routes`]; endpoint resolution itself never fails.
#[allow(clippy::future_not_send)]
pub async fn run_search(
    cfg: &AppConfig,
    ticket: &SearchTicket,
) -> Result<Vec<RouteSummary>, RoutingError> {
    let from = endpoint(cfg, &ticket.origin, ticket.origin_coords).await;
    let to = endpoint(cfg, &ticket.destination, ticket.destination_coords).await;
    log::debug!(
        "search {}: ({:.4}, {:.4}) -> ({:.4}, {:.4})",
        ticket.token.value(),
        from.lat,
        from.lon,
        to.lat,
        to.lon
    );
    fetch_routes(cfg, from, to).await
}
