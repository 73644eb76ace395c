use smart_traffic_core::geocode::{
    lookup_params, parse_matches, parse_reverse, reverse_endpoint, reverse_params,
    search_endpoint, suggestion_params,
};
use smart_traffic_core::{AddressMatch, ApiError, AppConfig, LatLng};

use crate::dom;

#[allow(clippy::future_not_send)]
async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| ApiError::Network(dom::js_error_message(&err)))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    dom::response_text(&response)
        .await
        .map_err(|err| ApiError::Network(dom::js_error_message(&err)))
}

/// Country-filtered suggestions for a partially typed address.
///
/// # Errors
/// Returns an error when the geocoder is unreachable or replies with garbage.
#[allow(clippy::future_not_send)]
pub async fn suggest(cfg: &AppConfig, query: &str) -> Result<Vec<AddressMatch>, ApiError> {
    let url = dom::with_query(&search_endpoint(cfg), &suggestion_params(query, cfg));
    let body = get_text(&url).await?;
    Ok(parse_matches(&body)?)
}

/// Best single match for a typed address; `None` on any failure.
#[allow(clippy::future_not_send)]
pub async fn lookup(cfg: &AppConfig, address: &str) -> Option<LatLng> {
    let url = dom::with_query(&search_endpoint(cfg), &lookup_params(address));
    match get_text(&url).await.and_then(|body| parse_matches(&body).map_err(ApiError::from)) {
        Ok(matches) => matches.first().map(|m| m.coords),
        Err(err) => {
            log::warn!("geocoding {address:?} failed: {err}");
            None
        }
    }
}

/// Display name for a coordinate; `None` on any failure.
#[allow(clippy::future_not_send)]
pub async fn reverse(cfg: &AppConfig, coords: LatLng) -> Option<String> {
    let url = dom::with_query(&reverse_endpoint(cfg), &reverse_params(coords));
    match get_text(&url).await.and_then(|body| parse_reverse(&body).map_err(ApiError::from)) {
        Ok(name) => name,
        Err(err) => {
            log::warn!("reverse geocoding failed: {err}");
            None
        }
    }
}
