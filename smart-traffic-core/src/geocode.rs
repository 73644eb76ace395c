//! Geocoding (Nominatim) query parameters and response decoding
//!
//! Parameters are returned as unencoded key/value pairs; each platform
//! encodes them with its own URL facilities.
use serde::Deserialize;

use crate::config::AppConfig;
use crate::geo::LatLng;

/// Raw forward-search hit. Nominatim sends coordinates as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

/// Raw reverse-lookup result.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimReverse {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A decoded address suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressMatch {
    pub display_name: String,
    pub coords: LatLng,
}

impl NominatimPlace {
    #[must_use]
    pub fn to_match(&self) -> Option<AddressMatch> {
        let lat = self.lat.trim().parse::<f64>().ok()?;
        let lon = self.lon.trim().parse::<f64>().ok()?;
        let coords = LatLng::new(lat, lon);
        coords.is_valid().then(|| AddressMatch {
            display_name: self.display_name.clone(),
            coords,
        })
    }
}

/// Whether a typed query is long enough to trigger a suggestion lookup.
#[must_use]
pub fn should_suggest(query: &str, cfg: &AppConfig) -> bool {
    query.chars().count() >= cfg.min_query_len
}

#[must_use]
pub fn search_endpoint(cfg: &AppConfig) -> String {
    format!("{}/search", cfg.geocoder_base.trim_end_matches('/'))
}

#[must_use]
pub fn reverse_endpoint(cfg: &AppConfig) -> String {
    format!("{}/reverse", cfg.geocoder_base.trim_end_matches('/'))
}

/// Parameters for the suggestion dropdown: country-filtered, several hits.
#[must_use]
pub fn suggestion_params(query: &str, cfg: &AppConfig) -> Vec<(&'static str, String)> {
    vec![
        ("format", "json".to_string()),
        ("q", query.to_string()),
        ("limit", cfg.suggestion_limit.to_string()),
        ("countrycodes", cfg.country_codes.clone()),
    ]
}

/// Parameters for resolving a typed address to a single coordinate.
#[must_use]
pub fn lookup_params(address: &str) -> Vec<(&'static str, String)> {
    vec![
        ("format", "json".to_string()),
        ("q", address.to_string()),
        ("limit", "1".to_string()),
    ]
}

#[must_use]
pub fn reverse_params(coords: LatLng) -> Vec<(&'static str, String)> {
    vec![
        ("format", "json".to_string()),
        ("lat", coords.lat.to_string()),
        ("lon", coords.lon.to_string()),
    ]
}

/// Decode a forward-search body, skipping entries with unusable coordinates.
///
/// # Errors
///
/// Returns an error if the body is not a JSON array of places.
pub fn parse_matches(body: &str) -> Result<Vec<AddressMatch>, serde_json::Error> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)?;
    Ok(places.iter().filter_map(NominatimPlace::to_match).collect())
}

/// Decode a reverse-lookup body into a display name.
///
/// # Errors
///
/// Returns an error if the body is not a JSON object.
pub fn parse_reverse(body: &str) -> Result<Option<String>, serde_json::Error> {
    let reverse: NominatimReverse = serde_json::from_str(body)?;
    Ok(reverse.display_name.filter(|name| !name.trim().is_empty()))
}
