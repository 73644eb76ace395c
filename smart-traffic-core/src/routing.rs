//! Routing-service (OSRM) request building and response decoding
use serde::Deserialize;
use thiserror::Error;

use crate::geo::LatLng;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("routing service unreachable: {0}")]
    Network(String),
    #[error("routing service returned status {0}")]
    Status(u16),
    #[error("routing service reported {code}: {message}")]
    Service { code: String, message: String },
    #[error("routing service returned no routes")]
    NoRoute,
    #[error("malformed routing response: {0}")]
    Decode(String),
}

/// One route as delivered by the routing service, before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub total_distance_m: f64,
    pub total_time_s: f64,
    pub instructions: Vec<String>,
    pub coordinates: Vec<LatLng>,
}

/// URL requesting driving routes (with alternatives) between two points.
#[must_use]
pub fn route_url(router_base: &str, from: LatLng, to: LatLng) -> String {
    format!(
        "{}/{:.6},{:.6};{:.6},{:.6}?overview=full&alternatives=true&steps=true&geometries=geojson",
        router_base.trim_end_matches('/'),
        from.lon,
        from.lat,
        to.lon,
        to.lat
    )
}

#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub geometry: Option<OsrmGeometry>,
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    /// GeoJSON order: `[lon, lat]`.
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmLeg {
    #[serde(default)]
    pub steps: Vec<OsrmStep>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmStep {
    #[serde(default)]
    pub name: String,
    pub maneuver: OsrmManeuver,
}

#[derive(Debug, Deserialize)]
pub struct OsrmManeuver {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub bearing_after: Option<f64>,
    #[serde(default)]
    pub exit: Option<u32>,
}

/// Decode a raw routing-service body.
///
/// # Errors
///
/// Returns [`RoutingError::Decode`] for malformed JSON and the errors of
/// [`OsrmResponse::into_summaries`] otherwise.
pub fn parse_routes(body: &str) -> Result<Vec<RouteSummary>, RoutingError> {
    let response: OsrmResponse =
        serde_json::from_str(body).map_err(|err| RoutingError::Decode(err.to_string()))?;
    response.into_summaries()
}

impl OsrmResponse {
    /// Convert to route summaries in service order.
    ///
    /// # Errors
    ///
    /// Fails when the service reports a non-`Ok` code or returns no routes.
    pub fn into_summaries(self) -> Result<Vec<RouteSummary>, RoutingError> {
        if self.code != "Ok" {
            return Err(RoutingError::Service {
                message: self.message.unwrap_or_default(),
                code: self.code,
            });
        }
        if self.routes.is_empty() {
            return Err(RoutingError::NoRoute);
        }
        Ok(self.routes.into_iter().map(OsrmRoute::into_summary).collect())
    }
}

impl OsrmRoute {
    fn into_summary(self) -> RouteSummary {
        let coordinates = self
            .geometry
            .map(|geometry| {
                geometry
                    .coordinates
                    .into_iter()
                    .map(|[lon, lat]| LatLng::new(lat, lon))
                    .collect()
            })
            .unwrap_or_default();
        let instructions = self
            .legs
            .iter()
            .flat_map(|leg| leg.steps.iter())
            .map(instruction_text)
            .collect();
        RouteSummary {
            total_distance_m: self.distance,
            total_time_s: self.duration,
            instructions,
            coordinates,
        }
    }
}

/// Eight-point compass direction for a bearing in degrees.
#[must_use]
pub fn compass_direction(bearing: f64) -> &'static str {
    const POINTS: [&str; 8] = [
        "north",
        "northeast",
        "east",
        "southeast",
        "south",
        "southwest",
        "west",
        "northwest",
    ];
    let normalized = bearing.rem_euclid(360.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sector = ((normalized + 22.5) / 45.0) as usize % POINTS.len();
    POINTS[sector]
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn onto(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!(" onto {name}")
    }
}

/// Human-readable text for one step.
#[must_use]
pub fn instruction_text(step: &OsrmStep) -> String {
    let maneuver = &step.maneuver;
    let modifier = maneuver.modifier.as_deref().unwrap_or("straight");
    let name = step.name.trim();
    match maneuver.kind.as_str() {
        "depart" => {
            let heading = compass_direction(maneuver.bearing_after.unwrap_or(0.0));
            if name.is_empty() {
                format!("Head {heading}")
            } else {
                format!("Head {heading} on {name}")
            }
        }
        "arrive" => "You have arrived at your destination".to_string(),
        "roundabout" | "rotary" => match maneuver.exit {
            Some(exit) => format!(
                "Enter the roundabout and take the {} exit{}",
                ordinal(exit),
                onto(name)
            ),
            None => format!("Enter the roundabout{}", onto(name)),
        },
        "merge" => format!("Merge {modifier}{}", onto(name)),
        "on ramp" => format!("Take the ramp{}", onto(name)),
        "off ramp" => format!("Take the exit{}", onto(name)),
        "fork" => format!("Keep {modifier} at the fork{}", onto(name)),
        "end of road" => format!("Turn {modifier} at the end of the road{}", onto(name)),
        "new name" | "continue" if modifier == "straight" => {
            format!("Continue straight{}", onto(name))
        }
        "new name" | "continue" => format!("Continue {modifier}{}", onto(name)),
        _ if modifier == "straight" => format!("Go straight{}", onto(name)),
        _ if modifier == "uturn" => format!("Make a U-turn{}", onto(name)),
        _ => format!("Turn {modifier}{}", onto(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": "Ok",
        "routes": [
            {
                "distance": 15234.5,
                "duration": 1321.0,
                "geometry": { "type": "LineString", "coordinates": [[77.5946, 12.9716], [77.61, 12.95]] },
                "legs": [{ "steps": [
                    { "name": "MG Road", "maneuver": { "type": "depart", "bearing_after": 88 } },
                    { "name": "Brigade Road", "maneuver": { "type": "turn", "modifier": "left" } },
                    { "name": "", "maneuver": { "type": "roundabout", "modifier": "right", "exit": 2 } },
                    { "name": "", "maneuver": { "type": "arrive" } }
                ]}]
            },
            { "distance": 17000, "duration": 1500, "legs": [] }
        ]
    }"#;

    #[test]
    fn parses_routes_and_swaps_coordinates() {
        let routes = parse_routes(SAMPLE).expect("sample parses");
        assert_eq!(routes.len(), 2);
        let first = &routes[0];
        assert!((first.total_distance_m - 15_234.5).abs() < f64::EPSILON);
        assert_eq!(first.coordinates[0], LatLng::new(12.9716, 77.5946));
        assert_eq!(
            first.instructions,
            vec![
                "Head east on MG Road",
                "Turn left onto Brigade Road",
                "Enter the roundabout and take the 2nd exit",
                "You have arrived at your destination",
            ]
        );
        assert!(routes[1].instructions.is_empty());
        assert!(routes[1].coordinates.is_empty());
    }

    #[test]
    fn non_ok_code_is_an_error() {
        let err = parse_routes(r#"{ "code": "NoRoute", "message": "Impossible route" }"#)
            .expect_err("should fail");
        assert_eq!(
            err,
            RoutingError::Service {
                code: "NoRoute".into(),
                message: "Impossible route".into()
            }
        );
        assert_eq!(
            parse_routes(r#"{ "code": "Ok", "routes": [] }"#),
            Err(RoutingError::NoRoute)
        );
        assert!(matches!(parse_routes("<html>"), Err(RoutingError::Decode(_))));
    }

    #[test]
    fn route_url_uses_lon_lat_order() {
        let url = route_url(
            "https://router.example/route/v1/driving/",
            LatLng::new(12.9716, 77.5946),
            LatLng::new(12.2958, 76.6394),
        );
        assert_eq!(
            url,
            "https://router.example/route/v1/driving/77.594600,12.971600;76.639400,12.295800?overview=full&alternatives=true&steps=true&geometries=geojson"
        );
    }

    #[test]
    fn compass_wraps_around() {
        assert_eq!(compass_direction(0.0), "north");
        assert_eq!(compass_direction(350.0), "north");
        assert_eq!(compass_direction(135.0), "southeast");
        assert_eq!(compass_direction(-90.0), "west");
    }

    #[test]
    fn ordinals_handle_teens() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(13), "13th");
    }
}
