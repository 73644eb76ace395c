//! Coordinates, per-field address selections, and device location tracking
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when the coordinate lies inside the valid latitude/longitude ranges.
    #[must_use]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Bengaluru city centre, used whenever no better position is known.
pub const DEFAULT_CENTER: LatLng = LatLng::new(12.9716, 77.5946);

const CITY_FALLBACKS: [(&str, LatLng); 4] = [
    ("bangalore", LatLng::new(12.9716, 77.5946)),
    ("mysore", LatLng::new(12.2958, 76.6394)),
    ("chennai", LatLng::new(13.0827, 80.2707)),
    ("mumbai", LatLng::new(19.0760, 72.8777)),
];

/// Resolve a free-text address against the built-in city table.
///
/// Used when the geocoder has no match. Falls back to `default` when no city
/// name appears in the address.
#[must_use]
pub fn fallback_coords(address: &str, default: LatLng) -> LatLng {
    let needle = address.to_lowercase();
    CITY_FALLBACKS
        .iter()
        .find(|(city, _)| needle.contains(city))
        .map_or(default, |(_, coords)| *coords)
}

/// Address inputs that can remember a selected coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressField {
    Origin,
    Destination,
    PredOrigin,
    PredDestination,
}

impl AddressField {
    pub const ALL: [Self; 4] = [
        Self::Origin,
        Self::Destination,
        Self::PredOrigin,
        Self::PredDestination,
    ];

    /// DOM id of the input element bound to this field.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::PredOrigin => "pred-origin",
            Self::PredDestination => "pred-destination",
        }
    }

    /// Whether choosing an address for this field should move the map view.
    #[must_use]
    pub const fn focuses_map(self) -> bool {
        matches!(self, Self::Origin | Self::Destination)
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Origin | Self::PredOrigin => "fields.origin",
            Self::Destination | Self::PredDestination => "fields.destination",
        }
    }
}

/// Last coordinate chosen for each address field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCoords {
    origin: Option<LatLng>,
    destination: Option<LatLng>,
    pred_origin: Option<LatLng>,
    pred_destination: Option<LatLng>,
}

impl FieldCoords {
    const fn slot_mut(&mut self, field: AddressField) -> &mut Option<LatLng> {
        match field {
            AddressField::Origin => &mut self.origin,
            AddressField::Destination => &mut self.destination,
            AddressField::PredOrigin => &mut self.pred_origin,
            AddressField::PredDestination => &mut self.pred_destination,
        }
    }

    #[must_use]
    pub const fn get(&self, field: AddressField) -> Option<LatLng> {
        match field {
            AddressField::Origin => self.origin,
            AddressField::Destination => self.destination,
            AddressField::PredOrigin => self.pred_origin,
            AddressField::PredDestination => self.pred_destination,
        }
    }

    pub fn set(&mut self, field: AddressField, coords: LatLng) {
        *self.slot_mut(field) = Some(coords);
    }

    pub fn clear(&mut self, field: AddressField) {
        *self.slot_mut(field) = None;
    }
}

/// A map viewport request: where to centre and at which zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

/// Tracks the most recent device position fix.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTracker {
    user: Option<LatLng>,
    default_center: LatLng,
    default_zoom: u8,
    recenter_zoom: u8,
}

impl LocationTracker {
    #[must_use]
    pub const fn new(default_center: LatLng, default_zoom: u8, recenter_zoom: u8) -> Self {
        Self {
            user: None,
            default_center,
            default_zoom,
            recenter_zoom,
        }
    }

    pub fn update(&mut self, position: LatLng) {
        self.user = Some(position);
    }

    #[must_use]
    pub const fn user_position(&self) -> Option<LatLng> {
        self.user
    }

    /// Initial map centre: the user fix when known, otherwise the default centre.
    #[must_use]
    pub fn initial_center(&self) -> LatLng {
        self.user.unwrap_or(self.default_center)
    }

    /// View for the "recenter" control.
    #[must_use]
    pub fn recenter(&self) -> MapView {
        self.user.map_or(
            MapView {
                center: self.default_center,
                zoom: self.default_zoom,
            },
            |center| MapView {
                center,
                zoom: self.recenter_zoom,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_city_substrings_case_insensitively() {
        let coords = fallback_coords("Central Station, MUMBAI", DEFAULT_CENTER);
        assert_eq!(coords, LatLng::new(19.0760, 72.8777));
        let coords = fallback_coords("Palace Road mysore", DEFAULT_CENTER);
        assert_eq!(coords, LatLng::new(12.2958, 76.6394));
    }

    #[test]
    fn fallback_uses_default_for_unknown_places() {
        let default = LatLng::new(1.0, 2.0);
        assert_eq!(fallback_coords("Atlantis", default), default);
    }

    #[test]
    fn field_coords_are_independent_per_field() {
        let mut coords = FieldCoords::default();
        coords.set(AddressField::Origin, LatLng::new(1.0, 1.0));
        coords.set(AddressField::PredOrigin, LatLng::new(2.0, 2.0));
        assert_eq!(coords.get(AddressField::Origin), Some(LatLng::new(1.0, 1.0)));
        assert_eq!(
            coords.get(AddressField::PredOrigin),
            Some(LatLng::new(2.0, 2.0))
        );
        assert_eq!(coords.get(AddressField::Destination), None);

        coords.set(AddressField::Origin, LatLng::new(3.0, 3.0));
        assert_eq!(coords.get(AddressField::Origin), Some(LatLng::new(3.0, 3.0)));
        coords.clear(AddressField::Origin);
        assert_eq!(coords.get(AddressField::Origin), None);
    }

    #[test]
    fn only_route_fields_focus_the_map() {
        assert!(AddressField::Origin.focuses_map());
        assert!(AddressField::Destination.focuses_map());
        assert!(!AddressField::PredOrigin.focuses_map());
        assert!(!AddressField::PredDestination.focuses_map());
    }

    #[test]
    fn recenter_prefers_user_fix() {
        let mut tracker = LocationTracker::new(DEFAULT_CENTER, 12, 15);
        assert_eq!(
            tracker.recenter(),
            MapView {
                center: DEFAULT_CENTER,
                zoom: 12
            }
        );
        let here = LatLng::new(12.5, 77.1);
        tracker.update(here);
        assert_eq!(tracker.recenter(), MapView { center: here, zoom: 15 });
        assert_eq!(tracker.initial_center(), here);
    }

    #[test]
    fn validity_checks_ranges() {
        assert!(DEFAULT_CENTER.is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -181.0).is_valid());
    }
}
