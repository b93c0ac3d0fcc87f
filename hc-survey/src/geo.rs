//! Map anchors for the Segamat subdistricts.

use crate::subdistrict::{SubdistrictId, OVERALL};
use serde::Serialize;

/// District centroid, also the anchor of the "Overall" pseudo-subdistrict.
pub const DISTRICT_CENTROID: (f64, f64) = (2.5147, 102.8151);

/// (id, latitude, longitude) for every named subdistrict, in sidebar order.
pub const SUBDISTRICT_COORDINATES: [(&str, f64, f64); 5] = [
    ("BEKOK", 2.3869, 103.0544),
    ("CHAAH", 2.2384, 103.0573),
    ("GEMEREH", 2.5048, 102.8093),
    ("JABI", 2.5085, 102.8193),
    ("SUNGAI_SEGAMAT", 2.4873, 102.8212),
];

/// A map center together with the zoom level used when focusing on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoAnchor {
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
}

impl GeoAnchor {
    pub fn new(lat: f64, lon: f64, zoom: u8) -> Self {
        Self { lat, lon, zoom }
    }
}

/// Ordered lookup from subdistrict to anchor.
///
/// Lookups never fail: an id without an anchor resolves to the
/// "Overall" anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorTable {
    anchors: Vec<(SubdistrictId, GeoAnchor)>,
    overall: GeoAnchor,
}

impl AnchorTable {
    /// Anchors for the Segamat district: named subdistricts at
    /// `selection_zoom`, the centroid at `overall_zoom`.
    pub fn segamat(selection_zoom: u8, overall_zoom: u8) -> Self {
        let anchors = SUBDISTRICT_COORDINATES
            .iter()
            .map(|&(id, lat, lon)| (SubdistrictId::from(id), GeoAnchor::new(lat, lon, selection_zoom)))
            .collect();
        Self {
            anchors,
            overall: GeoAnchor::new(DISTRICT_CENTROID.0, DISTRICT_CENTROID.1, overall_zoom),
        }
    }

    pub fn get(&self, id: &str) -> GeoAnchor {
        if id == OVERALL {
            return self.overall;
        }
        self.anchors
            .iter()
            .find(|(key, _)| key.as_str() == id)
            .map(|(_, anchor)| *anchor)
            .unwrap_or(self.overall)
    }

    pub fn overall(&self) -> GeoAnchor {
        self.overall
    }

    /// Every named subdistrict that gets a pin on the map ("Overall" excluded).
    pub fn pins(&self) -> impl Iterator<Item = (&SubdistrictId, GeoAnchor)> {
        self.anchors.iter().map(|(id, anchor)| (id, *anchor))
    }
}
