//! Compile-time dashboard configuration.

use crate::geo::AnchorTable;
use crate::subdistrict::SubdistrictId;

/// OpenStreetMap tile URL template.
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Boundary GeoJSON FeatureCollection for the survey area.
pub const BOUNDARY_URL: &str = "https://seaco.onrender.com/SEACO.geojson";

/// Value of `properties.district` that selects the boundary features to draw.
pub const DISTRICT_NAME: &str = "Segamat";

/// Settings shared by both year views.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub district_name: String,
    pub boundary_url: String,
    pub tile_url: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Subdistrict selected on view entry.
    pub default_subdistrict: SubdistrictId,
    /// Zoom when focusing a named subdistrict.
    pub selection_zoom: u8,
    /// Zoom when focusing the whole district.
    pub overall_zoom: u8,
    pub map_height_px: u32,
    pub chart_height_px: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            district_name: DISTRICT_NAME.to_string(),
            boundary_url: BOUNDARY_URL.to_string(),
            tile_url: OSM_TILE_URL.to_string(),
            min_zoom: 5,
            max_zoom: 18,
            default_subdistrict: SubdistrictId::from("BEKOK"),
            selection_zoom: 14,
            overall_zoom: 10,
            map_height_px: 400,
            chart_height_px: 400,
        }
    }
}

impl DashboardConfig {
    pub fn anchors(&self) -> AnchorTable {
        AnchorTable::segamat(self.selection_zoom, self.overall_zoom)
    }
}
