//! District boundary overlay.
//!
//! The boundary service returns a GeoJSON FeatureCollection covering the
//! whole survey area; only features whose `properties.district` matches the
//! configured district are drawn.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single GeoJSON feature. Geometry is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Value,
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl Feature {
    pub fn district(&self) -> Option<&str> {
        self.properties.get("district").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Features belonging to `district`, compared exactly.
    pub fn district_boundary(&self, district: &str) -> BoundaryPolygon {
        BoundaryPolygon {
            features: self
                .features
                .iter()
                .filter(|f| f.district() == Some(district))
                .cloned()
                .collect(),
        }
    }
}

/// The decorative overlay: feature shapes of a single district.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BoundaryPolygon {
    features: Vec<Feature>,
}

impl BoundaryPolygon {
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features as a JSON array, the shape `L.geoJSON` accepts.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.features)?)
    }
}

/// Stroke and fill of the boundary overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryStyle {
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub weight: u32,
}

impl Default for BoundaryStyle {
    fn default() -> Self {
        Self {
            color: "#FF0000",
            fill_color: "#ffffff",
            fill_opacity: 0.5,
            weight: 2,
        }
    }
}
