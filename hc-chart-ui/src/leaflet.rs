//! Leaflet implementation of [`MapBackend`].

use crate::js_bridge;
use hc_survey::boundary::{BoundaryPolygon, BoundaryStyle};
use hc_survey::geo::GeoAnchor;
use hc_survey::subdistrict::SubdistrictId;
use hc_view::map::{MapBackend, SelectHandler};
use serde_json::json;
use wasm_bindgen::prelude::*;

/// Drives one Leaflet map through `window.hcMapCall`.
///
/// Owns the pin click closure for as long as the map exists.
#[derive(Default)]
pub struct LeafletBackend {
    container_id: String,
    on_select: Option<Closure<dyn Fn(String)>>,
}

impl MapBackend for LeafletBackend {
    fn create(&mut self, container_id: &str, center: GeoAnchor, on_select: SelectHandler) {
        self.container_id = container_id.to_string();

        let callback = Closure::<dyn Fn(String)>::new(move |id: String| {
            on_select(SubdistrictId::from(id));
        });
        js_bridge::register_select_callback(container_id, &callback);
        self.on_select = Some(callback);

        js_bridge::map_call(
            "create",
            json!([container_id, center.lat, center.lon, center.zoom]),
        );
    }

    fn add_tile_layer(&mut self, url_template: &str, min_zoom: u8, max_zoom: u8) {
        js_bridge::map_call(
            "tileLayer",
            json!([self.container_id, url_template, min_zoom, max_zoom]),
        );
    }

    fn add_marker(&mut self, id: &SubdistrictId, anchor: GeoAnchor, popup: &str) {
        js_bridge::map_call(
            "marker",
            json!([self.container_id, id, anchor.lat, anchor.lon, popup]),
        );
    }

    fn add_boundary(&mut self, boundary: &BoundaryPolygon, style: &BoundaryStyle) {
        js_bridge::map_call("boundary", json!([self.container_id, boundary, style]));
    }

    fn set_view(&mut self, anchor: GeoAnchor) {
        js_bridge::map_call(
            "setView",
            json!([self.container_id, anchor.lat, anchor.lon, anchor.zoom]),
        );
    }

    fn invalidate_size(&mut self) {
        js_bridge::map_call("invalidate", json!([self.container_id]));
    }

    fn destroy(&mut self) {
        js_bridge::map_call("destroy", json!([self.container_id]));
        js_bridge::unregister_select_callback(&self.container_id);
        self.on_select = None;
    }
}
