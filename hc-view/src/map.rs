//! Map lifecycle: one-shot mount, one pin per named subdistrict, the
//! district boundary overlay and recentering.
//!
//! The drawing itself goes through [`MapBackend`]; `hc-chart-ui` drives
//! Leaflet with it, tests record the calls.

use hc_survey::boundary::{BoundaryPolygon, BoundaryStyle, FeatureCollection};
use hc_survey::config::DashboardConfig;
use hc_survey::geo::{AnchorTable, GeoAnchor};
use hc_survey::subdistrict::SubdistrictId;
use std::rc::Rc;

/// Invoked with the subdistrict whose pin was clicked.
pub type SelectHandler = Rc<dyn Fn(SubdistrictId)>;

/// Primitive operations on a tile map bound to one DOM container.
pub trait MapBackend {
    /// Create the map in `container_id`. Pin clicks are reported to `on_select`.
    fn create(&mut self, container_id: &str, center: GeoAnchor, on_select: SelectHandler);
    fn add_tile_layer(&mut self, url_template: &str, min_zoom: u8, max_zoom: u8);
    fn add_marker(&mut self, id: &SubdistrictId, anchor: GeoAnchor, popup: &str);
    fn add_boundary(&mut self, boundary: &BoundaryPolygon, style: &BoundaryStyle);
    fn set_view(&mut self, anchor: GeoAnchor);
    /// Recompute the container size and reflow tiles.
    fn invalidate_size(&mut self);
    /// Remove the map and release its layers, markers and click handler.
    fn destroy(&mut self);
}

/// A boundary fetch issued by [`MapView::mount`].
///
/// Carries the mount generation so a response arriving after the map was
/// torn down is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRequest {
    pub url: String,
    pub district: String,
    generation: u64,
}

pub struct MapView<B: MapBackend> {
    backend: B,
    anchors: AnchorTable,
    tile_url: String,
    min_zoom: u8,
    max_zoom: u8,
    boundary_url: String,
    district_name: String,
    container_id: Option<String>,
    generation: u64,
    tile_layers: usize,
    pins: Vec<SubdistrictId>,
    boundary_drawn: bool,
}

impl<B: MapBackend> MapView<B> {
    pub fn new(backend: B, config: &DashboardConfig) -> Self {
        Self {
            backend,
            anchors: config.anchors(),
            tile_url: config.tile_url.clone(),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            boundary_url: config.boundary_url.clone(),
            district_name: config.district_name.clone(),
            container_id: None,
            generation: 0,
            tile_layers: 0,
            pins: Vec::new(),
            boundary_drawn: false,
        }
    }

    /// Create the map with its tile layer and pins.
    ///
    /// Returns the boundary fetch to issue, or `None` if the map is already
    /// mounted, in which case nothing is added.
    pub fn mount(
        &mut self,
        container_id: &str,
        center: GeoAnchor,
        on_select: SelectHandler,
    ) -> Option<BoundaryRequest> {
        if let Some(existing) = &self.container_id {
            log::debug!("map already mounted in #{}; ignoring mount of #{}", existing, container_id);
            return None;
        }

        self.backend.create(container_id, center, on_select);
        self.backend
            .add_tile_layer(&self.tile_url, self.min_zoom, self.max_zoom);
        self.tile_layers = 1;

        let pins: Vec<(SubdistrictId, GeoAnchor)> = self
            .anchors
            .pins()
            .map(|(id, anchor)| (id.clone(), anchor))
            .collect();
        for (id, anchor) in pins {
            self.backend.add_marker(&id, anchor, &id.display_name());
            self.pins.push(id);
        }

        self.generation += 1;
        self.container_id = Some(container_id.to_string());
        log::info!("map mounted in #{} with {} pins", container_id, self.pins.len());

        Some(BoundaryRequest {
            url: self.boundary_url.clone(),
            district: self.district_name.clone(),
            generation: self.generation,
        })
    }

    /// Draw the boundary from a completed fetch.
    ///
    /// Failures are logged and leave the map as it is. Returns true if the
    /// overlay was added.
    pub fn apply_boundary(&mut self, request: &BoundaryRequest, body: hc_survey::Result<String>) -> bool {
        if self.container_id.is_none() || request.generation != self.generation {
            log::info!("map was torn down before the boundary arrived; discarding it");
            return false;
        }
        if self.boundary_drawn {
            return false;
        }

        let json = match body {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Error loading the boundary GeoJSON from {}: {}", request.url, e);
                return false;
            }
        };
        let collection = match FeatureCollection::from_json(&json) {
            Ok(collection) => collection,
            Err(e) => {
                log::warn!("Boundary GeoJSON from {} is not a FeatureCollection: {}", request.url, e);
                return false;
            }
        };

        let boundary = collection.district_boundary(&request.district);
        if boundary.is_empty() {
            log::warn!("No boundary features for district '{}'", request.district);
            return false;
        }
        self.backend.add_boundary(&boundary, &BoundaryStyle::default());
        self.boundary_drawn = true;
        log::info!(
            "boundary overlay added ({} features for {})",
            boundary.features().len(),
            request.district
        );
        true
    }

    /// Pan and zoom to the anchor of `id`.
    pub fn recenter(&mut self, id: &str) {
        if self.container_id.is_none() {
            return;
        }
        self.backend.set_view(self.anchors.get(id));
    }

    pub fn invalidate(&mut self) {
        if self.container_id.is_some() {
            self.backend.invalidate_size();
        }
    }

    /// Destroy the map. A later [`mount`](Self::mount) starts from scratch.
    pub fn unmount(&mut self) {
        if let Some(container_id) = self.container_id.take() {
            self.backend.destroy();
            self.tile_layers = 0;
            self.pins.clear();
            self.boundary_drawn = false;
            self.generation += 1;
            log::info!("map in #{} destroyed", container_id);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.container_id.is_some()
    }

    pub fn container_id(&self) -> Option<&str> {
        self.container_id.as_deref()
    }

    pub fn tile_layer_count(&self) -> usize {
        self.tile_layers
    }

    pub fn pins(&self) -> &[SubdistrictId] {
        &self.pins
    }

    pub fn has_boundary(&self) -> bool {
        self.boundary_drawn
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
