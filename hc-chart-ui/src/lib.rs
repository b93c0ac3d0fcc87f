//! Shared Dioxus components and Chart.js / Leaflet bridge for the year views.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the chart and map JS functions via `js_sys::eval()`
//! - `leaflet`: the Leaflet implementation of `hc_view::map::MapBackend`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components, including the complete `YearDashboard`

pub mod components;
pub mod js_bridge;
pub mod leaflet;
pub mod state;
