//! Framework-independent controllers for a year view.
//!
//! - `store`: the observable selection shared by map, sidebar and chart grid
//! - `map`: map lifecycle (one-shot mount, pins, boundary overlay) over a
//!   [`map::MapBackend`], so the browser map can be swapped for a recorder in tests
//! - `grid`: chart card and sidebar view models
//! - `year_view`: wires the above together for one survey year

pub mod grid;
pub mod map;
pub mod store;
pub mod year_view;

pub use year_view::{selection_handler, YearView};
