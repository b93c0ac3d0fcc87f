//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals of a year view into a single
//! struct provided via `use_context_provider`. Child components retrieve it
//! with `use_context::<AppState>()`.

use dioxus::prelude::*;
use hc_survey::subdistrict::SubdistrictId;

/// Shared state of one year view.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Mirror of the controller's selection; written only by its subscriber
    pub selected: Signal<SubdistrictId>,
    /// Error message if the bundled data could not be loaded
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new(selected: SubdistrictId, error_msg: Option<String>) -> Self {
        Self {
            selected: Signal::new(selected),
            error_msg: Signal::new(error_msg),
        }
    }
}
