//! Dioxus RSX components for the health survey year views.

mod chart_grid;
mod error_display;
mod map_panel;
mod sidebar;
mod summary_header;
mod year_dashboard;

pub use chart_grid::{ChartGrid, ChartPanel};
pub use error_display::ErrorDisplay;
pub use map_panel::MapPanel;
pub use sidebar::Sidebar;
pub use summary_header::SummaryHeader;
pub use year_dashboard::YearDashboard;
