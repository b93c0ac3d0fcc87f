//! Segamat Health 2018 summary.
//!
//! Shows, for one subdistrict at a time, the 2018 community health survey
//! results as a grid of Chart.js charts, next to a Leaflet map of the
//! district and a subdistrict list. Picking a pin or a list entry switches
//! every part of the page to that subdistrict.
//!
//! `build.rs` pivots `fixtures/health_2018.csv` into JSON at compile time;
//! it is embedded with `include_str!`.

use dioxus::prelude::*;
use hc_chart_ui::components::YearDashboard;
use hc_survey::year::SurveyYear;

const HEALTH_2018_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/health_2018.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("starting {} view", SurveyYear::Y2018.route());
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("healthchart2018-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        YearDashboard {
            year: SurveyYear::Y2018,
            data_json: HEALTH_2018_JSON,
        }
    }
}
