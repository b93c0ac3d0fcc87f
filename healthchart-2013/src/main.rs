//! Segamat Health 2013 summary: the same subdistrict view as the 2018 app,
//! driven by the 2013 catalog and survey table.

use dioxus::prelude::*;
use hc_chart_ui::components::YearDashboard;
use hc_survey::year::SurveyYear;

// Pivoted by build.rs from fixtures/health_2013.csv
const HEALTH_2013_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/health_2013.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("healthchart2013-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        YearDashboard {
            year: SurveyYear::Y2013,
            data_json: HEALTH_2013_JSON,
        }
    }
}
