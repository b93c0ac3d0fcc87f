//! Complete view for one survey year: sidebar, summary header, map and
//! chart grid, all following the selection owned by a `YearView`.
//!
//! Data flow:
//! 1. The app embeds its year's pivoted table (`health_<year>.json`) and
//!    passes it in as `data_json`.
//! 2. On first render the table is parsed and a `YearView` is built around
//!    a `LeafletBackend`; the view's selection store is mirrored into the
//!    `selected` signal of `AppState`.
//! 3. When the map container is mounted the map is created and the district
//!    boundary is fetched in the background.
//! 4. Every change of `selected` re-renders the header, the sidebar highlight
//!    and each chart of the grid.

use crate::components::{ChartGrid, ErrorDisplay, MapPanel, Sidebar, SummaryHeader};
use crate::js_bridge;
use crate::leaflet::LeafletBackend;
use crate::state::AppState;
use dioxus::prelude::*;
use hc_survey::config::DashboardConfig;
use hc_survey::stats::YearTable;
use hc_survey::subdistrict::SubdistrictId;
use hc_survey::year::SurveyYear;
use hc_survey::SurveyError;
use hc_view::{selection_handler, YearView};
use std::cell::RefCell;
use std::rc::Rc;

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

type SharedView = Rc<RefCell<YearView<LeafletBackend>>>;

#[derive(Props, Clone, PartialEq)]
pub struct YearDashboardProps {
    pub year: SurveyYear,
    /// `{subdistrict: {label: {n, percentage}}}` as produced by the app's build script
    pub data_json: &'static str,
}

#[component]
pub fn YearDashboard(props: YearDashboardProps) -> Element {
    let year = props.year;
    let data_json = props.data_json;

    let config = use_hook(DashboardConfig::default);

    // Parse once. A broken table still yields a usable (empty) view so the
    // map and sidebar render next to the error.
    let (table, load_error) = use_hook(move || match YearTable::from_json(data_json) {
        Ok(table) => (Rc::new(table), None),
        Err(e) => {
            log::error!("HEALTH {} data failed to parse: {}", year, e);
            (Rc::new(YearTable::default()), Some(e.to_string()))
        }
    });

    let view: SharedView = use_hook({
        let config = config.clone();
        move || {
            Rc::new(RefCell::new(YearView::new(
                year,
                table,
                &config,
                LeafletBackend::default(),
            )))
        }
    });

    let state = use_context_provider({
        let view = view.clone();
        move || AppState::new(view.borrow().selected().clone(), load_error)
    });

    // Mirror the store into the signal; the store stays the single source of truth.
    let subscription = use_hook({
        let view = view.clone();
        move || {
            let mut selected = state.selected;
            view.borrow_mut()
                .subscribe(move |id: &SubdistrictId| selected.set(id.clone()))
        }
    });

    use_hook(js_bridge::init_scripts);

    use_drop({
        let view = view.clone();
        move || {
            let mut view = view.borrow_mut();
            view.unsubscribe(subscription);
            view.unmount_map();
            for card in view.chart_grid() {
                js_bridge::destroy_chart(&card.container_id);
            }
        }
    });

    // Redraw the grid whenever the selection changes.
    use_effect({
        let view = view.clone();
        move || {
            let selected = (state.selected)();
            let cards = view.borrow().chart_grid();
            log::debug!("rendering {} charts for {}", cards.len(), selected);
            for card in &cards {
                match card.spec.to_json() {
                    Ok(config_json) => js_bridge::render_chart(&card.container_id, &config_json),
                    Err(e) => log::warn!("chart {} not rendered: {}", card.container_id, e),
                }
            }
        }
    });

    let on_map_mounted = {
        let view = view.clone();
        move |_: ()| mount_map(&view)
    };
    let on_map_resize = {
        let view = view.clone();
        move |_: ()| view.borrow_mut().invalidate_map()
    };
    let on_select = {
        let view = view.clone();
        move |id: SubdistrictId| {
            view.borrow_mut().select(id.as_str());
        }
    };

    let selected = (state.selected)();
    let title = year.summary_title(&selected);
    let (entries, cards) = {
        let view = view.borrow();
        (view.sidebar_entries(), view.chart_grid())
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LEAFLET_CSS_URL }
        document::Script { src: LEAFLET_JS_URL }
        document::Script { src: CHART_JS_URL }

        div {
            class: "hc-year-view",
            style: "display: flex; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",
            Sidebar {
                entries: entries,
                on_select: on_select,
            }
            main {
                style: "flex: 1; padding: 12px 16px; min-width: 0;",
                if let Some(message) = (state.error_msg)() {
                    ErrorDisplay { message: message }
                }
                SummaryHeader { title: title }
                MapPanel {
                    id: year.map_container_id().to_string(),
                    height_px: config.map_height_px,
                    on_mounted: on_map_mounted,
                    on_resize: on_map_resize,
                }
                ChartGrid {
                    cards: cards,
                    chart_height_px: config.chart_height_px,
                }
            }
        }
    }
}

/// Create the map and fetch the district boundary for it.
///
/// The response is applied only if the view still exists; `YearView`
/// itself drops responses that belong to an earlier mount.
fn mount_map(view: &SharedView) {
    let handler = selection_handler(view);
    let Some(request) = view.borrow_mut().mount_map(handler) else {
        return;
    };

    let weak = Rc::downgrade(view);
    spawn(async move {
        let body = js_bridge::fetch_text(&request.url)
            .await
            .map_err(|e| SurveyError::FetchFailed(format!("{e:#}")));
        match weak.upgrade() {
            Some(view) => {
                view.borrow_mut().apply_boundary(&request, body);
            }
            None => log::info!("boundary for {} arrived after the view closed", request.district),
        }
    });
}
