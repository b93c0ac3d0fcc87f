//! Controller for one survey year: owns the selection, the map and the
//! data the chart grid is projected from.
//!
//! Sidebar clicks call [`YearView::select`] directly; pin clicks arrive
//! through the handler built by [`selection_handler`]. Either way the map
//! recenters and every subscriber (header, sidebar highlight, chart grid)
//! sees the new selection.

use crate::grid::{chart_grid, sidebar_entries, ChartCard, SidebarEntry};
use crate::map::{BoundaryRequest, MapBackend, MapView, SelectHandler};
use crate::store::{SelectionStore, SubscriptionId};
use hc_survey::config::DashboardConfig;
use hc_survey::geo::AnchorTable;
use hc_survey::stats::{SubdistrictRow, YearTable};
use hc_survey::subdistrict::SubdistrictId;
use hc_survey::year::SurveyYear;
use std::cell::RefCell;
use std::rc::Rc;

pub struct YearView<B: MapBackend> {
    year: SurveyYear,
    table: Rc<YearTable>,
    anchors: AnchorTable,
    subdistricts: Vec<SubdistrictId>,
    store: SelectionStore,
    map: MapView<B>,
}

impl<B: MapBackend> YearView<B> {
    pub fn new(year: SurveyYear, table: Rc<YearTable>, config: &DashboardConfig, backend: B) -> Self {
        let subdistricts = year.subdistricts();
        let initial = initial_selection(&table, &subdistricts, &config.default_subdistrict);
        log::info!("HEALTH {} view starts on {}", year, initial);
        Self {
            year,
            table,
            anchors: config.anchors(),
            subdistricts,
            store: SelectionStore::new(initial),
            map: MapView::new(backend, config),
        }
    }

    pub fn year(&self) -> SurveyYear {
        self.year
    }

    pub fn selected(&self) -> &SubdistrictId {
        self.store.get()
    }

    /// Select `id`: invalidate and recenter the map, then notify subscribers.
    ///
    /// Ids that are not keys of the year table are ignored; returns false for them.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.table.contains(id) {
            log::debug!("ignoring selection of unknown subdistrict '{}'", id);
            return false;
        }
        self.map.invalidate();
        self.map.recenter(id);
        self.store.set(SubdistrictId::from(id));
        true
    }

    /// Row of the current selection, empty if the table lacks it.
    pub fn current_row(&self) -> SubdistrictRow {
        self.table.row_or_empty(self.selected().as_str())
    }

    pub fn summary_title(&self) -> String {
        self.year.summary_title(self.selected())
    }

    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        sidebar_entries(&self.subdistricts, self.selected())
    }

    /// Chart cards for the current selection, in catalog order.
    pub fn chart_grid(&self) -> Vec<ChartCard> {
        let row = self.current_row();
        let missing = self.year.catalog().missing_labels(&row);
        if !missing.is_empty() {
            log::debug!("{} has no data for {} catalog labels", self.selected(), missing.len());
        }
        chart_grid(self.year, self.year.catalog(), &row)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SubdistrictId) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Mount the map in this year's container, centered on the whole district.
    pub fn mount_map(&mut self, on_select: SelectHandler) -> Option<BoundaryRequest> {
        self.map
            .mount(self.year.map_container_id(), self.anchors.overall(), on_select)
    }

    pub fn apply_boundary(&mut self, request: &BoundaryRequest, body: hc_survey::Result<String>) -> bool {
        self.map.apply_boundary(request, body)
    }

    pub fn invalidate_map(&mut self) {
        self.map.invalidate();
    }

    pub fn unmount_map(&mut self) {
        self.map.unmount();
    }

    pub fn map(&self) -> &MapView<B> {
        &self.map
    }
}

/// The configured default if the table has it, else the first listed
/// subdistrict the table has, else the configured default regardless.
fn initial_selection(
    table: &YearTable,
    subdistricts: &[SubdistrictId],
    default: &SubdistrictId,
) -> SubdistrictId {
    if table.contains(default.as_str()) {
        return default.clone();
    }
    match subdistricts.iter().find(|id| table.contains(id.as_str())) {
        Some(id) => {
            log::warn!("default subdistrict {} missing from table; starting on {}", default, id);
            id.clone()
        }
        None => default.clone(),
    }
}

/// Pin-click handler that selects on `view`.
///
/// Holds a weak reference so the map's handler does not keep the view alive.
pub fn selection_handler<B: MapBackend + 'static>(view: &Rc<RefCell<YearView<B>>>) -> SelectHandler {
    let weak = Rc::downgrade(view);
    Rc::new(move |id: SubdistrictId| {
        let Some(view) = weak.upgrade() else {
            return;
        };
        match view.try_borrow_mut() {
            Ok(mut view) => {
                view.select(id.as_str());
            }
            Err(_) => log::warn!("pin click on {} during another update; ignored", id),
        };
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::testing::{MapCall, RecordingBackend};
    use hc_data::projection::project;
    use hc_survey::geo::GeoAnchor;
    use hc_survey::SurveyError;

    const FIXTURE_2018: &str = include_str!("../../fixtures/health_2018.csv");
    const FIXTURE_2013: &str = include_str!("../../fixtures/health_2013.csv");

    fn table(year: SurveyYear) -> Rc<YearTable> {
        let csv_data = match year {
            SurveyYear::Y2013 => FIXTURE_2013,
            SurveyYear::Y2018 => FIXTURE_2018,
        };
        Rc::new(YearTable::from_long_csv(csv_data).unwrap())
    }

    fn mounted_view(year: SurveyYear) -> Rc<RefCell<YearView<RecordingBackend>>> {
        let view = Rc::new(RefCell::new(YearView::new(
            year,
            table(year),
            &DashboardConfig::default(),
            RecordingBackend::default(),
        )));
        let handler = selection_handler(&view);
        view.borrow_mut().mount_map(handler);
        view
    }

    fn expected_anchor(id: &SubdistrictId) -> GeoAnchor {
        DashboardConfig::default().anchors().get(id.as_str())
    }

    #[test]
    fn initial_load_selects_bekok() {
        let view = mounted_view(SurveyYear::Y2018);
        let view = view.borrow();
        assert_eq!(view.selected().as_str(), "BEKOK");
        assert_eq!(view.summary_title(), "HEALTH 2018 SUMMARY FOR BEKOK");

        let cards = view.chart_grid();
        assert_eq!(cards.len(), SurveyYear::Y2018.catalog().len());
        let row = view.current_row();
        assert_eq!(cards[0].total, row.stat("Male").n + row.stat("Female").n);
    }

    #[test]
    fn sidebar_selection_round_trips_for_every_subdistrict() {
        for year in [SurveyYear::Y2013, SurveyYear::Y2018] {
            let view = mounted_view(year);
            for id in year.subdistricts() {
                assert!(view.borrow_mut().select(id.as_str()));
                let view = view.borrow();
                assert_eq!(view.selected(), &id);
                assert_eq!(view.map().backend().last_view(), Some(expected_anchor(&id)));
            }
        }
    }

    #[test]
    fn pin_click_round_trips_for_every_pin() {
        let view = mounted_view(SurveyYear::Y2018);
        let click = view.borrow().map().backend().click_handler();
        let pins = view.borrow().map().pins().to_vec();
        assert_eq!(pins.len(), 5);
        for id in pins {
            click(id.clone());
            let view = view.borrow();
            assert_eq!(view.selected(), &id);
            assert_eq!(view.map().backend().last_view(), Some(expected_anchor(&id)));
            assert_eq!(expected_anchor(&id).zoom, 14);
        }
    }

    #[test]
    fn selecting_gemereh_recenters_and_retitles() {
        let view = mounted_view(SurveyYear::Y2018);
        view.borrow_mut().select("GEMEREH");
        let view = view.borrow();
        assert_eq!(view.map().backend().last_view(), Some(GeoAnchor::new(2.5048, 102.8093, 14)));
        assert_eq!(view.summary_title(), "HEALTH 2018 SUMMARY FOR GEMEREH");
    }

    #[test]
    fn pin_click_on_sungai_segamat_updates_header_and_sidebar() {
        let view = mounted_view(SurveyYear::Y2018);
        let click = view.borrow().map().backend().click_handler();
        click(SubdistrictId::from("SUNGAI_SEGAMAT"));

        let view = view.borrow();
        assert_eq!(view.selected().as_str(), "SUNGAI_SEGAMAT");
        assert_eq!(view.summary_title(), "HEALTH 2018 SUMMARY FOR SUNGAI SEGAMAT");
        let active: Vec<_> = view
            .sidebar_entries()
            .into_iter()
            .filter(|e| e.active)
            .map(|e| e.label)
            .collect();
        assert_eq!(active, vec!["SUNGAI SEGAMAT"]);
    }

    #[test]
    fn selecting_overall_zooms_out_to_centroid() {
        let view = mounted_view(SurveyYear::Y2018);
        view.borrow_mut().select("Overall");
        assert_eq!(
            view.borrow().map().backend().last_view(),
            Some(GeoAnchor::new(2.5147, 102.8151, 10))
        );
    }

    #[test]
    fn boundary_failure_keeps_map_usable() {
        let view = Rc::new(RefCell::new(YearView::new(
            SurveyYear::Y2018,
            table(SurveyYear::Y2018),
            &DashboardConfig::default(),
            RecordingBackend::default(),
        )));
        let handler = selection_handler(&view);
        let request = view.borrow_mut().mount_map(handler).unwrap();
        assert!(!view
            .borrow_mut()
            .apply_boundary(&request, Err(SurveyError::FetchFailed("HTTP 500 Internal Server Error".to_string()))));

        let click = view.borrow().map().backend().click_handler();
        click(SubdistrictId::from("CHAAH"));
        let view = view.borrow();
        assert_eq!(view.selected().as_str(), "CHAAH");
        assert_eq!(view.map().pins().len(), 5);
        assert_eq!(view.map().tile_layer_count(), 1);
    }

    #[test]
    fn absent_label_renders_as_zero() {
        let view = mounted_view(SurveyYear::Y2018);
        view.borrow_mut().select("JABI");
        let view = view.borrow();
        let row = view.current_row();
        assert!(!row.contains("Refused to answer"));

        let education = SurveyYear::Y2018.catalog().find("Education level").unwrap();
        let data = project(education, &row);
        assert_eq!(data.values[5], 0);
        assert_eq!(data.percentages[5], 0.0);

        let card = view
            .chart_grid()
            .into_iter()
            .find(|c| c.title == "Education level")
            .unwrap();
        assert_eq!(card.spec.data.datasets[0].data[5], 0.0);
    }

    #[test]
    fn every_category_resolves_against_every_fixture_row() {
        for year in [SurveyYear::Y2013, SurveyYear::Y2018] {
            let table = table(year);
            for id in year.subdistricts() {
                let row = table.row(id.as_str()).unwrap();
                for category in year.catalog().categories() {
                    let data = project(category, row);
                    assert_eq!(data.values.len(), category.labels.len());
                    assert_eq!(data.percentages.len(), category.labels.len());
                    for (i, label) in category.labels.iter().enumerate() {
                        assert_eq!(data.values[i], row.stat(label).n);
                        assert_eq!(data.percentages[i], row.stat(label).percentage);
                    }
                }
            }
        }
    }

    #[test]
    fn fixtures_only_lack_the_deliberately_absent_labels() {
        let table = table(SurveyYear::Y2018);
        let catalog = SurveyYear::Y2018.catalog();
        assert!(catalog.missing_labels(table.row("BEKOK").unwrap()).is_empty());
        let missing = catalog.missing_labels(table.row("JABI").unwrap());
        assert!(!missing.is_empty());
        assert!(missing.iter().all(|(_, label)| *label == "Refused to answer"));
    }

    #[test]
    fn fixture_2013_covers_the_full_catalog() {
        let table = table(SurveyYear::Y2013);
        let catalog = SurveyYear::Y2013.catalog();
        assert!(catalog.missing_labels(table.row("BEKOK").unwrap()).is_empty());
        assert!(catalog.missing_labels(table.row("Overall").unwrap()).is_empty());
        let missing = catalog.missing_labels(table.row("CHAAH").unwrap());
        assert_eq!(missing, vec![("Ethnicity", "Non-citizen")]);
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let view = mounted_view(SurveyYear::Y2018);
        let views_before = view.borrow().map().backend().count(|c| matches!(c, MapCall::SetView(_)));
        assert!(!view.borrow_mut().select("LABIS"));
        let view = view.borrow();
        assert_eq!(view.selected().as_str(), "BEKOK");
        assert_eq!(
            view.map().backend().count(|c| matches!(c, MapCall::SetView(_))),
            views_before
        );
    }

    #[test]
    fn repeated_selection_only_recenters() {
        let view = mounted_view(SurveyYear::Y2018);
        view.borrow_mut().select("JABI");
        view.borrow_mut().select("JABI");
        let view = view.borrow();
        let backend = view.map().backend();
        assert_eq!(backend.count(|c| matches!(c, MapCall::Create(..))), 1);
        assert_eq!(backend.count(|c| matches!(c, MapCall::TileLayer(..))), 1);
        assert_eq!(backend.count(|c| matches!(c, MapCall::SetView(_))), 2);
        assert_eq!(backend.count(|c| *c == MapCall::Invalidate), 2);
    }

    #[test]
    fn subscribers_see_every_selection() {
        let view = mounted_view(SurveyYear::Y2013);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        view.borrow_mut()
            .subscribe(move |id| sink.borrow_mut().push(id.display_name()));

        view.borrow_mut().select("SUNGAI_SEGAMAT");
        let click = view.borrow().map().backend().click_handler();
        click(SubdistrictId::from("CHAAH"));
        assert_eq!(*seen.borrow(), vec!["SUNGAI SEGAMAT", "CHAAH"]);
    }

    #[test]
    fn dropped_view_ignores_late_pin_clicks() {
        let view = mounted_view(SurveyYear::Y2018);
        let click = view.borrow().map().backend().click_handler();
        drop(view);
        click(SubdistrictId::from("JABI"));
    }

    #[test]
    fn missing_default_falls_back_to_first_listed_row() {
        let table = YearTable::from_long_csv("subdistrict,label,n,percentage\nCHAAH,Male,3,100\n").unwrap();
        let view = YearView::new(
            SurveyYear::Y2018,
            Rc::new(table),
            &DashboardConfig::default(),
            RecordingBackend::default(),
        );
        assert_eq!(view.selected().as_str(), "CHAAH");
    }
}
