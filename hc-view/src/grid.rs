//! View models for the chart grid and the sidebar.

use hc_data::projection::project;
use hc_data::styling::{chart_spec, ChartSpec};
use hc_survey::catalog::{Catalog, ChartType};
use hc_survey::stats::SubdistrictRow;
use hc_survey::subdistrict::SubdistrictId;
use hc_survey::year::SurveyYear;

/// One chart of the grid, ready to hand to the chart library.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCard {
    pub container_id: String,
    pub title: &'static str,
    pub chart_type: ChartType,
    /// Sum of the category's counts in the selected row.
    pub total: u64,
    pub spec: ChartSpec,
}

/// Project every category of `catalog` out of `row`, in catalog order.
pub fn chart_grid(year: SurveyYear, catalog: &Catalog, row: &SubdistrictRow) -> Vec<ChartCard> {
    catalog
        .categories()
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let data = project(category, row);
            ChartCard {
                container_id: year.chart_container_id(index),
                title: category.name,
                chart_type: category.chart_type,
                total: data.total(),
                spec: chart_spec(category, &data),
            }
        })
        .collect()
}

/// A selectable sidebar line.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub id: SubdistrictId,
    pub label: String,
    pub active: bool,
}

pub fn sidebar_entries(ids: &[SubdistrictId], selected: &SubdistrictId) -> Vec<SidebarEntry> {
    ids.iter()
        .map(|id| SidebarEntry {
            id: id.clone(),
            label: id.display_name(),
            active: id == selected,
        })
        .collect()
}
