use crate::catalog::{Catalog, CATALOG_2013, CATALOG_2018};
use crate::geo::SUBDISTRICT_COORDINATES;
use crate::subdistrict::{SubdistrictId, OVERALL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Survey round. Each round gets its own route, data table and catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurveyYear {
    Y2013,
    Y2018,
}

impl SurveyYear {
    pub fn number(&self) -> u16 {
        match self {
            SurveyYear::Y2013 => 2013,
            SurveyYear::Y2018 => 2018,
        }
    }

    /// Route the host shell mounts this year view under.
    pub fn route(&self) -> &'static str {
        match self {
            SurveyYear::Y2013 => "/healthchart2013",
            SurveyYear::Y2018 => "/healthchart2018",
        }
    }

    /// DOM id of the map container. Unique per year so both views can coexist.
    pub fn map_container_id(&self) -> &'static str {
        match self {
            SurveyYear::Y2013 => "map2013",
            SurveyYear::Y2018 => "map2018",
        }
    }

    /// DOM id of the chart card for the category at `index`.
    pub fn chart_container_id(&self, index: usize) -> String {
        format!("chart{}-{}", self.number(), index)
    }

    pub fn catalog(&self) -> &'static Catalog {
        match self {
            SurveyYear::Y2013 => &CATALOG_2013,
            SurveyYear::Y2018 => &CATALOG_2018,
        }
    }

    /// Sidebar order: named subdistricts, then "Overall".
    pub fn subdistricts(&self) -> Vec<SubdistrictId> {
        SUBDISTRICT_COORDINATES
            .iter()
            .map(|(id, _, _)| SubdistrictId::from(*id))
            .chain(std::iter::once(SubdistrictId::from(OVERALL)))
            .collect()
    }

    /// Page header for the given selection, e.g. `HEALTH 2018 SUMMARY FOR SUNGAI SEGAMAT`.
    pub fn summary_title(&self, selected: &SubdistrictId) -> String {
        format!(
            "HEALTH {} SUMMARY FOR {}",
            self.number(),
            selected.display_name().to_uppercase()
        )
    }
}

impl fmt::Display for SurveyYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
