//! Chart catalogs: which categories each year view renders, in which order,
//! projecting which labels, drawn as which kind of chart.
//!
//! Adding a category to a page is a change to the tables below and nothing else.

use crate::stats::SubdistrictRow;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart style for a category. Serializes to the Chart.js type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Bar,
    Pie,
    Line,
    Doughnut,
    Radar,
    PolarArea,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Line => "line",
            ChartType::Doughnut => "doughnut",
            ChartType::Radar => "radar",
            ChartType::PolarArea => "polarArea",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display grouping: name, ordered value domain and chart style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub labels: &'static [&'static str],
    pub chart_type: ChartType,
}

impl Category {
    const fn new(name: &'static str, labels: &'static [&'static str], chart_type: ChartType) -> Self {
        Self { name, labels, chart_type }
    }
}

/// Ordered catalog of categories for one survey year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catalog {
    categories: &'static [Category],
}

impl Catalog {
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// `(category, label)` pairs the row has no entry for.
    pub fn missing_labels(&self, row: &SubdistrictRow) -> Vec<(&'static str, &'static str)> {
        self.categories
            .iter()
            .flat_map(|c| c.labels.iter().map(move |l| (c.name, *l)))
            .filter(|(_, label)| !row.contains(label))
            .collect()
    }
}

const YES_NO: &[&str] = &["Yes", "No"];
const YES_NO_UNSURE: &[&str] = &["Yes", "No", "Do not Know", "Refused to answer"];
const BMI_SIX_CLASS: &[&str] = &["underweight", "normal", "overweight", "obese I", "obese II", "obese III"];

use ChartType::*;

/// Categories of both survey rounds, in page order.
static CATEGORIES: [Category; 30] = [
    Category::new("Sex", &["Male", "Female"], Pie),
    Category::new(
        "Ethnicity",
        &["Malay", "Chinese", "Indian", "Orang Asli", "Other", "Non-citizen"],
        Doughnut,
    ),
    Category::new(
        "Education level",
        &["No formal education", "Primary", "Secondary", "Tertiary", "Do not know", "Refused to answer"],
        Bar,
    ),
    Category::new("Age group", &["5 to 19", "20 to 39", "40 to 59", "60 and above"], Line),
    Category::new(
        "Employment status last 30 days",
        &[
            "Too young to work",
            "Student",
            "Housewife / Househusband",
            "Not Working",
            "Casual Jobs",
            "Working Part-time",
            "Working Full-Time",
            "Do not Know",
            "Pensioners/Pensions",
            "Self Employed",
        ],
        PolarArea,
    ),
    Category::new("Oral health problems in the last 2 weeks", YES_NO, Pie),
    Category::new("Heart disease", YES_NO_UNSURE, Bar),
    Category::new("Asthma", YES_NO_UNSURE, Bar),
    Category::new("Stroke", YES_NO_UNSURE, Bar),
    Category::new("Arthritis", YES_NO_UNSURE, Radar),
    Category::new("Ever had dengue fever", YES_NO_UNSURE, Pie),
    Category::new("Dengue in the past 12 months", YES_NO_UNSURE, Pie),
    Category::new("UTI in the past 12 months", YES_NO_UNSURE, Bar),
    Category::new("Kidney disease", YES_NO_UNSURE, Bar),
    Category::new("Ever smoked", &["Yes", "No", "Refused to answer"], Pie),
    Category::new("Age started smoking", &["< 13", "13-", "18-", "30-", "40-"], Bar),
    Category::new("BMI categories (WHO)(18+)", BMI_SIX_CLASS, Bar),
    Category::new(
        "BMI categories (WHO) recoded (18+)",
        &["underweight", "normal", "overweight", "obese"],
        Bar,
    ),
    Category::new("BMI categories (Msian CGPO)", BMI_SIX_CLASS, Bar),
    Category::new("Abdominal obesity (18+)", YES_NO, Pie),
    Category::new("Have been screened for hypertension", YES_NO, Bar),
    Category::new("Known hypertensive", YES_NO, Pie),
    Category::new("sbp(last2reads)140above or dbp90", YES_NO, Bar),
    Category::new("Hpt population (known + undiagnosed)", YES_NO, Bar),
    Category::new("Taking BP meds", YES_NO, Pie),
    Category::new("Have been screened for diabetes mellitus (DM)", YES_NO, Bar),
    Category::new("Known DM", YES_NO, Pie),
    Category::new("BG >= 11.1 mmol/l", YES_NO, Pie),
    Category::new("DM population (known + undiagnosed)", YES_NO, Bar),
    Category::new("Taking DM meds", YES_NO, Pie),
];

pub static CATALOG_2018: Catalog = Catalog::new(&CATEGORIES);
pub static CATALOG_2013: Catalog = Catalog::new(&CATEGORIES);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LabelStat;
    use std::collections::HashSet;

    #[test]
    fn chart_type_serializes_to_chartjs_name() {
        assert_eq!(serde_json::to_string(&ChartType::PolarArea).unwrap(), "\"polarArea\"");
        assert_eq!(serde_json::to_string(&ChartType::Doughnut).unwrap(), "\"doughnut\"");
        assert_eq!(ChartType::PolarArea.as_str(), "polarArea");
    }

    #[test]
    fn catalogs_have_unique_names_and_non_empty_labels() {
        for catalog in [&CATALOG_2013, &CATALOG_2018] {
            let names: HashSet<_> = catalog.categories().iter().map(|c| c.name).collect();
            assert_eq!(names.len(), catalog.len());
            assert!(catalog.categories().iter().all(|c| !c.labels.is_empty()));
        }
    }

    #[test]
    fn catalog_2018_order_starts_with_demographics() {
        let names: Vec<_> = CATALOG_2018.categories().iter().take(5).map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Sex", "Ethnicity", "Education level", "Age group", "Employment status last 30 days"]
        );
        assert_eq!(CATALOG_2018.find("Arthritis").map(|c| c.chart_type), Some(ChartType::Radar));
    }

    #[test]
    fn every_chart_type_is_used() {
        let used: HashSet<_> = CATALOG_2018.categories().iter().map(|c| c.chart_type).collect();
        assert_eq!(used.len(), 6);
    }

    #[test]
    fn both_catalogs_cover_every_topic_group() {
        let groups: [&[&str]; 5] = [
            &["Sex", "Ethnicity", "Education level", "Age group", "Employment status last 30 days"],
            &[
                "Oral health problems in the last 2 weeks",
                "Heart disease",
                "Asthma",
                "Stroke",
                "Arthritis",
                "Ever had dengue fever",
                "Dengue in the past 12 months",
                "UTI in the past 12 months",
                "Kidney disease",
            ],
            &["Ever smoked", "Age started smoking"],
            &[
                "BMI categories (WHO)(18+)",
                "BMI categories (WHO) recoded (18+)",
                "BMI categories (Msian CGPO)",
                "Abdominal obesity (18+)",
            ],
            &[
                "Have been screened for hypertension",
                "Known hypertensive",
                "Taking BP meds",
                "Have been screened for diabetes mellitus (DM)",
                "Known DM",
                "Taking DM meds",
            ],
        ];
        for catalog in [&CATALOG_2013, &CATALOG_2018] {
            for name in groups.iter().flat_map(|g| g.iter()) {
                assert!(catalog.find(name).is_some(), "missing category {}", name);
            }
        }
        assert_eq!(
            CATALOG_2013.find("BMI categories (WHO) recoded (18+)").map(|c| c.chart_type),
            Some(ChartType::Bar)
        );
        assert_eq!(CATALOG_2013.find("Employment status last 30 days").map(|c| c.labels.len()), Some(10));
    }

    #[test]
    fn missing_labels_reports_category_and_label() {
        let mut row = SubdistrictRow::new();
        row.insert("Male", LabelStat { n: 1, percentage: 50.0 });
        let missing = CATALOG_2018.missing_labels(&row);
        assert!(missing.contains(&("Sex", "Female")));
        assert!(!missing.contains(&("Sex", "Male")));
    }
}
