//! Data processing for the chart grid.
//!
//! This crate turns a subdistrict's flat label statistics into forms
//! suitable for charting.

/// Projection of a row through a category's label list.
pub mod projection {
    use hc_survey::catalog::{Category, ChartType};
    use hc_survey::stats::SubdistrictRow;

    /// Labels and their counts and percentages, index-aligned with the category's labels.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ChartData {
        pub labels: Vec<String>,
        pub values: Vec<u64>,
        pub percentages: Vec<f64>,
    }

    impl ChartData {
        /// Series a chart of `chart_type` plots: percentages for pie charts,
        /// which must read as shares of a whole, counts everywhere else.
        pub fn series(&self, chart_type: ChartType) -> Vec<f64> {
            match chart_type {
                ChartType::Pie => self.percentages.clone(),
                _ => self.values.iter().map(|&n| n as f64).collect(),
            }
        }

        pub fn total(&self) -> u64 {
            self.values.iter().sum()
        }

        pub fn is_all_zero(&self) -> bool {
            self.values.iter().all(|&n| n == 0) && self.percentages.iter().all(|&p| p == 0.0)
        }
    }

    /// Project `row` through `category.labels`. Missing labels contribute 0.
    pub fn project(category: &Category, row: &SubdistrictRow) -> ChartData {
        let labels: Vec<String> = category.labels.iter().map(|l| l.to_string()).collect();
        let stats: Vec<_> = category.labels.iter().map(|l| row.stat(l)).collect();
        ChartData {
            labels,
            values: stats.iter().map(|s| s.n).collect(),
            percentages: stats.iter().map(|s| s.percentage).collect(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use hc_survey::catalog::CATALOG_2018;
        use hc_survey::stats::{LabelStat, YearTable};

        fn bekok_row() -> SubdistrictRow {
            let table = YearTable::from_json(
                r#"{ "BEKOK": {
                    "Male": { "n": 210, "percentage": 47.3 },
                    "Female": { "n": 234, "percentage": 52.7 },
                    "No formal education": { "n": 31, "percentage": 7.0 },
                    "Primary": { "n": 150, "percentage": 33.8 },
                    "Secondary": { "n": 200, "percentage": 45.0 },
                    "Tertiary": { "n": 60, "percentage": 13.5 },
                    "Do not know": { "n": 3, "percentage": 0.7 }
                } }"#,
            )
            .unwrap();
            table.row("BEKOK").unwrap().clone()
        }

        #[test]
        fn projects_counts_and_percentages_in_label_order() {
            let sex = CATALOG_2018.find("Sex").unwrap();
            let data = project(sex, &bekok_row());
            assert_eq!(data.labels, vec!["Male", "Female"]);
            assert_eq!(data.values, vec![210, 234]);
            assert_eq!(data.percentages, vec![47.3, 52.7]);
            assert_eq!(data.total(), 444);
        }

        #[test]
        fn absent_label_projects_as_zero() {
            let education = CATALOG_2018.find("Education level").unwrap();
            let data = project(education, &bekok_row());
            assert_eq!(data.labels.len(), 6);
            assert_eq!(data.labels[5], "Refused to answer");
            assert_eq!(data.values[5], 0);
            assert_eq!(data.percentages[5], 0.0);
            assert_eq!(data.values[0], 31);
        }

        #[test]
        fn every_category_projects_against_an_empty_row() {
            let row = SubdistrictRow::new();
            for category in CATALOG_2018.categories() {
                let data = project(category, &row);
                assert_eq!(data.values.len(), category.labels.len());
                assert_eq!(data.percentages.len(), category.labels.len());
                assert!(data.is_all_zero());
            }
        }

        #[test]
        fn pie_plots_percentages_other_types_plot_counts() {
            let mut row = SubdistrictRow::new();
            row.insert("Yes", LabelStat { n: 12, percentage: 30.0 });
            row.insert("No", LabelStat { n: 28, percentage: 70.0 });
            let data = project(CATALOG_2018.find("Known DM").unwrap(), &row);
            assert_eq!(data.series(ChartType::Pie), vec![30.0, 70.0]);
            for chart_type in [
                ChartType::Bar,
                ChartType::Line,
                ChartType::Doughnut,
                ChartType::Radar,
                ChartType::PolarArea,
            ] {
                assert_eq!(data.series(chart_type), vec![12.0, 28.0]);
            }
        }
    }
}

/// Chart.js configuration built from a projection.
pub mod styling {
    use crate::projection::{project, ChartData};
    use hc_survey::catalog::{Category, ChartType};
    use hc_survey::stats::SubdistrictRow;
    use serde::Serialize;

    /// Base colors for categorical charts, applied by label position.
    pub const PALETTE: [(u8, u8, u8); 6] = [
        (255, 99, 132),
        (54, 162, 235),
        (255, 206, 86),
        (75, 192, 192),
        (153, 102, 255),
        (255, 159, 64),
    ];

    /// Accent for bar and line charts.
    pub const ACCENT: (u8, u8, u8) = (75, 192, 192);

    /// Accent for radar charts.
    pub const RADAR_ACCENT: (u8, u8, u8) = (255, 99, 132);

    const FILL_ALPHA: f64 = 0.4;
    const SOFT_FILL_ALPHA: f64 = 0.2;
    const BORDER_ALPHA: f64 = 0.8;

    pub fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }

    /// `count` palette colors at `alpha`, wrapping after six.
    pub fn palette(count: usize, alpha: f64) -> Vec<String> {
        PALETTE
            .iter()
            .cycle()
            .take(count)
            .map(|&c| rgba(c, alpha))
            .collect()
    }

    /// One color for the whole dataset, or one per label.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(untagged)]
    pub enum Color {
        Single(String),
        PerLabel(Vec<String>),
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Dataset {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub label: Option<String>,
        pub data: Vec<f64>,
        pub background_color: Color,
        pub border_color: Color,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub border_width: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub fill: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub point_background_color: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub point_border_color: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub point_hover_background_color: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub point_hover_border_color: Option<String>,
    }

    impl Dataset {
        fn new(data: Vec<f64>, background_color: Color, border_color: Color) -> Self {
            Self {
                label: None,
                data,
                background_color,
                border_color,
                border_width: None,
                fill: None,
                point_background_color: None,
                point_border_color: None,
                point_hover_background_color: None,
                point_hover_border_color: None,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ChartBody {
        pub labels: Vec<String>,
        pub datasets: Vec<Dataset>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ChartOptions {
        pub responsive: bool,
        pub maintain_aspect_ratio: bool,
    }

    impl Default for ChartOptions {
        fn default() -> Self {
            // Fill the fixed-height container instead of keeping the canvas ratio.
            Self {
                responsive: true,
                maintain_aspect_ratio: false,
            }
        }
    }

    /// A complete `new Chart(canvas, config)` configuration.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ChartSpec {
        #[serde(rename = "type")]
        pub chart_type: ChartType,
        pub data: ChartBody,
        pub options: ChartOptions,
    }

    impl ChartSpec {
        pub fn to_json(&self) -> serde_json::Result<String> {
            serde_json::to_string(self)
        }
    }

    fn dataset_for(category: &Category, data: &ChartData) -> Dataset {
        let series = data.series(category.chart_type);
        let count = data.labels.len();
        match category.chart_type {
            ChartType::Bar => Dataset {
                label: Some(format!("{} distribution", category.name)),
                border_width: Some(1),
                ..Dataset::new(
                    series,
                    Color::Single(rgba(ACCENT, FILL_ALPHA)),
                    Color::Single(rgba(ACCENT, BORDER_ALPHA)),
                )
            },
            ChartType::Line => Dataset {
                label: Some(format!("{} over years", category.name)),
                border_width: Some(2),
                fill: Some(true),
                ..Dataset::new(
                    series,
                    Color::Single(rgba(ACCENT, SOFT_FILL_ALPHA)),
                    Color::Single(rgba(ACCENT, BORDER_ALPHA)),
                )
            },
            ChartType::Radar => Dataset {
                label: Some(format!("{} status", category.name)),
                point_background_color: Some(rgba(RADAR_ACCENT, BORDER_ALPHA)),
                point_border_color: Some("#fff".to_string()),
                point_hover_background_color: Some("#fff".to_string()),
                point_hover_border_color: Some(rgba(RADAR_ACCENT, BORDER_ALPHA)),
                ..Dataset::new(
                    series,
                    Color::Single(rgba(RADAR_ACCENT, SOFT_FILL_ALPHA)),
                    Color::Single(rgba(RADAR_ACCENT, BORDER_ALPHA)),
                )
            },
            ChartType::Pie | ChartType::Doughnut | ChartType::PolarArea => Dataset {
                border_width: Some(1),
                ..Dataset::new(
                    series,
                    Color::PerLabel(palette(count, FILL_ALPHA)),
                    Color::PerLabel(palette(count, BORDER_ALPHA)),
                )
            },
        }
    }

    /// Chart configuration for an already projected category.
    pub fn chart_spec(category: &Category, data: &ChartData) -> ChartSpec {
        ChartSpec {
            chart_type: category.chart_type,
            data: ChartBody {
                labels: data.labels.clone(),
                datasets: vec![dataset_for(category, data)],
            },
            options: ChartOptions::default(),
        }
    }

    /// Project `row` through `category` and style the result.
    pub fn chart_spec_for_row(category: &Category, row: &SubdistrictRow) -> ChartSpec {
        let data = project(category, row);
        if data.is_all_zero() {
            log::debug!("'{}' has no recorded values; rendering an empty chart", category.name);
        }
        chart_spec(category, &data)
    }

}
