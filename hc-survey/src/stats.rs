//! Precomputed aggregate statistics: one table per survey year.
//!
//! The bundled data files are JSON objects shaped
//! `{ "<SubdistrictId>": { "<label>": { "n": 12, "percentage": 34.5 } } }`.
//! They are generated at build time from long-format CSV fixtures with the
//! columns `subdistrict,label,n,percentage`.

use crate::error::{Result, SurveyError};
use crate::subdistrict::SubdistrictId;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count and share recorded for a single label.
///
/// An absent label reads as `LabelStat::default()`, i.e. `{ n: 0, percentage: 0.0 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelStat {
    #[serde(default)]
    pub n: u64,
    #[serde(default)]
    pub percentage: f64,
}

/// Flat label -> LabelStat mapping for one subdistrict in one survey year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubdistrictRow {
    stats: BTreeMap<String, LabelStat>,
}

impl SubdistrictRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, stat: LabelStat) {
        self.stats.insert(label.into(), stat);
    }

    /// Stat for `label`, compared as-is against the stored keys.
    /// Missing labels default to zero.
    pub fn stat(&self, label: &str) -> LabelStat {
        self.stats.get(label).copied().unwrap_or_default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.stats.contains_key(label)
    }

    /// Sum of counts over `labels`, missing labels contributing 0.
    pub fn total<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> u64 {
        labels.into_iter().map(|label| self.stat(label).n).sum()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// All rows recorded for one survey year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearTable {
    rows: BTreeMap<SubdistrictId, SubdistrictRow>,
}

impl YearTable {
    /// Parse a bundled year table.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: YearTable = serde_json::from_str(json)?;
        log::info!("Loaded survey table with {} subdistricts", table.rows.len());
        Ok(table)
    }

    /// Pivot a long-format CSV (`subdistrict,label,n,percentage`, with header)
    /// into a table.
    ///
    /// Rows with an empty subdistrict or label, a count that is not a
    /// non-negative integer, or a percentage outside 0..=100 are skipped.
    /// A blank percentage reads as 0.
    pub fn from_long_csv(csv_data: &str) -> Result<Self> {
        let mut table = YearTable::default();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        for row in rdr.records() {
            let record = row?;
            let subdistrict = record.get(0).unwrap_or("").trim();
            let label = record.get(1).unwrap_or("").trim();
            if subdistrict.is_empty() || label.is_empty() {
                continue;
            }
            let n = match record.get(2).unwrap_or("").trim().parse::<u64>() {
                Ok(n) => n,
                Err(_) => {
                    log::warn!("Skipping {}/{}: count is not a number", subdistrict, label);
                    continue;
                }
            };
            let percentage = match parse_percentage(record.get(3).unwrap_or("")) {
                Some(percentage) => percentage,
                None => {
                    log::warn!("Skipping {}/{}: percentage is not within 0..=100", subdistrict, label);
                    continue;
                }
            };

            table
                .rows
                .entry(SubdistrictId::from(subdistrict))
                .or_default()
                .insert(label, LabelStat { n, percentage });
        }
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Row for `id`, failing with `UnknownSubdistrict` for ids outside the table.
    pub fn row(&self, id: &str) -> Result<&SubdistrictRow> {
        self.rows
            .get(id)
            .ok_or_else(|| SurveyError::UnknownSubdistrict(id.to_string()))
    }

    /// Row for `id`, or an empty row so callers render zeros.
    pub fn row_or_empty(&self, id: &str) -> SubdistrictRow {
        match self.row(id) {
            Ok(row) => row.clone(),
            Err(e) => {
                log::warn!("{}; rendering an empty row", e);
                SubdistrictRow::default()
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// `None` for anything but a blank cell or a finite number in 0..=100.
fn parse_percentage(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(0.0);
    }
    cell.parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && (0.0..=100.0).contains(p))
}
