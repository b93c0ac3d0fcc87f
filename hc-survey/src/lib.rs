//! Core types for the Segamat community health survey dashboard.
//!
//! This crate holds everything the views consume read-only:
//! - `stats`: per-label counts and percentages, rows and year tables
//! - `catalog`: the ordered chart catalogs for each survey year
//! - `subdistrict` / `geo`: identifiers, display names and map anchors
//! - `boundary`: GeoJSON district boundary filtering
//! - `config` / `year`: compile-time dashboard configuration

pub mod boundary;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod stats;
pub mod subdistrict;
pub mod year;

pub use error::{Result, SurveyError};
