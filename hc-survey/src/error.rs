/// Error types for the survey data layer
use thiserror::Error;

/// Main error type for survey data operations
#[derive(Error, Debug)]
pub enum SurveyError {
    /// Subdistrict is not a key of the year table
    #[error("Subdistrict not found: {0}")]
    UnknownSubdistrict(String),

    /// Failed to parse bundled or fetched JSON
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to read a CSV fixture
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A network fetch did not produce a usable response
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
}

/// Type alias for Results using SurveyError
pub type Result<T> = std::result::Result<T, SurveyError>;
