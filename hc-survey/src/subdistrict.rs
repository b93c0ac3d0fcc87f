use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Key of the district-wide pseudo-subdistrict.
pub const OVERALL: &str = "Overall";

/// Identifier of a subdistrict as stored in the survey tables (e.g. "SUNGAI_SEGAMAT").
///
/// Stored keys keep their underscores; use [`SubdistrictId::display_name`]
/// for anything shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubdistrictId(String);

impl SubdistrictId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn overall() -> Self {
        Self(OVERALL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the district-wide aggregate row.
    pub fn is_overall(&self) -> bool {
        self.0 == OVERALL
    }

    /// Display form: every underscore becomes a space.
    pub fn display_name(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl fmt::Display for SubdistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubdistrictId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SubdistrictId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for SubdistrictId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SubdistrictId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
