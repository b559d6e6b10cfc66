use std::fmt;

use serde::{Deserialize, Serialize};

/// Top of the units slider; a cap at this value means "no cap".
pub const MAX_UNITS_SLIDER: u8 = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub quarter: Option<String>,
    pub dept: Option<String>,
    pub level: Option<String>,
    pub ge: Option<String>,
    pub time: Option<String>,
    pub format: Option<String>,
    pub max_units: Option<u8>,
}

impl FilterCriteria {
    /// The active unit ceiling, if any. Zero and the slider maximum disable it.
    pub fn unit_cap(&self) -> Option<u8> {
        self.max_units
            .filter(|&cap| cap > 0 && cap < MAX_UNITS_SLIDER)
    }

    /// The active format filter. Blank and `any` disable it.
    pub fn format_filter(&self) -> Option<&str> {
        self.format
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty() && !is_any(v))
    }

    pub fn is_empty(&self) -> bool {
        self.dept.is_none()
            && self.level.is_none()
            && self.ge.is_none()
            && self.format_filter().is_none()
            && self.unit_cap().is_none()
    }
}

fn is_any(value: &str) -> bool {
    value.eq_ignore_ascii_case("any")
}

/// Treat blank control values as unset.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Like [`non_empty`], but the `any` choice of a preference control is
/// also unset.
pub fn non_any(value: Option<&str>) -> Option<String> {
    non_empty(value).filter(|v| !is_any(v))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "match")]
    Relevance,
    #[serde(rename = "units-asc")]
    UnitsAsc,
    #[serde(rename = "units-desc")]
    UnitsDesc,
    #[serde(rename = "dept")]
    Department,
}

impl SortOrder {
    /// Unrecognized values yield `None`, which leaves result order untouched.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "match" => Some(SortOrder::Relevance),
            "units-asc" => Some(SortOrder::UnitsAsc),
            "units-desc" => Some(SortOrder::UnitsDesc),
            "dept" => Some(SortOrder::Department),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "match",
            SortOrder::UnitsAsc => "units-asc",
            SortOrder::UnitsDesc => "units-desc",
            SortOrder::Department => "dept",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
