use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DISPLAY_NAME: &str = "Student";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Degree,
    Ge,
    Interest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Any,
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatPreference {
    #[default]
    Any,
    InPerson,
    Online,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    Light,
    #[default]
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commuter {
    Yes,
    #[default]
    No,
}

/// Implements `FromStr` through the serde wire names so form values and
/// stored JSON agree on spelling.
macro_rules! wire_from_str {
    ($($ty:ty),*) => {$(
        impl FromStr for $ty {
            type Err = serde_json::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                serde_json::from_value(serde_json::Value::String(s.to_string()))
            }
        }
    )*};
}

wire_from_str!(Priority, TimeOfDay, FormatPreference, Workload, Commuter);

/// Parse an optional radio-group value, falling back to the enum default
/// when unset or unrecognized.
pub fn parse_or_default<T: FromStr + Default>(value: Option<&str>) -> T {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

/// The record produced by onboarding and read by the search page.
///
/// Field names on the wire match what the browser client keeps under
/// `peterProfile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub display_name: String,
    pub standing: String,
    pub college: String,
    pub major: String,
    pub minor: String,
    pub priority: Priority,
    pub ge_needed: Vec<String>,
    pub preferred_time: TimeOfDay,
    pub workload: Workload,
    pub course_format: FormatPreference,
    pub commuter: Commuter,
    pub completed_courses: Vec<String>,
    pub quarter_target: String,
    pub max_units: u32,
}

impl StudentProfile {
    /// Uppercased first character of the display name, for the avatar.
    pub fn initial(&self) -> Option<char> {
        self.display_name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }

    pub fn first_ge_need(&self) -> Option<&str> {
        self.ge_needed.first().map(String::as_str)
    }

    pub fn has_major(&self) -> bool {
        !self.major.trim().is_empty()
    }
}

/// Split comma-separated course codes, trimming and dropping empties.
pub fn parse_completed_courses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
