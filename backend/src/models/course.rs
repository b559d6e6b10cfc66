use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Lower,
    Upper,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Lower => "lower",
            Level::Upper => "upper",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryFormat {
    InPerson,
    Online,
    Hybrid,
}

impl DeliveryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryFormat::InPerson => "in-person",
            DeliveryFormat::Online => "online",
            DeliveryFormat::Hybrid => "hybrid",
        }
    }
}

/// Category tags; each one drives a badge on the result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Major,
    Ge,
    Prereq,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    pub dept: String,
    pub level: Level,
    pub units: u8,
    pub instructor: String,
    pub time: String,
    pub location: String,
    pub format: DeliveryFormat,
    pub ge: Vec<String>,
    pub tags: Vec<Tag>,
    pub match_score: u8,
    pub explanation: String,
}

impl Course {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}
