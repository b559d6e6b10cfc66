//! Multi-step onboarding form.
//!
//! Holds the raw control values as the page would report them and turns them
//! into a fully populated [`StudentProfile`] on submit. Nothing here blocks
//! submission; every field has a default.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::ProfileStore;
use crate::error::AppError;
use crate::models::{
    DEFAULT_DISPLAY_NAME, StudentProfile, parse_completed_courses, parse_or_default,
};

pub const TOTAL_STEPS: u8 = 4;
pub const DEFAULT_MAX_UNITS: u32 = 16;

/// Raw control values. Radio groups are `None` when nothing is checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub display_name: String,
    pub standing: Option<String>,
    pub college: String,
    pub major: String,
    pub minor: String,
    pub priority: Option<String>,
    pub ge_needed: Vec<String>,
    pub time_slot: Option<String>,
    pub workload: Option<String>,
    pub format: Option<String>,
    pub commuter: Option<String>,
    pub completed_courses: String,
    pub quarter_target: String,
    pub max_units: String,
}

impl ProfileForm {
    /// Build the profile, applying every default.
    pub fn gather(&self, default_max_units: u32) -> StudentProfile {
        let display_name = match self.display_name.trim() {
            "" => DEFAULT_DISPLAY_NAME.to_string(),
            name => name.to_string(),
        };

        let mut ge_needed: Vec<String> = Vec::new();
        for code in &self.ge_needed {
            if !ge_needed.contains(code) {
                ge_needed.push(code.clone());
            }
        }

        StudentProfile {
            display_name,
            standing: self.standing.clone().unwrap_or_default(),
            college: self.college.clone(),
            major: self.major.trim().to_string(),
            minor: self.minor.trim().to_string(),
            priority: parse_or_default(self.priority.as_deref()),
            ge_needed,
            preferred_time: parse_or_default(self.time_slot.as_deref()),
            workload: parse_or_default(self.workload.as_deref()),
            course_format: parse_or_default(self.format.as_deref()),
            commuter: parse_or_default(self.commuter.as_deref()),
            completed_courses: parse_completed_courses(&self.completed_courses),
            quarter_target: self.quarter_target.clone(),
            max_units: self.max_units.trim().parse().unwrap_or(default_max_units),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DotStatus {
    Done,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDot {
    pub step: u8,
    pub status: DotStatus,
}

/// Where the browser goes after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    SearchPage,
}

impl Navigation {
    pub fn path(&self) -> &'static str {
        match self {
            Navigation::SearchPage => "/search",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OnboardingForm {
    pub form: ProfileForm,
    step: u8,
    default_max_units: u32,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNITS)
    }
}

impl OnboardingForm {
    pub fn new(default_max_units: u32) -> Self {
        Self {
            form: ProfileForm::default(),
            step: 1,
            default_max_units,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    /// No-op on the last step.
    pub fn advance(&mut self) {
        if self.step < TOTAL_STEPS {
            self.step += 1;
        }
    }

    /// No-op on the first step.
    pub fn retreat(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    pub fn step_dots(&self) -> Vec<StepDot> {
        (1..=TOTAL_STEPS)
            .map(|step| StepDot {
                step,
                status: match step.cmp(&self.step) {
                    std::cmp::Ordering::Less => DotStatus::Done,
                    std::cmp::Ordering::Equal => DotStatus::Active,
                    std::cmp::Ordering::Greater => DotStatus::Pending,
                },
            })
            .collect()
    }

    /// Flip a GE chip. Selected chips keep click order.
    pub fn toggle_chip(&mut self, code: &str) -> bool {
        let chips = &mut self.form.ge_needed;
        match chips.iter().position(|c| c == code) {
            Some(idx) => {
                chips.remove(idx);
                false
            }
            None => {
                chips.push(code.to_string());
                true
            }
        }
    }

    pub fn gather(&self) -> StudentProfile {
        self.form.gather(self.default_max_units)
    }

    pub async fn submit(&self, store: &dyn ProfileStore) -> Result<(StudentProfile, Navigation), AppError> {
        submit_profile(&self.form, self.default_max_units, store).await
    }
}

/// Gather, persist, and hand back the navigation target.
pub async fn submit_profile(
    form: &ProfileForm,
    default_max_units: u32,
    store: &dyn ProfileStore,
) -> Result<(StudentProfile, Navigation), AppError> {
    let profile = form.gather(default_max_units);
    store.save(&profile).await?;
    info!("profile saved for {} ({})", profile.display_name, profile.major);
    Ok((profile, Navigation::SearchPage))
}
