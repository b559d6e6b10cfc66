pub mod course;
pub mod filter;
pub mod profile;

pub use course::{Course, DeliveryFormat, Level, Tag};
pub use filter::{FilterCriteria, MAX_UNITS_SLIDER, SortOrder, non_any, non_empty};
pub use profile::{
    Commuter, DEFAULT_DISPLAY_NAME, FormatPreference, Priority, StudentProfile, TimeOfDay, Workload,
    parse_completed_courses, parse_or_default,
};
