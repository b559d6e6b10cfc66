pub mod pipeline;
pub mod render;
pub mod session;

pub use pipeline::{filter_courses, matches_query, run_pipeline, sort_courses};
pub use render::{Badge, ResultsView, render_course_card, tag_badges};
pub use session::{Pill, ProfileBadge, SearchControls, SearchSession, SearchTicket};
