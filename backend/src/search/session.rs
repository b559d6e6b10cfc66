//! Search page state: the filter controls, quick-filter pills, and the
//! rendered results, kept in one explicit object instead of ambient page
//! globals.
//!
//! A search is split into [`SearchSession::begin_search`], which snapshots the
//! controls into a [`SearchTicket`], and [`SearchSession::complete`], which
//! renders the results for that ticket. Every ticket carries a sequence
//! number; only the latest one issued may render; earlier completions are
//! rejected with [`AppError::StaleSearchDiscarded`].

use serde::Serialize;

use crate::error::AppError;
use crate::models::{Course, FilterCriteria, MAX_UNITS_SLIDER, SortOrder, StudentProfile, non_any, non_empty};
use crate::search::render::ResultsView;

pub const NO_PREREQ_HINT: &str = "no prerequisites";
pub const LOW_WORKLOAD_HINT: &str = "lighter workload";

/// Current values of every filter control on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchControls {
    pub query: String,
    pub quarter: String,
    pub dept: String,
    pub level: String,
    pub ge: String,
    pub time: String,
    pub format: String,
    pub units: u8,
}

impl Default for SearchControls {
    fn default() -> Self {
        Self {
            query: String::new(),
            quarter: String::new(),
            dept: String::new(),
            level: String::new(),
            ge: String::new(),
            time: String::new(),
            format: String::new(),
            units: MAX_UNITS_SLIDER,
        }
    }
}

impl SearchControls {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            quarter: non_empty(Some(self.quarter.as_str())),
            dept: non_empty(Some(self.dept.as_str())),
            level: non_empty(Some(self.level.as_str())),
            ge: non_empty(Some(self.ge.as_str())),
            time: non_any(Some(self.time.as_str())),
            format: non_any(Some(self.format.as_str())),
            max_units: Some(self.units),
        }
    }

    fn field_mut(&mut self, field: ControlField) -> &mut String {
        match field {
            ControlField::Query => &mut self.query,
            ControlField::Ge => &mut self.ge,
            ControlField::Time => &mut self.time,
            ControlField::Format => &mut self.format,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlField {
    Query,
    Ge,
    Time,
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pill {
    Major,
    Ge,
    NoPrereq,
    LowWorkload,
    Morning,
    Online,
}

impl Pill {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "major" => Some(Pill::Major),
            "ge" => Some(Pill::Ge),
            "no-prereq" => Some(Pill::NoPrereq),
            "low-workload" => Some(Pill::LowWorkload),
            "morning" => Some(Pill::Morning),
            "online" => Some(Pill::Online),
            _ => None,
        }
    }
}

/// What activating a pill changed, so deactivating it can put it back.
#[derive(Debug, Clone)]
struct Snapshot {
    field: ControlField,
    previous: String,
    applied: String,
}

#[derive(Debug, Clone)]
struct ActivePill {
    pill: Pill,
    snapshot: Option<Snapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileBadge {
    pub initial: char,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
    pub criteria: FilterCriteria,
    pub sort: Option<SortOrder>,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    pub controls: SearchControls,
    sort: Option<SortOrder>,
    profile: Option<StudentProfile>,
    badge: Option<ProfileBadge>,
    pills: Vec<ActivePill>,
    loading: bool,
    results: ResultsView,
    issued: u64,
}

impl SearchSession {
    /// Page load. A profile shows the badge and pre-selects its target quarter.
    pub fn new(profile: Option<StudentProfile>) -> Self {
        let mut controls = SearchControls::default();
        let mut badge = None;

        if let Some(p) = &profile {
            badge = p.initial().map(|initial| ProfileBadge {
                initial,
                name: p.display_name.clone(),
            });
            if !p.quarter_target.is_empty() {
                controls.quarter = p.quarter_target.clone();
            }
        }

        Self {
            controls,
            sort: Some(SortOrder::default()),
            profile,
            badge,
            pills: Vec::new(),
            loading: false,
            results: ResultsView::empty(),
            issued: 0,
        }
    }

    /// True when the page should run one search on load.
    pub fn wants_initial_search(&self) -> bool {
        self.profile.as_ref().is_some_and(StudentProfile::has_major)
    }

    pub fn profile(&self) -> Option<&StudentProfile> {
        self.profile.as_ref()
    }

    pub fn badge(&self) -> Option<&ProfileBadge> {
        self.badge.as_ref()
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Unrecognized values are kept as "no ordering".
    pub fn set_sort(&mut self, value: &str) {
        self.sort = SortOrder::parse(value);
    }

    pub fn set_query(&mut self, text: &str) {
        self.controls.query = text.to_string();
    }

    pub fn set_units(&mut self, units: u8) {
        self.controls.units = units.min(MAX_UNITS_SLIDER);
    }

    pub fn active_pills(&self) -> Vec<Pill> {
        self.pills.iter().map(|p| p.pill).collect()
    }

    pub fn is_pill_active(&self, pill: Pill) -> bool {
        self.pills.iter().any(|p| p.pill == pill)
    }

    fn pill_effect(&self, pill: Pill) -> Option<(ControlField, String)> {
        match pill {
            Pill::Major => self
                .profile
                .as_ref()
                .filter(|p| p.has_major())
                .map(|p| (ControlField::Query, p.major.clone())),
            Pill::Ge => self
                .profile
                .as_ref()
                .and_then(StudentProfile::first_ge_need)
                .map(|g| (ControlField::Ge, g.to_string())),
            Pill::NoPrereq => Some((ControlField::Query, NO_PREREQ_HINT.to_string())),
            Pill::LowWorkload => Some((ControlField::Query, LOW_WORKLOAD_HINT.to_string())),
            Pill::Morning => Some((ControlField::Time, "morning".to_string())),
            Pill::Online => Some((ControlField::Format, "online".to_string())),
        }
    }

    /// Flip a pill and return whether it is now active. The caller re-runs
    /// the search afterwards.
    pub fn toggle_pill(&mut self, pill: Pill) -> bool {
        match self.pills.iter().position(|p| p.pill == pill) {
            Some(idx) => {
                self.deactivate(idx);
                false
            }
            None => {
                let snapshot = self.pill_effect(pill).map(|(field, value)| {
                    let slot = self.controls.field_mut(field);
                    let previous = std::mem::replace(slot, value.clone());
                    Snapshot {
                        field,
                        previous,
                        applied: value,
                    }
                });
                self.pills.push(ActivePill { pill, snapshot });
                true
            }
        }
    }

    fn deactivate(&mut self, idx: usize) {
        let removed = self.pills.remove(idx);
        let Some(snapshot) = removed.snapshot else {
            return;
        };

        // A later pill that overwrote our value directly inherits our
        // "previous"; one that overwrote a manual edit keeps its own.
        let later = self.pills[idx..]
            .iter_mut()
            .filter_map(|p| p.snapshot.as_mut())
            .find(|s| s.field == snapshot.field);

        match later {
            Some(next) => {
                if next.previous == snapshot.applied {
                    next.previous = snapshot.previous;
                }
            }
            None => {
                let slot = self.controls.field_mut(snapshot.field);
                if *slot == snapshot.applied {
                    *slot = snapshot.previous;
                }
            }
        }
    }

    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued += 1;
        self.loading = true;

        SearchTicket {
            seq: self.issued,
            query: self.controls.query.trim().to_string(),
            criteria: self.controls.criteria(),
            sort: self.sort,
        }
    }

    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    /// Render the results of `ticket` if it is still the latest search.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        courses: &[Course],
    ) -> Result<&ResultsView, AppError> {
        if ticket.seq != self.issued {
            return Err(AppError::StaleSearchDiscarded {
                seq: ticket.seq,
                latest: self.issued,
            });
        }

        self.loading = false;
        self.results = ResultsView::render(courses);
        Ok(&self.results)
    }

    /// A search that produced nothing to render. Hides the loading indicator
    /// if no newer search is pending.
    pub fn abandon(&mut self, ticket: &SearchTicket) {
        if ticket.seq == self.issued {
            self.loading = false;
        }
    }

    /// Clear all controls except the quarter, drop pills without reverting
    /// them, supersede in-flight searches, and show the empty state.
    pub fn reset(&mut self) {
        self.controls = SearchControls {
            quarter: std::mem::take(&mut self.controls.quarter),
            ..SearchControls::default()
        };
        self.pills.clear();
        self.issued += 1;
        self.loading = false;
        self.results = ResultsView::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_courses;
    use crate::models::{Commuter, FormatPreference, Priority, TimeOfDay, Workload};

    fn profile(major: &str, ge: &[&str]) -> StudentProfile {
        StudentProfile {
            display_name: "peter".to_string(),
            standing: "sophomore".to_string(),
            college: "ICS".to_string(),
            major: major.to_string(),
            minor: String::new(),
            priority: Priority::Degree,
            ge_needed: ge.iter().map(|g| g.to_string()).collect(),
            preferred_time: TimeOfDay::Any,
            workload: Workload::Moderate,
            course_format: FormatPreference::Any,
            commuter: Commuter::No,
            completed_courses: vec![],
            quarter_target: "Winter 2027".to_string(),
            max_units: 16,
        }
    }

    #[test]
    fn test_new_with_profile_prefills_quarter_and_badge() {
        let session = SearchSession::new(Some(profile("Computer Science", &[])));
        assert_eq!(session.controls.quarter, "Winter 2027");
        assert_eq!(
            session.badge(),
            Some(&ProfileBadge {
                initial: 'P',
                name: "peter".to_string()
            })
        );
        assert!(session.wants_initial_search());
        assert_eq!(session.sort(), Some(SortOrder::Relevance));
    }

    #[test]
    fn test_no_initial_search_without_major() {
        assert!(!SearchSession::new(None).wants_initial_search());
        assert!(!SearchSession::new(Some(profile("  ", &[]))).wants_initial_search());
    }

    #[test]
    fn test_major_pill_without_profile_changes_nothing() {
        let mut session = SearchSession::new(None);
        session.set_query("calc");
        assert!(session.toggle_pill(Pill::Major));
        assert_eq!(session.controls.query, "calc");
        assert!(!session.toggle_pill(Pill::Major));
        assert_eq!(session.controls.query, "calc");
    }

    #[test]
    fn test_pill_toggle_is_reversible() {
        let mut session = SearchSession::new(Some(profile("Computer Science", &["III", "Ia"])));
        session.set_query("algo");

        session.toggle_pill(Pill::Major);
        session.toggle_pill(Pill::Ge);
        session.toggle_pill(Pill::Morning);
        assert_eq!(session.controls.query, "Computer Science");
        assert_eq!(session.controls.ge, "III");
        assert_eq!(session.controls.time, "morning");
        assert_eq!(session.active_pills(), vec![Pill::Major, Pill::Ge, Pill::Morning]);

        session.toggle_pill(Pill::Ge);
        session.toggle_pill(Pill::Morning);
        session.toggle_pill(Pill::Major);
        assert_eq!(session.controls.query, "algo");
        assert_eq!(session.controls.ge, "");
        assert_eq!(session.controls.time, "");
        assert!(session.active_pills().is_empty());
    }

    #[test]
    fn test_stacked_pills_on_same_control() {
        let mut session = SearchSession::new(None);
        session.set_query("start");

        session.toggle_pill(Pill::NoPrereq);
        session.toggle_pill(Pill::LowWorkload);
        assert_eq!(session.controls.query, LOW_WORKLOAD_HINT);

        // removing the lower pill leaves the newer value in place
        session.toggle_pill(Pill::NoPrereq);
        assert_eq!(session.controls.query, LOW_WORKLOAD_HINT);

        session.toggle_pill(Pill::LowWorkload);
        assert_eq!(session.controls.query, "start");
    }

    #[test]
    fn test_manual_edit_between_stacked_pills_is_kept() {
        let mut session = SearchSession::new(None);
        session.set_query("start");

        session.toggle_pill(Pill::NoPrereq);
        session.set_query("manual");
        session.toggle_pill(Pill::LowWorkload);

        session.toggle_pill(Pill::NoPrereq);
        assert_eq!(session.controls.query, LOW_WORKLOAD_HINT);

        session.toggle_pill(Pill::LowWorkload);
        assert_eq!(session.controls.query, "manual");
    }

    #[test]
    fn test_manual_edit_survives_pill_deactivation() {
        let mut session = SearchSession::new(None);
        session.toggle_pill(Pill::Online);
        session.controls.format = "hybrid".to_string();
        session.toggle_pill(Pill::Online);
        assert_eq!(session.controls.format, "hybrid");
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut session = SearchSession::new(None);
        let courses = demo_courses();

        let first = session.begin_search();
        session.set_query("calc");
        let second = session.begin_search();
        assert_eq!(second.query, "calc");

        let view = session
            .complete(&second, &courses[3..4])
            .expect("latest search should render");
        assert_eq!(view.count, 1);
        assert!(!session.is_loading());

        let err = session.complete(&first, &courses).unwrap_err();
        assert!(matches!(err, AppError::StaleSearchDiscarded { seq: 1, latest: 2 }));
        assert_eq!(session.results().count, 1);
    }

    #[test]
    fn test_reset_yields_empty_state() {
        let mut session = SearchSession::new(Some(profile("Math", &["Va"])));
        session.controls.dept = "MATH".to_string();
        session.set_units(4);
        session.toggle_pill(Pill::Morning);

        let pending = session.begin_search();
        let ticket = session.begin_search();
        session
            .complete(&ticket, &demo_courses())
            .expect("latest search should render");
        let in_flight = session.begin_search();
        assert_eq!(pending.seq, 1);

        session.reset();

        assert_eq!(session.results(), &ResultsView::empty());
        assert!(!session.is_loading());
        assert!(session.active_pills().is_empty());
        assert_eq!(session.controls.units, MAX_UNITS_SLIDER);
        assert_eq!(session.controls.dept, "");
        assert_eq!(session.controls.time, "");
        assert_eq!(session.controls.quarter, "Winter 2027");

        assert!(session.complete(&in_flight, &demo_courses()).is_err());
        assert_eq!(session.results(), &ResultsView::empty());
    }

    #[test]
    fn test_unknown_sort_clears_ordering() {
        let mut session = SearchSession::new(None);
        session.set_sort("popularity");
        assert_eq!(session.begin_search().sort, None);
        session.set_sort("units-asc");
        assert_eq!(session.begin_search().sort, Some(SortOrder::UnitsAsc));
    }
}
