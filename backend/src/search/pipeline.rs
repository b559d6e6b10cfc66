//! Filter-then-sort pass over a course list.
//!
//! Everything here is pure: the caller's catalog is never mutated and the
//! same inputs always yield the same ordering.

use std::cmp::Ordering;

use crate::models::{Course, FilterCriteria, SortOrder};

/// Case-insensitive substring match against title, code, department,
/// explanation, or any GE code. A match in any one field keeps the course.
pub fn matches_query(course: &Course, query: &str) -> bool {
    let q = query.to_lowercase();
    if q.is_empty() {
        return true;
    }

    course.title.to_lowercase().contains(&q)
        || course.code.to_lowercase().contains(&q)
        || course.dept.to_lowercase().contains(&q)
        || course.explanation.to_lowercase().contains(&q)
        || course.ge.iter().any(|g| g.to_lowercase().contains(&q))
}

/// Structured filters, applied conjunctively.
pub fn matches_criteria(course: &Course, criteria: &FilterCriteria) -> bool {
    if let Some(dept) = &criteria.dept {
        if &course.dept != dept {
            return false;
        }
    }
    if let Some(level) = &criteria.level {
        if course.level.as_str() != level {
            return false;
        }
    }
    if let Some(ge) = &criteria.ge {
        if !course.ge.contains(ge) {
            return false;
        }
    }
    if let Some(format) = criteria.format_filter() {
        if course.format.as_str() != format {
            return false;
        }
    }
    if let Some(cap) = criteria.unit_cap() {
        if course.units > cap {
            return false;
        }
    }
    true
}

pub fn filter_courses(catalog: &[Course], query: &str, criteria: &FilterCriteria) -> Vec<Course> {
    catalog
        .iter()
        .filter(|c| matches_query(c, query))
        .filter(|c| matches_criteria(c, criteria))
        .cloned()
        .collect()
}

/// Stable sort; `None` keeps the incoming order.
pub fn sort_courses(courses: &mut [Course], order: Option<SortOrder>) {
    match order {
        Some(SortOrder::Relevance) => courses.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        Some(SortOrder::UnitsAsc) => courses.sort_by(|a, b| a.units.cmp(&b.units)),
        Some(SortOrder::UnitsDesc) => courses.sort_by(|a, b| b.units.cmp(&a.units)),
        Some(SortOrder::Department) => courses.sort_by(|a, b| collate(&a.dept, &b.dept)),
        None => {}
    }
}

/// Case-folded comparison first, byte order to break ties.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn run_pipeline(
    catalog: &[Course],
    query: &str,
    criteria: &FilterCriteria,
    order: Option<SortOrder>,
) -> Vec<Course> {
    let mut results = filter_courses(catalog, query, criteria);
    sort_courses(&mut results, order);
    results
}
