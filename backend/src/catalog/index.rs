//! Secondary indexes over a course list: course ids grouped by department,
//! level, GE category, and instructor. The search page uses the facet counts
//! to fill its filter dropdowns.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Course;

#[derive(Debug, Default)]
pub struct CatalogIndex {
    pub by_dept: BTreeMap<String, Vec<String>>,
    pub by_level: BTreeMap<String, Vec<String>>,
    pub by_ge: BTreeMap<String, Vec<String>>,
    pub by_instructor: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Facets {
    pub departments: Vec<Facet>,
    pub levels: Vec<Facet>,
    pub ge: Vec<Facet>,
    pub instructors: Vec<Facet>,
}

impl CatalogIndex {
    pub fn build(courses: &[Course]) -> Self {
        let mut index = Self::default();

        for course in courses {
            push(&mut index.by_dept, &course.dept, &course.id);
            push(&mut index.by_level, course.level.as_str(), &course.id);
            push(&mut index.by_instructor, &course.instructor, &course.id);
            for ge in &course.ge {
                push(&mut index.by_ge, ge, &course.id);
            }
        }

        index
    }

    pub fn facets(&self) -> Facets {
        Facets {
            departments: counts(&self.by_dept),
            levels: counts(&self.by_level),
            ge: counts(&self.by_ge),
            instructors: counts(&self.by_instructor),
        }
    }
}

fn push(map: &mut BTreeMap<String, Vec<String>>, key: &str, id: &str) {
    map.entry(key.to_string()).or_default().push(id.to_string());
}

fn counts(map: &BTreeMap<String, Vec<String>>) -> Vec<Facet> {
    map.iter()
        .map(|(value, ids)| Facet {
            value: value.clone(),
            count: ids.len(),
        })
        .collect()
}
