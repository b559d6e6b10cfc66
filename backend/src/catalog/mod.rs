pub mod demo;
pub mod index;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Course, FilterCriteria};
use crate::search::pipeline;

pub use demo::demo_courses;
pub use index::{CatalogIndex, Facet, Facets};

/// Where courses come from. Sorting and rendering stay on our side, so a
/// real backend only has to answer "which courses match".
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn fetch_matching(
        &self,
        query: &str,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Course>, AppError>;

    async fn fetch_all(&self) -> Result<Vec<Course>, AppError> {
        self.fetch_matching("", &FilterCriteria::default()).await
    }
}

/// Fixed in-memory catalog.
pub struct DemoCatalog {
    courses: Vec<Course>,
}

impl DemoCatalog {
    pub fn new() -> Self {
        Self::with_courses(demo_courses())
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseSource for DemoCatalog {
    async fn fetch_matching(
        &self,
        query: &str,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Course>, AppError> {
        Ok(pipeline::filter_courses(&self.courses, query, criteria))
    }
}
