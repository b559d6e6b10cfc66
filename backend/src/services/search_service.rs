use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::catalog::CourseSource;
use crate::error::AppError;
use crate::models::{Course, FilterCriteria, SortOrder};
use crate::search::{Pill, ResultsView, SearchSession, sort_courses};

/// Simulated round trip in front of [`SearchService::run`]. HTTP handlers
/// call [`SearchService::execute`] and never wait on it.
pub const SESSION_LATENCY: Duration = Duration::from_millis(400);

/// Runs searches against a [`CourseSource`], with an optional artificial
/// round-trip delay in front of each page-driven search.
pub struct SearchService {
    source: Arc<dyn CourseSource>,
    latency: Duration,
}

impl SearchService {
    pub fn new(source: Arc<dyn CourseSource>, latency: Duration) -> Self {
        Self { source, latency }
    }

    pub fn source(&self) -> Arc<dyn CourseSource> {
        self.source.clone()
    }

    /// Fetch and sort, no delay.
    pub async fn execute(
        &self,
        query: &str,
        criteria: &FilterCriteria,
        sort: Option<SortOrder>,
    ) -> Result<Vec<Course>, AppError> {
        let mut courses = self.source.fetch_matching(query, criteria).await?;
        sort_courses(&mut courses, sort);
        Ok(courses)
    }

    /// One page-driven search. The session lock is not held across the delay
    /// or the fetch, so later searches may start while this one is pending;
    /// whichever was issued last is the only one allowed to render.
    pub async fn run(&self, session: &Mutex<SearchSession>) -> Result<ResultsView, AppError> {
        let ticket = session.lock().await.begin_search();
        info!("search #{} started: q={:?} sort={:?}", ticket.seq, ticket.query, ticket.sort);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let courses = match self.execute(&ticket.query, &ticket.criteria, ticket.sort).await {
            Ok(courses) => courses,
            Err(e) => {
                warn!("search #{} failed: {}", ticket.seq, e);
                session.lock().await.abandon(&ticket);
                return Err(e);
            }
        };

        let mut guard = session.lock().await;
        match guard.complete(&ticket, &courses) {
            Ok(view) => {
                info!("search #{} rendered {} courses", ticket.seq, view.count);
                Ok(view.clone())
            }
            Err(e) => {
                debug!("{}", e);
                Err(e)
            }
        }
    }

    /// Page load: search once if the profile declares a major.
    pub async fn initial_load(
        &self,
        session: &Mutex<SearchSession>,
    ) -> Result<Option<ResultsView>, AppError> {
        let wants = session.lock().await.wants_initial_search();
        if !wants {
            debug!("no profile major; starting from the empty state");
            return Ok(None);
        }
        self.run(session).await.map(Some)
    }

    pub async fn toggle_pill(
        &self,
        session: &Mutex<SearchSession>,
        pill: Pill,
    ) -> Result<ResultsView, AppError> {
        let active = session.lock().await.toggle_pill(pill);
        debug!("pill {:?} active={}", pill, active);
        self.run(session).await
    }
}
