//! Course search backend for the Peter onboarding and search pages.
//!
//! The onboarding form produces a [`models::StudentProfile`] that is stored
//! under a single key; the search page filters and sorts a course catalog
//! against the current filter controls and renders result cards.

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod onboarding;
pub mod search;
pub mod services;
pub mod state;

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::catalog::{CourseSource, DemoCatalog};
use crate::config::AppConfig;
use crate::db::SqliteProfileStore;
use crate::services::{SESSION_LATENCY, SearchService};
use crate::state::AppState;

/// Wire the default state: sqlite-backed profile store, demo catalog.
pub fn build_state(db: SqlitePool, config: AppConfig) -> AppState {
    let source: Arc<dyn CourseSource> = Arc::new(DemoCatalog::new());
    AppState {
        profiles: Arc::new(SqliteProfileStore::new(db.clone())),
        search: Arc::new(SearchService::new(source, SESSION_LATENCY)),
        db,
        config,
    }
}
