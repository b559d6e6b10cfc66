use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db::ProfileStore;
use crate::services::SearchService;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub profiles: Arc<dyn ProfileStore>,
    pub search: Arc<SearchService>,
    pub config: AppConfig,
}
