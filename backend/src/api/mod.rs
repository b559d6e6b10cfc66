use axum::Json;
use axum::extract::Query;
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{CatalogIndex, CourseSource, Facets};
use crate::db::ProfileStore;
use crate::error::AppError;
use crate::models::*;
use crate::onboarding::{ProfileForm, submit_profile};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    pub q: String,
    pub quarter: Option<String>,
    pub dept: Option<String>,
    pub level: Option<String>,
    pub ge: Option<String>,
    pub time: Option<String>,
    pub format: Option<String>,
    pub max_units: Option<String>,
    pub sort: Option<String>,
}

impl SearchParams {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            quarter: non_empty(self.quarter.as_deref()),
            dept: non_empty(self.dept.as_deref()),
            level: non_empty(self.level.as_deref()),
            ge: non_empty(self.ge.as_deref()),
            time: non_any(self.time.as_deref()),
            format: non_any(self.format.as_deref()),
            max_units: self
                .max_units
                .as_deref()
                .and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Missing means the default order; an unknown value means no ordering.
    pub fn sort(&self) -> Option<SortOrder> {
        match self.sort.as_deref() {
            None | Some("") => Some(SortOrder::default()),
            Some(value) => SortOrder::parse(value),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub profile: Option<StudentProfile>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub courses: Vec<Course>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OnboardingResponse {
    pub profile: StudentProfile,
    pub redirect: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/profile", get(get_profile).put(put_profile))
        .route("/api/onboarding", post(submit_onboarding))
        .route("/api/search", get(search).post(search_with_profile))
        .route("/api/catalog/facets", get(catalog_facets))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn get_profile(State(state): State<AppState>) -> Result<Json<StudentProfile>, AppError> {
    let profile = state.profiles.load().await?.ok_or(AppError::NotFound)?;
    Ok(Json(profile))
}

async fn put_profile(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<StudentProfile>, AppError> {
    state.profiles.save(&profile).await?;
    info!("profile replaced for {}", profile.display_name);
    Ok(Json(profile))
}

async fn submit_onboarding(
    State(state): State<AppState>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let (profile, nav) =
        submit_profile(&form, state.config.default_max_units, state.profiles.as_ref()).await?;
    Ok(Json(OnboardingResponse {
        profile,
        redirect: nav.path().to_string(),
    }))
}

async fn run_search(state: &AppState, params: &SearchParams) -> Result<SearchResponse, AppError> {
    let criteria = params.criteria();
    let courses = state
        .search
        .execute(params.q.trim(), &criteria, params.sort())
        .await?;
    debug!("search q={:?} matched {} courses", params.q, courses.len());
    Ok(SearchResponse {
        count: courses.len(),
        courses,
    })
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    Ok(Json(run_search(&state, &params).await?))
}

async fn search_with_profile(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    Json(body): Json<SearchBody>,
) -> Result<Json<SearchResponse>, AppError> {
    if let Some(profile) = &body.profile {
        // Ranking is the catalog's precomputed score; the profile is only recorded.
        debug!("search from {} ({})", profile.display_name, profile.major);
    }
    Ok(Json(run_search(&state, &params).await?))
}

async fn catalog_facets(State(state): State<AppState>) -> Result<Json<Facets>, AppError> {
    let courses = state.search.source().fetch_all().await?;
    Ok(Json(CatalogIndex::build(&courses).facets()))
}
