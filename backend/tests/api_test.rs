use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use peter_backend::api::{OnboardingResponse, SearchResponse, router};
use peter_backend::build_state;
use peter_backend::config::AppConfig;
use peter_backend::models::{StudentProfile, TimeOfDay};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

async fn setup_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    router(build_state(pool, AppConfig::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

#[tokio::test]
async fn test_health() {
    let app = setup_app().await;
    let (status, _) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_profile_missing_is_not_found() {
    let app = setup_app().await;
    let (status, body) = send(&app, get("/api/profile")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let body: Value = serde_json::from_slice(&body).expect("Invalid JSON");
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn test_onboarding_defaults_and_persists() {
    let app = setup_app().await;

    let form = json!({
        "displayName": "   ",
        "major": "Computer Science",
        "geNeeded": ["Ia", "III"],
        "timeSlot": "morning",
        "completedCourses": "ICS 31, , MATH 2A",
        "quarterTarget": "Fall 2026",
        "maxUnits": "not a number"
    });
    let (status, body) = send(&app, with_json("POST", "/api/onboarding", &form)).await;
    assert_eq!(status, StatusCode::OK);

    let response: OnboardingResponse = serde_json::from_slice(&body).expect("Invalid JSON");
    assert_eq!(response.redirect, "/search");
    assert_eq!(response.profile.display_name, "Student");
    assert_eq!(response.profile.preferred_time, TimeOfDay::Morning);
    assert_eq!(response.profile.completed_courses, vec!["ICS 31", "MATH 2A"]);
    assert_eq!(response.profile.max_units, 16);

    let (status, body) = send(&app, get("/api/profile")).await;
    assert_eq!(status, StatusCode::OK);
    let stored: Value = serde_json::from_slice(&body).expect("Invalid JSON");
    assert_eq!(stored["displayName"], "Student");
    assert_eq!(stored["geNeeded"], json!(["Ia", "III"]));
    assert_eq!(stored["workload"], "moderate");
    assert_eq!(stored["commuter"], "no");
}

#[tokio::test]
async fn test_put_profile_overwrites() {
    let app = setup_app().await;

    let (_, body) = send(&app, with_json("POST", "/api/onboarding", &json!({}))).await;
    let first: OnboardingResponse = serde_json::from_slice(&body).expect("Invalid JSON");

    let mut replacement: StudentProfile = first.profile;
    replacement.display_name = "Peter".to_string();
    replacement.major = "Mathematics".to_string();
    let replacement_json = serde_json::to_value(&replacement).expect("serialize");

    let (status, _) = send(&app, with_json("PUT", "/api/profile", &replacement_json)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/api/profile")).await;
    let stored: StudentProfile = serde_json::from_slice(&body).expect("Invalid JSON");
    assert_eq!(stored, replacement);
}

#[tokio::test]
async fn test_search_by_query() {
    let app = setup_app().await;
    let (status, body) = send(&app, get("/api/search?q=calc")).await;
    assert_eq!(status, StatusCode::OK);

    let response: SearchResponse = serde_json::from_slice(&body).expect("Invalid JSON");
    assert_eq!(response.count, 1);
    assert_eq!(response.courses[0].id, "MATH2A");
}

#[tokio::test]
async fn test_search_filters_and_sort() {
    let app = setup_app().await;
    let (status, body) = send(
        &app,
        get("/api/search?q=&dept=&level=lower&ge=III&maxUnits=8&sort=dept"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response: SearchResponse = serde_json::from_slice(&body).expect("Invalid JSON");
    let ids: Vec<&str> = response.courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["ANTHRO2A", "PSYCH9A"]);
}

#[tokio::test]
async fn test_search_online_format_is_empty() {
    let app = setup_app().await;
    let (_, body) = send(&app, get("/api/search?format=online")).await;
    let response: SearchResponse = serde_json::from_slice(&body).expect("Invalid JSON");
    assert_eq!(response.count, 0);
    assert!(response.courses.is_empty());
}

#[tokio::test]
async fn test_search_any_format_and_time_do_not_filter() {
    let app = setup_app().await;
    let (status, body) = send(&app, get("/api/search?format=any&time=Any")).await;
    assert_eq!(status, StatusCode::OK);

    let response: SearchResponse = serde_json::from_slice(&body).expect("Invalid JSON");
    assert_eq!(response.count, 10);
}

#[tokio::test]
async fn test_search_post_accepts_profile_body() {
    let app = setup_app().await;

    let (_, body) = send(&app, with_json("POST", "/api/onboarding", &json!({"major": "Psychology"}))).await;
    let onboarded: OnboardingResponse = serde_json::from_slice(&body).expect("Invalid JSON");

    let request = with_json(
        "POST",
        "/api/search?level=upper",
        &json!({ "profile": onboarded.profile }),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let response: SearchResponse = serde_json::from_slice(&body).expect("Invalid JSON");
    assert_eq!(response.count, 1);
    assert_eq!(response.courses[0].id, "COMPSCI161");
}

#[tokio::test]
async fn test_catalog_facets() {
    let app = setup_app().await;
    let (status, body) = send(&app, get("/api/catalog/facets")).await;
    assert_eq!(status, StatusCode::OK);

    let facets: Value = serde_json::from_slice(&body).expect("Invalid JSON");
    assert_eq!(facets["levels"], json!([
        { "value": "lower", "count": 9 },
        { "value": "upper", "count": 1 }
    ]));
    assert_eq!(facets["departments"].as_array().map(Vec::len), Some(9));
}
