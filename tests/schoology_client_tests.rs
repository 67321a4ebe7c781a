use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
    routing::get,
};
use dashdeck::{SchoologyClient, SchoologySettings};
use serde_json::json;
use url::Url;

async fn assignments(Path(section): Path<String>, headers: HeaderMap) -> impl IntoResponse {
    let signed = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("OAuth ") && v.contains("oauth_signature="));
    if !signed {
        return (StatusCode::UNAUTHORIZED, "missing oauth header").into_response();
    }
    match section.as_str() {
        "100" => Json(json!({
            "assignment": [
                {
                    "id": 7,
                    "title": "Essay",
                    "description": "",
                    "due": "2026-10-20 23:59:00",
                    "max_points": "25",
                    "assignment_url": "https://school.example.com/assignment/7"
                },
                { "id": "8", "title": null }
            ]
        }))
        .into_response(),
        // Assignments succeed here while grades for the same section do not.
        "200" => Json(json!({ "assignment": [{ "id": 9, "title": "Quiz" }] })).into_response(),
        "500" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        _ => (StatusCode::NOT_FOUND, "no such section").into_response(),
    }
}

async fn grades(Path(section): Path<String>) -> impl IntoResponse {
    match section.as_str() {
        "100" => Json(json!({ "grade": { "grade": 91.5, "letter_grade": "A-" } })).into_response(),
        _ => (StatusCode::NOT_FOUND, "no such section").into_response(),
    }
}

async fn spawn_upstream() -> Url {
    let app = Router::new()
        .route("/v1/sections/{id}/assignments", get(assignments))
        .route("/v1/sections/{id}/grades", get(grades));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Url::parse(&format!("http://{addr}/v1")).expect("valid base url")
}

fn settings() -> SchoologySettings {
    SchoologySettings {
        domain: "unused.example.com".into(),
        key: "consumer-key".into(),
        secret: "consumer-secret".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn signed_requests_are_normalized() {
    let base = spawn_upstream().await;
    let client = SchoologyClient::with_base_url(base, &settings(), reqwest::Client::new())
        .expect("client builds");

    let assignments = client.fetch_assignments("100").await.expect("assignments");
    assert_eq!(assignments.len(), 2);

    let essay = &assignments[0];
    assert_eq!(essay.id, "7");
    assert_eq!(essay.title, "Essay");
    assert_eq!(essay.description, "No description");
    assert!((essay.max_points - 25.0).abs() < f64::EPSILON);
    assert_eq!(essay.web_url, "https://school.example.com/assignment/7");

    let bare = &assignments[1];
    assert_eq!(bare.title, "Untitled");
    assert_eq!(bare.due, "No due date");
    assert_eq!(bare.web_url, "");

    let grades = client.fetch_grades("100").await.expect("grades");
    assert_eq!(grades.current_grade, "A-");
    assert_eq!(grades.current_score, "91.5");
}

#[tokio::test]
async fn non_success_status_is_a_readable_error() {
    let base = spawn_upstream().await;
    let client = SchoologyClient::with_base_url(base, &settings(), reqwest::Client::new())
        .expect("client builds");

    let err = client
        .fetch_assignments("404")
        .await
        .expect_err("404 must fail");
    let msg = err.to_string();
    assert!(msg.contains("404"), "unexpected message: {msg}");
    assert!(msg.contains("no such section"), "unexpected message: {msg}");

    let err = client
        .fetch_assignments("500")
        .await
        .expect_err("500 must fail");
    assert!(!err.is_config());
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn missing_credentials_fail_before_any_request() {
    let mut s = settings();
    s.secret.clear();
    let err = SchoologyClient::new(&s, reqwest::Client::new()).expect_err("needs secret");
    assert!(err.is_config());
    assert_eq!(err.to_string(), "Schoology API key and secret are required");

    let mut s = settings();
    s.domain = "  ".into();
    let err = SchoologyClient::new(&s, reqwest::Client::new()).expect_err("needs domain");
    assert_eq!(err.to_string(), "Schoology domain is required");
}

#[tokio::test]
async fn section_fetch_fails_whole_when_grades_fail() {
    let base = spawn_upstream().await;
    let client = SchoologyClient::with_base_url(base, &settings(), reqwest::Client::new())
        .expect("client builds");

    let (assignments, grades) = client.fetch_section("100").await.expect("section");
    assert_eq!(assignments.len(), 2);
    assert_eq!(grades.current_grade, "A-");

    // The assignments half alone is fine...
    assert_eq!(
        client
            .fetch_assignments("200")
            .await
            .expect("assignments")
            .len(),
        1
    );
    // ...but the grades 404 fails the section as a whole.
    let err = client
        .fetch_section("200")
        .await
        .expect_err("grades 404 must fail the section");
    let msg = err.to_string();
    assert!(msg.contains("404"), "unexpected message: {msg}");
    assert!(!err.is_config());
}
