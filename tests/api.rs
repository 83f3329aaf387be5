//! Router-level tests for the JSON API, driven in-process

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wanderai::api;
use wanderai::config::SearchConfig;
use wanderai::search::{SearchService, Synthesizer};

fn app() -> Router {
    let service = Arc::new(SearchService::with_synthesizer(
        None,
        &SearchConfig::default(),
        Synthesizer::with_seed(7),
    ));
    api::router(service)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn test_search_endpoint_returns_camel_case_places() {
    let (status, json) = get_json(app(), "/search?q=parris").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["query"], "parris");
    assert_eq!(json["canonicalQuery"], "paris");
    assert!(json["generation"].as_u64().unwrap() >= 1);

    let places = json["places"].as_array().unwrap();
    assert_eq!(places.len(), 6);
    let first = &places[0];
    assert!(first["longDescription"].is_string());
    assert!(first["bestTimeToVisit"].is_string());
    assert_eq!(first["images"].as_array().unwrap().len(), 5);
    assert!(first["attractions"].as_array().unwrap().len() >= 3);
}

#[tokio::test]
async fn test_suggest_endpoint() {
    let (status, json) = get_json(app(), "/suggest?q=gre").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["query"], "gre");
    let suggestions = json["suggestions"].as_array().unwrap();
    assert!(suggestions.iter().any(|s| s == "greece"));
    assert!(suggestions.len() <= 5);
}

#[tokio::test]
async fn test_correct_endpoint() {
    let (status, json) = get_json(app(), "/correct?q=afganistan").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["query"], "afganistan");
    assert_eq!(json["corrected"], "afghanistan");
}

#[tokio::test]
async fn test_missing_query_parameter_is_rejected() {
    let (status, _) = get_json(app(), "/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generation_increases_across_requests() {
    let app = app();

    let (_, first) = get_json(app.clone(), "/search?q=paris").await;
    let (_, second) = get_json(app, "/search?q=tokyo").await;

    assert!(second["generation"].as_u64().unwrap() > first["generation"].as_u64().unwrap());
}
