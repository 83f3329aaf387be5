//! JSON API consumed by the gallery frontend

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::search::{SearchResponse, SearchService, correct_spelling, suggestions};

#[derive(Deserialize)]
pub struct QueryParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub query: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
pub struct CorrectResponse {
    pub query: String,
    pub corrected: String,
}

pub fn router(service: Arc<SearchService>) -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/suggest", get(suggest))
        .route("/correct", get(correct))
        .with_state(service)
}

async fn search(
    State(service): State<Arc<SearchService>>,
    Query(params): Query<QueryParams>,
) -> Json<SearchResponse> {
    Json(service.search(&params.q).await)
}

async fn suggest(Query(params): Query<QueryParams>) -> Json<SuggestResponse> {
    Json(SuggestResponse {
        suggestions: suggestions(&params.q),
        query: params.q,
    })
}

async fn correct(Query(params): Query<QueryParams>) -> Json<CorrectResponse> {
    Json(CorrectResponse {
        corrected: correct_spelling(&params.q),
        query: params.q,
    })
}
