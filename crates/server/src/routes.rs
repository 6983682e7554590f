use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use models::post::{Post, PostDraft, PostPatch};
use service::{
    errors::ServiceError,
    post_store::{PostStore, SortOrder},
};

use crate::errors::ApiError;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `GET /api/posts` — all posts in insertion order, or sorted when both
/// `sort` and `direction` are supplied. Any query parameter at all puts the
/// request on the sort path, so a query string without a valid pair is
/// rejected.
async fn list_posts(
    State(store): State<Arc<PostStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let order = SortOrder::from_params(
        params.get("sort").map(String::as_str),
        params.get("direction").map(String::as_str),
    )?;
    if order.is_none() && !params.is_empty() {
        return Err(ApiError::InvalidQuery);
    }
    Ok(Json(store.list(order).await))
}

/// `POST /api/posts` — create a post. The body is decoded as loose JSON so
/// missing/non-string fields come back in one `missing_fields` list.
async fn create_post(
    State(store): State<Arc<PostStore>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let draft = PostDraft::from_value(&body).map_err(ServiceError::from)?;
    let post = store.create(draft).await;
    Ok((StatusCode::CREATED, Json(post)))
}

/// `PUT /api/posts/:id` — partial update; an `id` in the body is ignored.
/// The body is decoded as loose JSON like create, so a non-string field
/// comes back as a structured validation error instead of an extractor
/// rejection.
async fn update_post(
    State(store): State<Arc<PostStore>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Result<Json<Post>, ApiError> {
    let patch = PostPatch::from_value(&body).map_err(ServiceError::from)?;
    Ok(Json(store.update(id, patch).await?))
}

/// `DELETE /api/posts/:id`
async fn delete_post(
    State(store): State<Arc<PostStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    store.delete(id).await?;
    Ok(Json(json!({
        "message": format!("Post with id {id} has been deleted successfully.")
    })))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    title: Option<String>,
    content: Option<String>,
}

/// `GET /api/posts/search` — substring match on title OR content.
///
/// Known quirk, kept on purpose: a parameter that is supplied but empty is a
/// substring of every string, so it matches the whole collection, and a
/// request with no parameters returns every post. Never fails.
async fn search_posts(
    State(store): State<Arc<PostStore>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Post>> {
    Json(store.search(query.title.as_deref(), query.content.as_deref()).await)
}

/// Build the full application router.
pub fn build_router(store: Arc<PostStore>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/:id", put(update_post).delete(delete_post))
        .route("/api/posts/search", get(search_posts))
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
