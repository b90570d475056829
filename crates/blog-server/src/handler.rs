use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use blog_types::Post;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /posts`. `name` is accepted as an alias for `title`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(alias = "name")]
    pub title: String,
    pub content: String,
}

/// Wire shape of a post. `name` mirrors `title` for clients that send and
/// read `name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub name: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id().to_string(),
            name: post.title().to_string(),
            title: post.title().to_string(),
            content: post.content().to_string(),
            created_at: format_created_at(post),
        }
    }
}

/// RFC 3339, UTC, whole seconds: `2006-01-02T15:04:05Z`.
fn format_created_at(post: &Post) -> String {
    post.created_at().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let posts = state.service().post_count()?;
    Ok(Json(json!({
        "name": "blog-server",
        "version": env!("CARGO_PKG_VERSION"),
        "posts": posts,
        "min_content_len": state.service().rules().min_content_len,
    })))
}

/// `POST /posts`
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let Json(req) = payload?;
    let post = state.service().create_post(&req.title, &req.content)?;
    Ok((StatusCode::CREATED, Json(PostResponse::from(&post))))
}

/// `GET /post/:id`
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state.service().get_post_by_id(&id)?;
    Ok(Json(PostResponse::from(&post)))
}

/// `GET /posts`
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = state.service().list_posts()?;
    Ok(Json(posts.iter().map(PostResponse::from).collect()))
}

/// `DELETE /posts`
pub async fn delete_posts(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.service().delete_all_posts()?;
    Ok(StatusCode::NO_CONTENT)
}
