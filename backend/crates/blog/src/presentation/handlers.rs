//! HTTP Handlers
//!
//! Each handler translates one request into exactly one repository call and
//! renders the outcome. Handlers are stateless; the only shared resource is
//! the injected repository.

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use crate::presentation::dto::{MessageResponse, PostPayload, PostResponse};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::PostId;
use std::sync::Arc;

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/blog-post
pub async fn create_post<R>(
    State(state): State<BlogAppState<R>>,
    payload: Result<Json<PostPayload>, JsonRejection>,
) -> PostResult<(StatusCode, Json<PostResponse>)>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let Json(payload) = payload.map_err(|e| PostError::MalformedBody(e.body_text()))?;

    let post = state.repo.create(&payload.into_draft()).await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// GET /api/blog-post
pub async fn list_posts<R>(
    State(state): State<BlogAppState<R>>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let posts = state.repo.list().await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /api/blog-post/{id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<i32>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let post = state
        .repo
        .get(PostId::from(id))
        .await?
        .ok_or(PostError::NotFound)?;

    Ok(Json(post.into()))
}

/// PATCH /api/blog-post/{id}
pub async fn update_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<i32>,
    payload: Result<Json<PostPayload>, JsonRejection>,
) -> PostResult<Json<MessageResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let Json(payload) = payload.map_err(|e| PostError::MalformedBody(e.body_text()))?;

    state
        .repo
        .update(PostId::from(id), &payload.into_draft())
        .await?;

    Ok(Json(MessageResponse {
        message: "Post updated".to_string(),
    }))
}

/// DELETE /api/blog-post/{id}
pub async fn delete_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<i32>,
) -> PostResult<StatusCode>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    state.repo.delete(PostId::from(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
