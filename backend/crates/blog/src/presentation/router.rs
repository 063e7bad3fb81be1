//! Blog Router

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, BlogAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the blog router with the PostgreSQL repository
pub fn blog_router(repo: PgPostRepository) -> Router {
    blog_router_generic(repo)
}

/// Create a blog router for any repository implementation
pub fn blog_router_generic<R>(repo: R) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/api/blog-post",
            post(handlers::create_post::<R>).get(handlers::list_posts::<R>),
        )
        .route(
            "/api/blog-post/{id}",
            get(handlers::get_post::<R>)
                .patch(handlers::update_post::<R>)
                .delete(handlers::delete_post::<R>),
        )
        .with_state(state)
}
