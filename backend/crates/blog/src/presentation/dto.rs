//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::PostId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Post;
use crate::domain::value_objects::PostDraft;

/// Request body for POST /api/blog-post and PATCH /api/blog-post/{id}
///
/// Missing fields deserialize to empty strings and are stored verbatim;
/// no field validation is performed.
#[derive(Debug, Clone, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
}

impl PostPayload {
    pub fn into_draft(self) -> PostDraft {
        PostDraft::new(self.title, self.description, self.body)
    }
}

/// Response body for a single post
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            body: post.body,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Confirmation payload for PATCH /api/blog-post/{id}
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
