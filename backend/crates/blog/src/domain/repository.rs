//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infra layer.

use crate::domain::entities::Post;
use crate::domain::value_objects::PostDraft;
use crate::error::PostResult;
use kernel::id::PostId;

/// Post repository trait
///
/// Owns all persistent-state operations for posts. Consistency of each
/// operation is delegated to the database; every method issues exactly one
/// statement.
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a new post and return the fully populated row,
    /// including the server-assigned id and both timestamps.
    async fn create(&self, draft: &PostDraft) -> PostResult<Post>;

    /// Fetch all posts in storage-defined order. An empty collection is a
    /// valid, non-error result.
    async fn list(&self) -> PostResult<Vec<Post>>;

    /// Fetch a single post by id. `None` when no row matches.
    async fn get(&self, id: PostId) -> PostResult<Option<Post>>;

    /// Overwrite title/description/body and refresh `updated_at` for the
    /// given id. Existence is not verified; updating a missing id is a
    /// no-op success.
    async fn update(&self, id: PostId, draft: &PostDraft) -> PostResult<()>;

    /// Remove the post with the given id. Idempotent; deleting a missing
    /// id is not an error.
    async fn delete(&self, id: PostId) -> PostResult<()>;
}
