//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::PostId;

/// Post entity - one blog article as persisted in storage
///
/// `id` and `created_at` are assigned by the database at insertion and are
/// immutable afterwards. `updated_at` is refreshed on every successful
/// update; right after creation both timestamps are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
