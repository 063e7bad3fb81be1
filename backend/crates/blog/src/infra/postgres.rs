//! PostgreSQL Repository Implementation

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostDraft;
use crate::error::PostResult;
use kernel::id::PostId;
use sqlx::PgPool;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `blog_posts` table when it does not exist yet.
    ///
    /// Called once during startup, before serving. A failure here is fatal
    /// to the caller.
    pub async fn ensure_schema(&self) -> PostResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS blog_posts (
                id SERIAL PRIMARY KEY,
                title TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT '',
                body TEXT NOT NULL DEFAULT '',
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("blog_posts table ready");
        Ok(())
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, draft: &PostDraft) -> PostResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO blog_posts (title, description, body)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, body, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.body)
        .fetch_one(&self.pool)
        .await?;

        let post = row.into_post();
        tracing::info!(post_id = %post.id, "Post created");

        Ok(post)
    }

    async fn list(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, description, body, created_at, updated_at
            FROM blog_posts
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn get(&self, id: PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, description, body, created_at, updated_at
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update(&self, id: PostId, draft: &PostDraft) -> PostResult<()> {
        let affected = sqlx::query(
            r#"
            UPDATE blog_posts
            SET title = $1, description = $2, body = $3, updated_at = now()
            WHERE id = $4
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.body)
        .bind(id.into_inner())
        .execute(&self.pool)
        .await?
        .rows_affected();

        // Zero rows affected is a no-op success, not an error
        if affected == 0 {
            tracing::debug!(post_id = %id, "Update matched no post");
        } else {
            tracing::info!(post_id = %id, "Post updated");
        }

        Ok(())
    }

    async fn delete(&self, id: PostId) -> PostResult<()> {
        let affected = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(post_id = %id, rows = affected, "Post deleted");
        Ok(())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PostRow {
    id: i32,
    title: String,
    description: String,
    body: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::from(self.id),
            title: self.title,
            description: self.description,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
