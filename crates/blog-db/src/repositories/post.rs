//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{NewPost, Post};
use blog_core::traits::{PostRepository, PostScope, RepoResult};
use blog_core::value_objects::{PageRequest, PostId};

use crate::mappers::{PostInsert, PostUpdate};
use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, content, date_posted, author_id, has_code, code
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn count(&self, scope: PostScope) -> RepoResult<u64> {
        let count = match scope {
            PostScope::All => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
                    .fetch_one(&self.pool)
                    .await
            }
            PostScope::Author(author_id) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE author_id = $1")
                    .bind(author_id.into_inner())
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(map_db_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn list(&self, scope: PostScope, page: PageRequest) -> RepoResult<Vec<Post>> {
        let results = match scope {
            PostScope::All => {
                sqlx::query_as::<_, PostModel>(
                    r"
                    SELECT id, title, content, date_posted, author_id, has_code, code
                    FROM posts
                    ORDER BY date_posted DESC, id DESC
                    LIMIT $1 OFFSET $2
                    ",
                )
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await
            }
            PostScope::Author(author_id) => {
                sqlx::query_as::<_, PostModel>(
                    r"
                    SELECT id, title, content, date_posted, author_id, has_code, code
                    FROM posts
                    WHERE author_id = $1
                    ORDER BY date_posted DESC, id DESC
                    LIMIT $2 OFFSET $3
                    ",
                )
                .bind(author_id.into_inner())
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, post), fields(author_id = %post.author_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let values = PostInsert::new(post);

        let model = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (title, content, date_posted, author_id, has_code, code)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, content, date_posted, author_id, has_code, code
            ",
        )
        .bind(values.title)
        .bind(values.content)
        .bind(values.date_posted)
        .bind(values.author_id)
        .bind(values.has_code)
        .bind(values.code)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let values = PostUpdate::new(post);

        let result = sqlx::query(
            r"
            UPDATE posts
            SET title = $2, content = $3, author_id = $4, has_code = $5, code = $6
            WHERE id = $1
            ",
        )
        .bind(values.id)
        .bind(values.title)
        .bind(values.content)
        .bind(values.author_id)
        .bind(values.has_code)
        .bind(values.code)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }
}
