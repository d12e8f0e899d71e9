use crate::domain::post::{
    entity::{NewPost, Post, PostUpdate},
    errors::DomainError,
    repository::PostRepository,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

const POST_COLUMNS: &str = "no, id, title, writer, content, created_at, updated_at";

pub struct SqlxPostRepository {
    pub pool: PgPool,
}

impl SqlxPostRepository {
    /// Creates a new instance of the repository with the provided database pool.
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxPostRepository with connection pool");
        Self { pool }
    }
}

fn infrastructure(context: &str) -> impl Fn(sqlx::Error) -> DomainError + '_ {
    move |e| {
        error!("{}: {}", context, e);
        DomainError::InfrastructureError(format!("{}: {}", context, e))
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(infrastructure("Failed to count posts"))?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    /// Retrieves one page of posts, newest first.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of posts to return
    /// * `offset` - Number of posts to skip
    #[instrument(skip(self))]
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, Post>(&format!(
            "SELECT {} FROM posts ORDER BY no DESC LIMIT $1 OFFSET $2",
            POST_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Failed to fetch posts with limit {} offset {}: {}",
                limit, offset, e
            );
            DomainError::InfrastructureError(format!("Failed to retrieve posts: {}", e))
        })?;

        debug!("Retrieved {} posts", rows.len());
        Ok(rows)
    }

    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        sqlx::query_as::<_, Post>(&format!(
            "SELECT {} FROM posts ORDER BY no DESC",
            POST_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(infrastructure("Failed to retrieve posts"))
    }

    async fn find_by_no(&self, no: i64) -> Result<Option<Post>, DomainError> {
        sqlx::query_as::<_, Post>(&format!("SELECT {} FROM posts WHERE no = $1", POST_COLUMNS))
            .bind(no)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    #[instrument(skip(self, post), fields(post_id = %id))]
    async fn create(&self, id: Uuid, post: &NewPost) -> Result<Post, DomainError> {
        let created = sqlx::query_as::<_, Post>(&format!(
            "INSERT INTO posts (id, title, writer, content) VALUES ($1, $2, $3, $4) RETURNING {}",
            POST_COLUMNS
        ))
        .bind(id)
        .bind(&post.title)
        .bind(&post.writer)
        .bind(&post.content)
        .fetch_one(&self.pool)
        .await
        .map_err(infrastructure("Failed to create post"))?;

        debug!("Inserted post {} as no {}", created.id, created.no);
        Ok(created)
    }

    #[instrument(skip(self, post), fields(post_no = post.no))]
    async fn update(&self, post: &PostUpdate) -> Result<Option<Post>, DomainError> {
        sqlx::query_as::<_, Post>(&format!(
            r#"UPDATE posts
               SET title = $2,
                   writer = $3,
                   content = $4,
                   updated_at = NOW()
               WHERE no = $1
               RETURNING {}"#,
            POST_COLUMNS
        ))
        .bind(post.no)
        .bind(&post.title)
        .bind(&post.writer)
        .bind(&post.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure("Failed to update post"))
    }

    /// Permanently deletes a post.
    #[instrument(skip(self), fields(post_no = no))]
    async fn delete(&self, no: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE no = $1")
            .bind(no)
            .execute(&self.pool)
            .await
            .map_err(infrastructure("Failed to delete post"))?;

        if result.rows_affected() == 0 {
            debug!("No post found with no {} for deletion", no);
            Ok(false)
        } else {
            Ok(true)
        }
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
