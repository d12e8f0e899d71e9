use crate::domain::post::{
    entity::{NewPost, Post, PostUpdate},
    errors::DomainError,
    repository::PostRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Read, create, update and delete posts.
pub struct ManagePostsUseCase {
    repository: Arc<dyn PostRepository>,
    next_id: fn() -> Uuid,
}

impl ManagePostsUseCase {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self {
            repository,
            next_id: Uuid::now_v7,
        }
    }

    /// Replaces the identifier source, mainly for deterministic tests.
    pub fn with_id_generator(mut self, next_id: fn() -> Uuid) -> Self {
        self.next_id = next_id;
        self
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        self.repository.find_all().await
    }

    pub async fn select(&self, no: i64) -> Result<Post, DomainError> {
        self.repository
            .find_by_no(no)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post {}", no)))
    }

    /// Validates the input, assigns a fresh identifier and stores the post.
    #[instrument(skip(self, post), fields(writer = %post.writer))]
    pub async fn insert(&self, post: NewPost) -> Result<Post, DomainError> {
        post.validate()?;
        let id = self.assign_identifier();
        let created = self.repository.create(id, &post).await?;
        info!(post_no = created.no, post_id = %created.id, "Post created");
        Ok(created)
    }

    #[instrument(skip(self, post), fields(post_no = post.no))]
    pub async fn update(&self, post: PostUpdate) -> Result<Post, DomainError> {
        post.validate()?;
        let updated = self
            .repository
            .update(&post)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post {}", post.no)))?;
        info!("Post updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, no: i64) -> Result<(), DomainError> {
        if !self.repository.delete(no).await? {
            return Err(DomainError::NotFound(format!("post {}", no)));
        }
        info!("Post deleted");
        Ok(())
    }

    fn assign_identifier(&self) -> Uuid {
        (self.next_id)()
    }
}
