use super::entity::{NewPost, Post, PostUpdate};
use super::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Post storage. List queries return newest posts first (descending `no`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Total number of posts, used to size the pager.
    async fn count(&self) -> Result<u64, DomainError>;
    /// At most `limit` posts after skipping `offset`.
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Post>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Post>, DomainError>;
    async fn find_by_no(&self, no: i64) -> Result<Option<Post>, DomainError>;
    async fn create(&self, id: Uuid, post: &NewPost) -> Result<Post, DomainError>;
    /// `None` when no post has the given `no`.
    async fn update(&self, post: &PostUpdate) -> Result<Option<Post>, DomainError>;
    /// `false` when no post has the given `no`.
    async fn delete(&self, no: i64) -> Result<bool, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}
