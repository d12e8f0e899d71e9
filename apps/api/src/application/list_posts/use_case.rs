use super::dto::PostPage;
use crate::domain::{
    post::{errors::DomainError, repository::PostRepository},
    shared::pagination::{OverflowPolicy, PageRequest},
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Paged post listing: count first, then a bounded fetch.
///
/// The count query and the fetch are two independent reads. A concurrent
/// write between them can make `total_count` disagree with the rows
/// returned, which is accepted.
pub struct ListPostsUseCase {
    repository: Arc<dyn PostRepository>,
    overflow: OverflowPolicy,
}

impl ListPostsUseCase {
    pub fn new(repository: Arc<dyn PostRepository>, overflow: OverflowPolicy) -> Self {
        Self {
            repository,
            overflow,
        }
    }

    /// Builds the page described by `request`; links are rooted at `base_path`.
    #[instrument(skip(self), fields(overflow = %self.overflow))]
    pub async fn execute(
        &self,
        request: PageRequest,
        base_path: &str,
    ) -> Result<PostPage, DomainError> {
        let total = self.repository.count().await?;
        let pagination = request.with_total(total, self.overflow);

        if pagination.page != request.page {
            debug!(
                "Requested page {} clamped to last page {}",
                request.page, pagination.page
            );
        }

        let list = if pagination.is_beyond_last_page() {
            debug!(
                "Page {} is past the last page {}, skipping fetch",
                pagination.page, pagination.total_page
            );
            Vec::new()
        } else {
            let limit = i64::try_from(pagination.limit()).unwrap_or(i64::MAX);
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            self.repository.find_page(limit, offset).await?
        };

        debug!(
            "Listed {} of {} posts on page {}",
            list.len(),
            total,
            pagination.page
        );

        Ok(PostPage {
            page_uri: pagination.page_uri(base_path),
            links: pagination.links(base_path),
            pagination,
            list,
        })
    }
}
