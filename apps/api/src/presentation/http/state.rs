use crate::{
    config::Config,
    domain::post::repository::PostRepository,
    infrastructure::storage::traits::FileStore,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub posts: Arc<dyn PostRepository>,
    pub files: Arc<dyn FileStore>,
}
