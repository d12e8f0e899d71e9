use crate::domain::{
    post::entity::Post,
    shared::pagination::{PageLinks, Pagination},
};
use serde::Serialize;
use ts_rs::TS;

/// One page of the board, ready for a pager view.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct PostPage {
    pub pagination: Pagination,
    pub list: Vec<Post>,
    /// Link template without `page`, e.g. `/posts/list?size=10&count=10`
    pub page_uri: String,
    pub links: PageLinks,
}
