use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// A board post.
///
/// `no` is the database sequence number used in URLs; `id` is the public
/// identifier. Neither is generated here: `no` comes from the database and
/// `id` is assigned by the service that creates the post, so deserializing
/// a `Post` never mints a new identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Post {
    /// Sequence number, newest posts have the highest value
    pub no: i64,

    /// Public identifier assigned once at creation
    pub id: Uuid,

    pub title: String,

    pub writer: String,

    pub content: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Fields a client supplies when writing a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct NewPost {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 50, message = "writer must be 1-50 characters"))]
    pub writer: String,

    #[serde(default)]
    #[validate(length(max = 10000, message = "content must be at most 10000 characters"))]
    pub content: String,
}

/// Editable fields of an existing post, addressed by `no`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct PostUpdate {
    pub no: i64,

    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 50, message = "writer must be 1-50 characters"))]
    pub writer: String,

    #[serde(default)]
    #[validate(length(max = 10000, message = "content must be at most 10000 characters"))]
    pub content: String,
}
