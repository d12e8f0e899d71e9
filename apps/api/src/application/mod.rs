pub mod list_posts;
pub mod manage_posts;
