pub mod docs;
pub mod files;
pub mod health;
pub mod post_forms;
pub mod posts;
