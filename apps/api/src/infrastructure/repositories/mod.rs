pub mod sqlx_post_repository;
