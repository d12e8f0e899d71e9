use super::{
    handlers::{docs, files, health, post_forms, posts},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        // Posts (JSON)
        .route(
            "/posts",
            get(posts::list_posts)
                .post(posts::create_post)
                .put(posts::update_post),
        )
        .route("/posts/list", get(posts::list_posts_page))
        .route(
            "/posts/{no}",
            get(posts::get_post).delete(posts::delete_post),
        )
        // Posts (FORM)
        .route("/posts/create", post(post_forms::create_post_form))
        .route("/posts/update", post(post_forms::update_post_form))
        .route("/posts/delete/{no}", post(post_forms::delete_post_form))
        // Files
        .route("/file/img", get(files::show_image))
        .route("/file/download", get(files::download_file))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
