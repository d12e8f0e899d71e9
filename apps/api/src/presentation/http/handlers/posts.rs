//! JSON endpoints for the board.
//!
//! Writes report their outcome through the status code: `SUCCESS` on
//! success and `400 FAIL` when the post is missing or the input is invalid
//! or undecodable.

use crate::{
    application::{
        list_posts::{dto::PostPage, use_case::ListPostsUseCase},
        manage_posts::use_case::ManagePostsUseCase,
    },
    domain::{
        post::{
            entity::{NewPost, Post, PostUpdate},
            errors::DomainError,
        },
        shared::pagination::RawPageParams,
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::{debug, instrument};

/// Path the pager links point back to.
pub const LIST_PATH: &str = "/posts/list";

pub const SUCCESS: &str = "SUCCESS";
pub const FAIL: &str = "FAIL";

/// Paged board listing.
///
/// # Query Parameters
/// - `page`: 1-based page number (default 1)
/// - `size`: rows per page (default 10, capped by `PAGE_MAX_SIZE`)
/// - `count`: page links in the pager (default 10, capped by `PAGE_MAX_COUNT`)
///
/// Malformed or repeated values fall back to defaults (or the first
/// occurrence) instead of failing the request.
#[instrument(skip(state))]
pub async fn list_posts_page(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<PostPage>, AppError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            debug!("Ignoring undecodable query string: {}", rejection.body_text());
            Vec::new()
        }
    };
    let raw = RawPageParams::from_pairs(pairs);
    let request = state.config.paging.normalize(&raw);
    debug!(
        page = request.page,
        size = request.size,
        count = request.count,
        "Normalized paging parameters"
    );

    let page = ListPostsUseCase::new(state.posts.clone(), state.config.paging.overflow)
        .execute(request, LIST_PATH)
        .await?;
    Ok(Json(page))
}

/// Every post, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = ManagePostsUseCase::new(state.posts.clone()).list().await?;
    Ok(Json(posts))
}

pub async fn get_post(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Post>, AppError> {
    let Path(no) = path?;
    let post = ManagePostsUseCase::new(state.posts.clone())
        .select(no)
        .await?;
    Ok(Json(post))
}

pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let Json(body) = payload?;
    let post = ManagePostsUseCase::new(state.posts.clone())
        .insert(body)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    State(state): State<AppState>,
    payload: Result<Json<PostUpdate>, JsonRejection>,
) -> Result<(StatusCode, &'static str), AppError> {
    let Json(body) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(rejected(rejection.body_text())),
    };
    let result = ManagePostsUseCase::new(state.posts.clone())
        .update(body)
        .await
        .map(|_| ());
    outcome(result)
}

pub async fn delete_post(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, &'static str), AppError> {
    let Path(no) = match path {
        Ok(path) => path,
        Err(rejection) => return Ok(rejected(rejection.body_text())),
    };
    let result = ManagePostsUseCase::new(state.posts.clone()).delete(no).await;
    outcome(result)
}

/// Maps a write result to `200 SUCCESS` / `400 FAIL`; storage failures stay errors.
fn outcome(result: Result<(), DomainError>) -> Result<(StatusCode, &'static str), AppError> {
    match result {
        Ok(()) => Ok((StatusCode::OK, SUCCESS)),
        Err(DomainError::NotFound(msg)) | Err(DomainError::ValidationError(msg)) => {
            Ok(rejected(msg))
        }
        Err(e) => Err(e.into()),
    }
}

fn rejected(reason: String) -> (StatusCode, &'static str) {
    debug!("Write rejected: {}", reason);
    (StatusCode::BAD_REQUEST, FAIL)
}
