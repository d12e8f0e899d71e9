//! Form-posting endpoints for the board.
//!
//! These answer with redirects, like a classic server-rendered form: back
//! to the list on success, back to the form with `?error=true` on a
//! rejected write. Storage failures still surface as error responses.

use super::posts::LIST_PATH;
use crate::{
    application::manage_posts::use_case::ManagePostsUseCase,
    domain::post::{
        entity::{NewPost, PostUpdate},
        errors::DomainError,
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Form,
    extract::{
        Path, State,
        rejection::{FormRejection, PathRejection},
    },
    response::Redirect,
};
use tracing::warn;

/// Where a write lands when the post it targets cannot even be decoded.
pub const UNDECODABLE_FAILURE: &str = "/posts/list?error=true";

pub async fn create_post_form(
    State(state): State<AppState>,
    form: Result<Form<NewPost>, FormRejection>,
) -> Result<Redirect, AppError> {
    let failure = "/posts/create?error=true";
    let Form(body) = match form {
        Ok(form) => form,
        Err(rejection) => return Ok(rejected(&rejection.body_text(), failure)),
    };
    let result = ManagePostsUseCase::new(state.posts.clone())
        .insert(body)
        .await
        .map(|_| ());
    redirect(result, failure)
}

pub async fn update_post_form(
    State(state): State<AppState>,
    form: Result<Form<PostUpdate>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(body) = match form {
        Ok(form) => form,
        Err(rejection) => return Ok(rejected(&rejection.body_text(), UNDECODABLE_FAILURE)),
    };
    let failure = format!("/posts/update/{}?error=true", body.no);
    let result = ManagePostsUseCase::new(state.posts.clone())
        .update(body)
        .await
        .map(|_| ());
    redirect(result, &failure)
}

pub async fn delete_post_form(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, AppError> {
    let Path(no) = match path {
        Ok(path) => path,
        Err(rejection) => return Ok(rejected(&rejection.body_text(), UNDECODABLE_FAILURE)),
    };
    let result = ManagePostsUseCase::new(state.posts.clone()).delete(no).await;
    redirect(result, &format!("/posts/read/{}?error=true", no))
}

fn redirect(result: Result<(), DomainError>, failure: &str) -> Result<Redirect, AppError> {
    match result {
        Ok(()) => Ok(Redirect::to(LIST_PATH)),
        Err(DomainError::NotFound(msg)) | Err(DomainError::ValidationError(msg)) => {
            Ok(rejected(&msg, failure))
        }
        Err(e) => Err(e.into()),
    }
}

fn rejected(reason: &str, failure: &str) -> Redirect {
    warn!("Form write rejected: {}", reason);
    Redirect::to(failure)
}
