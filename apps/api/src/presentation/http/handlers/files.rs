//! File endpoints backed by the upload directory.
//!
//! `filePath` is always relative to `UPLOAD_DIR`; anything that would leave
//! that directory is rejected before touching the disk.

use crate::{
    infrastructure::storage::media::{
        MAX_THUMBNAIL_WIDTH, OCTET_STREAM, attachment_disposition, image_media_type,
        thumbnail_png,
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
pub struct FileQuery {
    #[serde(rename = "filePath")]
    pub file_path: String,

    /// Thumbnail width in pixels (images only)
    pub width: Option<u32>,
}

/// Serves an image inline, or a PNG thumbnail of it when `width` is given.
#[instrument(skip(state))]
pub async fn show_image(
    State(state): State<AppState>,
    query: Result<Query<FileQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    if let Some(width) = query.width
        && !(1..=MAX_THUMBNAIL_WIDTH).contains(&width)
    {
        return Err(AppError::BadRequest(format!(
            "width must be between 1 and {}",
            MAX_THUMBNAIL_WIDTH
        )));
    }

    let file = state.files.read(&query.file_path).await?;
    let media_type = file
        .extension
        .as_deref()
        .and_then(image_media_type)
        .ok_or_else(|| AppError::BadRequest(format!("Not an image: {}", file.file_name)))?;

    match query.width {
        Some(width) => {
            debug!(file = %file.file_name, width, "Rendering thumbnail");
            let png = thumbnail_png(&file.data, width)?;
            Ok((
                [(header::CONTENT_TYPE, HeaderValue::from_static("image/png"))],
                png,
            )
                .into_response())
        }
        None => Ok((
            [(header::CONTENT_TYPE, HeaderValue::from_static(media_type))],
            file.data,
        )
            .into_response()),
    }
}

/// Sends any file under the upload directory as an attachment.
#[instrument(skip(state))]
pub async fn download_file(
    State(state): State<AppState>,
    query: Result<Query<FileQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let file = state.files.read(&query.file_path).await?;
    let disposition = HeaderValue::from_str(&attachment_disposition(&file.file_name))
        .map_err(|e| AppError::Internal(format!("Invalid Content-Disposition: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(OCTET_STREAM)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.data,
    )
        .into_response())
}
