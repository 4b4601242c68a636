//! Background Map Upload Handler
//!
//! Sectorized venues are drawn over an uploaded map image. Uploads are
//! capped in size, sniffed for a supported image format, and stored under
//! the working directory; the returned URL is what the venue form puts in
//! `Stadium.image`.

use axum::Json;
use axum::extract::{Multipart, State};
use image::ImageFormat;
use serde::Serialize;
use uuid::Uuid;

use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_id: String,
    pub filename: String,
    pub original_name: String,
    pub size: usize,
    pub format: String,
    pub url: String,
}

/// Extension used on disk for a sniffed format
fn extension(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("png"),
        ImageFormat::Jpeg => Some("jpg"),
        ImageFormat::WebP => Some("webp"),
        _ => None,
    }
}

/// POST /api/upload - store a background map image
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_request(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original_name = field.file_name().unwrap_or("map").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::invalid_request(format!("Failed to read upload: {}", e)))?;
        file = Some((original_name, data.to_vec()));
        break;
    }

    let (original_name, data) =
        file.ok_or_else(|| AppError::new(ErrorCode::ImageRequired))?;

    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::new(ErrorCode::ImageTooLarge)
            .with_detail("size", data.len())
            .with_detail("limit", state.config.max_upload_bytes));
    }

    // Sniff the actual content; the client-supplied name is not trusted
    let format = image::guess_format(&data)
        .map_err(|_| AppError::new(ErrorCode::UnsupportedImageFormat))?;
    let ext = extension(format).ok_or_else(|| {
        AppError::new(ErrorCode::UnsupportedImageFormat)
            .with_detail("format", format!("{:?}", format))
    })?;

    let file_id = Uuid::new_v4().to_string();
    let filename = format!("{}.{}", file_id, ext);
    let maps_dir = state.config.maps_dir();
    std::fs::create_dir_all(&maps_dir)
        .map_err(|e| AppError::storage(format!("Failed to create maps dir: {}", e)))?;
    std::fs::write(maps_dir.join(&filename), &data)
        .map_err(|e| AppError::storage(format!("Failed to store map: {}", e)))?;

    tracing::info!(%filename, size = data.len(), "background map stored");

    Ok(Json(UploadResponse {
        url: format!("/maps/{}", filename),
        size: data.len(),
        format: ext.to_string(),
        file_id,
        filename,
        original_name,
    }))
}
