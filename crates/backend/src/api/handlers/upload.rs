use anyhow::Context;
use axum::extract::Multipart;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::ApiError;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const UPLOAD_DIR: &str = "public/images/products";

/// POST /api/upload — multipart `image` field, stored on disk and answered
/// with the public URL. Only image MIME types, 5 MB cap.
pub async fn upload_image(mut multipart: Multipart) -> Result<Json<Value>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::Validation("Falha ao ler o upload".to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string).unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(ApiError::Validation(
                "Apenas imagens são permitidas!".to_string(),
            ));
        }

        let data = field
            .bytes()
            .await
            .map_err(|_| ApiError::Validation("Falha ao ler o upload".to_string()))?;
        if data.len() > MAX_IMAGE_BYTES {
            return Err(ApiError::Validation(
                "Imagem excede o limite de 5MB".to_string(),
            ));
        }

        let ext = match content_type.strip_prefix("image/") {
            Some("jpeg") => "jpg",
            Some(other) if !other.is_empty() => other,
            _ => "bin",
        };
        let filename = format!("product-{}.{}", Uuid::new_v4(), ext);

        std::fs::create_dir_all(UPLOAD_DIR).context("Failed to create upload directory")?;
        std::fs::write(std::path::Path::new(UPLOAD_DIR).join(&filename), &data)
            .context("Failed to write uploaded image")?;

        let image_url = format!("/images/products/{}", filename);
        return Ok(Json(json!({
            "success": true,
            "imageUrl": image_url,
            "message": "Imagem uploadada com sucesso"
        })));
    }

    Err(ApiError::Validation("Nenhuma imagem enviada".to_string()))
}
