use axum::Json;
use serde_json::{json, Value};

use crate::domain::products;
use crate::errors::ApiError;

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "Servidor funcionando" }))
}

/// GET /api/test — connectivity probe that touches the database.
pub async fn db_test() -> Result<Json<Value>, ApiError> {
    let sample = products::repository::sample(2).await?;
    let data: Vec<Value> = sample
        .into_iter()
        .map(|(id, name)| json!({ "id": id, "name": name }))
        .collect();
    Ok(Json(json!({ "success": true, "data": data })))
}
