use axum::Json;
use contracts::stats::DashboardStats;

use crate::domain::stats;
use crate::errors::ApiError;

/// GET /api/admin/stats
pub async fn dashboard() -> Result<Json<DashboardStats>, ApiError> {
    Ok(Json(stats::service::compute().await?))
}
