use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::orders::{
    Order, OrderDetail, UpdateStatusRequest, WhatsappOrderRequest, WhatsappOrderResponse,
};

use crate::domain::orders;
use crate::errors::ApiError;

/// POST /api/orders/whatsapp
pub async fn create_whatsapp(
    Json(req): Json<WhatsappOrderRequest>,
) -> Result<(StatusCode, Json<WhatsappOrderResponse>), ApiError> {
    let response = orders::service::create_whatsapp_order(req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/admin/orders
pub async fn list_admin() -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(orders::service::list_all().await?))
}

/// GET /api/admin/orders/:id
pub async fn get_detail(Path(id): Path<i32>) -> Result<Json<OrderDetail>, ApiError> {
    Ok(Json(orders::service::get_detail(id).await?))
}

/// PUT /api/admin/orders/:id/status
pub async fn update_status(
    Path(id): Path<i32>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<OrderDetail>, ApiError> {
    Ok(Json(orders::service::update_status(id, &req.status).await?))
}
