use contracts::orders::{
    Order, OrderDetail, OrderStatus, WhatsappOrderRequest, WhatsappOrderResponse,
};

use crate::errors::ApiError;
use crate::shared::config;

use super::repository;

/// Record the bookkeeping order behind a WhatsApp checkout. The actual
/// transaction happens in chat; this row is what the admin panel works from.
pub async fn create_whatsapp_order(
    req: WhatsappOrderRequest,
) -> Result<WhatsappOrderResponse, ApiError> {
    if req.customer_name.trim().is_empty() || req.items.is_empty() {
        return Err(ApiError::Validation(
            "Nome e itens do pedido são obrigatórios".to_string(),
        ));
    }
    if req
        .items
        .iter()
        .any(|i| i.quantity <= 0 || i.unit_price < 0.0)
    {
        return Err(ApiError::Validation("Itens do pedido inválidos".to_string()));
    }

    let whatsapp_number = config::get().store.whatsapp_number.clone();
    let order_id = repository::create_whatsapp_order(&req, &whatsapp_number).await?;

    Ok(WhatsappOrderResponse {
        order_id,
        message: "Pedido registrado com sucesso".to_string(),
    })
}

pub async fn list_all() -> Result<Vec<Order>, ApiError> {
    Ok(repository::list_all().await?)
}

pub async fn get_detail(id: i32) -> Result<OrderDetail, ApiError> {
    repository::get_detail(id).await?.ok_or(ApiError::NotFound)
}

/// Admin-driven status change; the target must be one of the known statuses.
pub async fn update_status(id: i32, status: &str) -> Result<OrderDetail, ApiError> {
    let status = OrderStatus::parse(status)
        .ok_or_else(|| ApiError::Validation("Status inválido".to_string()))?;

    if !repository::update_status(id, status).await? {
        return Err(ApiError::NotFound);
    }
    get_detail(id).await
}
