use contracts::cart::{CartItem, CartResponse, SaveCartRequest};
use contracts::catalog::{Category, StorefrontProduct};
use contracts::orders::{WhatsappOrderRequest, WhatsappOrderResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, extract_error};

pub async fn fetch_products() -> Result<Vec<StorefrontProduct>, String> {
    let response = Request::get(&api_url("/api/products"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }

    response
        .json::<Vec<StorefrontProduct>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&api_url("/api/categories"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Replace the server-side cart mirror of the logged-in shopper.
pub async fn save_server_cart(token: &str, items: &[CartItem]) -> Result<(), String> {
    let request = SaveCartRequest {
        items: items.to_vec(),
    };
    let response = Request::post(&api_url("/api/users/cart"))
        .header("Authorization", &format!("Bearer {}", token))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }
    Ok(())
}

/// Fetch the server-side cart mirror (joined with current product data).
pub async fn fetch_server_cart(token: &str, user_id: i32) -> Result<CartResponse, String> {
    let response = Request::get(&api_url(&format!("/api/users/{}/cart", user_id)))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }

    response
        .json::<CartResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Best-effort bookkeeping order behind the WhatsApp checkout.
pub async fn post_whatsapp_order(
    request: &WhatsappOrderRequest,
) -> Result<WhatsappOrderResponse, String> {
    let response = Request::post(&api_url("/api/orders/whatsapp"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }

    response
        .json::<WhatsappOrderResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
