use serde::{Deserialize, Serialize};

/// One cart row as stored server-side: just the product reference and the
/// quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i32,
    pub quantity: i32,
}

/// Full cart replacement sent by the client; the user id comes from the
/// bearer token, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveCartRequest {
    pub items: Vec<CartItem>,
}

/// Cart row joined with current product data for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartLine>,
}
