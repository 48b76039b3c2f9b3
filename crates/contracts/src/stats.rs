use serde::{Deserialize, Serialize};

/// Aggregates shown on the admin dashboard. Recomputed on every request,
/// no caching.
///
/// Serialized camelCase; the admin panel reads `totalProducts` etc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: i64,
    pub total_categories: i64,
    /// Σ price × stock over active products.
    pub total_stock_value: f64,
    /// Orders in any non-cancelled status.
    pub total_orders: i64,
    pub pending_orders: i64,
    pub total_users: i64,
}
