use serde::{Deserialize, Serialize};

/// Order lifecycle. Transitions are driven by the admin panel alone; the API
/// only checks that the target value is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "shipped" => Some(OrderStatus::Shipped),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }
}

/// One line of an incoming WhatsApp order: product fields are snapshotted by
/// the client at checkout time so the order survives later catalog edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsappOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItemInput>,
    /// The free-text message that was sent to WhatsApp, kept as annotation.
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsappOrderResponse {
    pub order_id: i32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: f64,
    pub payment_method: String,
    pub status: OrderStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsappNote {
    pub customer_message: Option<String>,
    pub whatsapp_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub whatsapp: Option<WhatsappNote>,
}

/// Status update body; kept as a raw string so unknown values produce a 400
/// with a message instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Order total as the backend recomputes it: the client-sent total is never
/// trusted.
pub fn order_total(items: &[OrderItemInput]) -> f64 {
    items
        .iter()
        .map(|i| i.unit_price * i.quantity as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values_only() {
        for s in OrderStatus::all() {
            assert_eq!(OrderStatus::parse(s.as_str()), Some(*s));
        }
        assert_eq!(OrderStatus::parse("paid"), None);
    }

    #[test]
    fn total_is_sum_of_line_subtotals() {
        let items = vec![
            OrderItemInput {
                product_id: 1,
                product_name: "Coxinha de Frango".into(),
                quantity: 3,
                unit_price: 5.5,
            },
            OrderItemInput {
                product_id: 2,
                product_name: "Brigadeiro".into(),
                quantity: 2,
                unit_price: 2.0,
            },
        ];
        assert!((order_total(&items) - 20.5).abs() < 1e-9);
        assert_eq!(order_total(&[]), 0.0);
    }
}
