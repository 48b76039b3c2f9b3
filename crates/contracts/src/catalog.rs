use serde::{Deserialize, Serialize};

/// Lifecycle status shared by categories and products.
///
/// Rows are never hard-deleted through the API; "delete" flips the status to
/// `Inactive` and public queries filter on `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Status> {
        match s {
            "active" => Some(Status::Active),
            "inactive" => Some(Status::Inactive),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update payload for a category. Fields are optional so the service
/// layer can answer missing-field validation with a 400 instead of a
/// deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<Status>,
}

/// Product as the public storefront sees it: always active, category resolved
/// to a display name, rating/review count filled in even when the row has
/// none.
///
/// `reviewCount` is camelCase on the wire while `category_id` is snake_case;
/// the storefront consumes both spellings and existing clients depend on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontProduct {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<i32>,
    pub category: String,
    pub image: String,
    pub rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: i64,
    pub stock: i32,
}

/// Product as the admin panel sees it: no status filter, raw image value,
/// category name resolved for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProduct {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub category_id: Option<i32>,
    pub category_name: String,
    pub stock: i32,
    pub status: Status,
    pub created_at: String,
}

/// Create/update payload for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub name: String,
    pub price: Option<f64>,
    pub category_id: Option<i32>,
    pub stock: Option<i32>,
    pub status: Option<Status>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_lowercase() {
        assert_eq!(Status::parse("active"), Some(Status::Active));
        assert_eq!(Status::parse("inactive"), Some(Status::Inactive));
        assert_eq!(Status::parse("deleted"), None);
        assert_eq!(
            serde_json::to_string(&Status::Inactive).unwrap(),
            "\"inactive\""
        );
    }

    #[test]
    fn storefront_product_uses_original_field_spellings() {
        let p = StorefrontProduct {
            id: 1,
            name: "Base Líquida".into(),
            description: None,
            price: 89.9,
            category_id: Some(1),
            category: "Maquiagem".into(),
            image: "x.jpg".into(),
            rating: 4.5,
            review_count: 120,
            stock: 10,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("reviewCount").is_some());
        assert!(json.get("category_id").is_some());
    }
}
