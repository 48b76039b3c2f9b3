use chrono::Utc;
use contracts::catalog::{ProductDto, Status};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub category_id: Option<i32>,
    pub stock: i32,
    pub status: String,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Active products ordered by name: the storefront query.
pub async fn list_active() -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find()
        .filter(Column::Status.eq(Status::Active.as_str()))
        .order_by_asc(Column::Name)
        .all(conn())
        .await?)
}

/// Every product regardless of status, newest first: the admin query.
pub async fn list_all() -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find()
        .order_by_desc(Column::Id)
        .all(conn())
        .await?)
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id).one(conn()).await?)
}

/// A couple of (id, name) pairs for the connectivity test endpoint.
pub async fn sample(limit: u64) -> anyhow::Result<Vec<(i32, String)>> {
    let items = Entity::find().limit(limit).all(conn()).await?;
    Ok(items.into_iter().map(|m| (m.id, m.name)).collect())
}

pub async fn insert(dto: &ProductDto) -> anyhow::Result<i32> {
    let now = Utc::now().to_rfc3339();
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(dto.name.trim().to_string()),
        description: Set(dto.description.clone()),
        price: Set(dto.price.unwrap_or(0.0)),
        image: Set(dto.image.clone()),
        category_id: Set(dto.category_id),
        stock: Set(dto.stock.unwrap_or(0)),
        status: Set(dto.status.unwrap_or_default().as_str().to_string()),
        rating: Set(None),
        review_count: Set(None),
        created_at: Set(Some(now.clone())),
        updated_at: Set(Some(now)),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.id)
}

pub async fn update(id: i32, dto: &ProductDto) -> anyhow::Result<bool> {
    let Some(existing) = Entity::find_by_id(id).one(conn()).await? else {
        return Ok(false);
    };

    let mut active: ActiveModel = existing.into();
    active.name = Set(dto.name.trim().to_string());
    active.description = Set(dto.description.clone());
    if let Some(price) = dto.price {
        active.price = Set(price);
    }
    if dto.image.is_some() {
        active.image = Set(dto.image.clone());
    }
    active.category_id = Set(dto.category_id);
    if let Some(stock) = dto.stock {
        active.stock = Set(stock);
    }
    if let Some(status) = dto.status {
        active.status = Set(status.as_str().to_string());
    }
    active.updated_at = Set(Some(Utc::now().to_rfc3339()));
    active.update(conn()).await?;
    Ok(true)
}

/// Delete is a status flip; rows are never removed.
pub async fn soft_delete(id: i32) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Status, Expr::value(Status::Inactive.as_str()))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now().to_rfc3339()))
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
