use chrono::Utc;
use contracts::catalog::{Category, CategoryDto, Status};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category {
            id: m.id,
            name: m.name,
            description: m.description,
            image: m.image,
            status: Status::parse(&m.status).unwrap_or_default(),
            created_at: m.created_at.unwrap_or_default(),
            updated_at: m.updated_at.unwrap_or_default(),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Active categories, ordered by name: the public storefront view.
pub async fn list_active() -> anyhow::Result<Vec<Category>> {
    let items = Entity::find()
        .filter(Column::Status.eq(Status::Active.as_str()))
        .order_by_asc(Column::Name)
        .all(conn())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}

/// Every category regardless of status, newest first: the admin view.
pub async fn list_all() -> anyhow::Result<Vec<Category>> {
    let items = Entity::find()
        .order_by_desc(Column::Id)
        .all(conn())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<Category>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(dto: &CategoryDto) -> anyhow::Result<i32> {
    let now = Utc::now().to_rfc3339();
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(dto.name.trim().to_string()),
        description: Set(dto.description.clone()),
        image: Set(dto.image.clone()),
        status: Set(dto.status.unwrap_or_default().as_str().to_string()),
        created_at: Set(Some(now.clone())),
        updated_at: Set(Some(now)),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.id)
}

pub async fn update(id: i32, dto: &CategoryDto) -> anyhow::Result<bool> {
    let Some(existing) = Entity::find_by_id(id).one(conn()).await? else {
        return Ok(false);
    };

    let mut active: ActiveModel = existing.into();
    active.name = Set(dto.name.trim().to_string());
    active.description = Set(dto.description.clone());
    active.image = Set(dto.image.clone());
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
