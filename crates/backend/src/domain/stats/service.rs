use anyhow::Context;
use contracts::stats::DashboardStats;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::errors::ApiError;
use crate::shared::data::db::get_connection;

/// Dashboard aggregates in a single round-trip of scalar subqueries.
/// No caching; every request recomputes from the tables.
pub async fn compute() -> Result<DashboardStats, ApiError> {
    let conn = get_connection();

    let row = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT
                (SELECT COUNT(*) FROM products WHERE status = 'active') AS total_products,
                (SELECT COUNT(*) FROM categories WHERE status = 'active') AS total_categories,
                (SELECT COALESCE(SUM(price * stock), 0.0) FROM products WHERE status = 'active')
                    AS total_stock_value,
                (SELECT COUNT(*) FROM orders WHERE status != 'cancelled') AS total_orders,
                (SELECT COUNT(*) FROM orders WHERE status = 'pending') AS pending_orders,
                (SELECT COUNT(*) FROM users) AS total_users"
                .to_string(),
        ))
        .await?
        .context("stats query returned no row")?;

    Ok(DashboardStats {
        total_products: row.try_get("", "total_products")?,
        total_categories: row.try_get("", "total_categories")?,
        total_stock_value: row.try_get("", "total_stock_value")?,
        total_orders: row.try_get("", "total_orders")?,
        pending_orders: row.try_get("", "pending_orders")?,
        total_users: row.try_get("", "total_users")?,
    })
}
