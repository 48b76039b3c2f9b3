use anyhow::{Context, Result};
use contracts::cart::{CartItem, CartLine};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement, TransactionTrait};

use crate::shared::data::db::get_connection;

/// Replace a user's cart rows. Delete and re-insert run in one transaction,
/// so a failed save never leaves the cart half-written or empty.
pub async fn replace(user_id: i32, items: &[CartItem]) -> Result<()> {
    let conn = get_connection();
    let txn = conn.begin().await?;

    txn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "DELETE FROM user_carts WHERE user_id = ?",
        [user_id.into()],
    ))
    .await?;

    for item in items {
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO user_carts (user_id, product_id, quantity) VALUES (?, ?, ?)",
            [user_id.into(), item.product_id.into(), item.quantity.into()],
        ))
        .await?;
    }

    txn.commit().await.context("Failed to commit cart replace")?;
    Ok(())
}

/// Cart rows joined with current product data for display.
pub async fn get(user_id: i32) -> Result<Vec<CartLine>> {
    let conn = get_connection();

    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT c.product_id, c.quantity, p.name, p.price, p.image
             FROM user_carts c
             JOIN products p ON p.id = c.product_id
             WHERE c.user_id = ?
             ORDER BY p.name",
            [user_id.into()],
        ))
        .await?;

    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        lines.push(CartLine {
            product_id: row.try_get("", "product_id")?,
            name: row.try_get("", "name")?,
            price: row.try_get("", "price")?,
            image: row.try_get("", "image")?,
            quantity: row.try_get("", "quantity")?,
        });
    }
    Ok(lines)
}
