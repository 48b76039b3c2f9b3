use anyhow::{Context, Result};
use chrono::Utc;
use contracts::orders::{
    order_total, Order, OrderDetail, OrderItem, OrderStatus, WhatsappNote, WhatsappOrderRequest,
};
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement, TransactionTrait};

use crate::shared::data::db::get_connection;

fn order_from_row(row: &QueryResult) -> Result<Order> {
    let status: String = row.try_get("", "status")?;
    Ok(Order {
        id: row.try_get("", "id")?,
        customer_name: row.try_get("", "customer_name")?,
        customer_email: row.try_get("", "customer_email")?,
        total_amount: row.try_get("", "total_amount")?,
        payment_method: row.try_get("", "payment_method")?,
        status: OrderStatus::parse(&status).unwrap_or_default(),
        created_at: row
            .try_get::<Option<String>>("", "created_at")?
            .unwrap_or_default(),
        updated_at: row
            .try_get::<Option<String>>("", "updated_at")?
            .unwrap_or_default(),
    })
}

/// One order, its item snapshots and the WhatsApp annotation, inserted in a
/// single transaction: a failure at any step rolls the whole order back.
/// The stored total is recomputed here, never taken from the request.
pub async fn create_whatsapp_order(
    req: &WhatsappOrderRequest,
    whatsapp_number: &str,
) -> Result<i32> {
    let conn = get_connection();
    let now = Utc::now().to_rfc3339();
    let total = order_total(&req.items);

    let txn = conn.begin().await?;

    let result = txn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO orders
                 (customer_name, customer_email, total_amount, payment_method,
                  status, created_at, updated_at)
             VALUES (?, ?, ?, 'whatsapp', 'pending', ?, ?)",
            [
                req.customer_name.trim().into(),
                req.customer_email.trim().into(),
                total.into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await
        .context("Failed to insert order")?;
    let order_id = result.last_insert_id() as i32;

    for item in &req.items {
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO order_items (order_id, product_id, product_name, quantity, unit_price)
             VALUES (?, ?, ?, ?, ?)",
            [
                order_id.into(),
                item.product_id.into(),
                item.product_name.clone().into(),
                item.quantity.into(),
                item.unit_price.into(),
            ],
        ))
        .await
        .context("Failed to insert order item")?;
    }

    txn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO whatsapp_orders (order_id, customer_message, whatsapp_number)
         VALUES (?, ?, ?)",
        [
            order_id.into(),
            req.message.clone().into(),
            whatsapp_number.into(),
        ],
    ))
    .await
    .context("Failed to insert whatsapp annotation")?;

    txn.commit().await.context("Failed to commit order")?;
    Ok(order_id)
}

pub async fn list_all() -> Result<Vec<Order>> {
    let conn = get_connection();
    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT id, customer_name, customer_email, total_amount, payment_method,
                    status, created_at, updated_at
             FROM orders ORDER BY id DESC"
                .to_string(),
        ))
        .await?;

    rows.iter().map(order_from_row).collect()
}

pub async fn get_detail(id: i32) -> Result<Option<OrderDetail>> {
    let conn = get_connection();

    let Some(order_row) = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, customer_name, customer_email, total_amount, payment_method,
                    status, created_at, updated_at
             FROM orders WHERE id = ?",
            [id.into()],
        ))
        .await?
    else {
        return Ok(None);
    };
    let order = order_from_row(&order_row)?;

    let item_rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, order_id, product_id, product_name, quantity, unit_price
             FROM order_items WHERE order_id = ? ORDER BY id",
            [id.into()],
        ))
        .await?;
    let mut items = Vec::with_capacity(item_rows.len());
    for row in item_rows {
        items.push(OrderItem {
            id: row.try_get("", "id")?,
            order_id: row.try_get("", "order_id")?,
            product_id: row.try_get("", "product_id")?,
            product_name: row.try_get("", "product_name")?,
            quantity: row.try_get("", "quantity")?,
            unit_price: row.try_get("", "unit_price")?,
        });
    }

    let whatsapp = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT customer_message, whatsapp_number FROM whatsapp_orders WHERE order_id = ?",
            [id.into()],
        ))
        .await?
        .map(|row| -> Result<WhatsappNote> {
            Ok(WhatsappNote {
                customer_message: row.try_get("", "customer_message")?,
                whatsapp_number: row.try_get("", "whatsapp_number")?,
            })
        })
        .transpose()?;

    Ok(Some(OrderDetail {
        order,
        items,
        whatsapp,
    }))
}

pub async fn update_status(id: i32, status: OrderStatus) -> Result<bool> {
    let conn = get_connection();
    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE orders SET status = ?, updated_at = ? WHERE id = ?",
            [
                status.as_str().into(),
                Utc::now().to_rfc3339().into(),
                id.into(),
            ],
        ))
        .await?;
    Ok(result.rows_affected() > 0)
}
