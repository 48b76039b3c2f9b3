use anyhow::{Context, Result};
use chrono::Utc;
use contracts::auth::AdminInfo;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

/// Admin row with credentials, kept internal to the auth path.
#[derive(Debug, Clone)]
pub struct AdminRecord {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl From<AdminRecord> for AdminInfo {
    fn from(rec: AdminRecord) -> Self {
        AdminInfo {
            id: rec.id,
            username: rec.username,
            email: rec.email,
        }
    }
}

pub async fn get_by_username(username: &str) -> Result<Option<AdminRecord>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, email, password_hash FROM admin_users WHERE username = ?",
            [username.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(AdminRecord {
            id: row.try_get("", "id")?,
            username: row.try_get("", "username")?,
            email: row.try_get("", "email")?,
            password_hash: row.try_get("", "password_hash")?,
        })),
        None => Ok(None),
    }
}

pub async fn get_by_id(id: i32) -> Result<Option<AdminInfo>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, email FROM admin_users WHERE id = ?",
            [id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(AdminInfo {
            id: row.try_get("", "id")?,
            username: row.try_get("", "username")?,
            email: row.try_get("", "email")?,
        })),
        None => Ok(None),
    }
}

pub async fn count() -> Result<i64> {
    let conn = get_connection();
    let row = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM admin_users".to_string(),
        ))
        .await?
        .context("count query returned no row")?;
    Ok(row.try_get("", "cnt")?)
}

pub async fn create(username: &str, email: &str, password_hash: &str) -> Result<i32> {
    let conn = get_connection();
    let now = Utc::now().to_rfc3339();

    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO admin_users (username, email, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                username.into(),
                email.into(),
                password_hash.into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await
        .context("Failed to insert admin user")?;

    Ok(result.last_insert_id() as i32)
}
