use anyhow::{Context, Result};
use chrono::Utc;
use contracts::auth::UserInfo;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

/// Consumer row with credentials, internal to the auth path.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl From<UserRecord> for UserInfo {
    fn from(rec: UserRecord) -> Self {
        UserInfo {
            id: rec.id,
            name: rec.name,
            email: rec.email,
        }
    }
}

pub async fn get_by_email(email: &str) -> Result<Option<UserRecord>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, name, email, password_hash FROM users WHERE email = ?",
            [email.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(UserRecord {
            id: row.try_get("", "id")?,
            name: row.try_get("", "name")?,
            email: row.try_get("", "email")?,
            password_hash: row.try_get("", "password_hash")?,
        })),
        None => Ok(None),
    }
}

pub async fn create(
    name: &str,
    email: &str,
    password_hash: &str,
    phone: Option<&str>,
    address: Option<&str>,
) -> Result<i32> {
    let conn = get_connection();
    let now = Utc::now().to_rfc3339();

    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO users (name, email, password_hash, phone, address, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            [
                name.into(),
                email.into(),
                password_hash.into(),
                phone.map(str::to_string).into(),
                address.map(str::to_string).into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await
        .context("Failed to insert user")?;

    Ok(result.last_insert_id() as i32)
}
