//! Category name lookup service.
//!
//! One process-wide id -> name map populated from the categories table and
//! reloaded on every category create/update/delete. Both the public and the
//! admin formatting paths resolve category names here, so there is a single
//! source for the mapping.

use once_cell::sync::Lazy;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::shared::data::db::get_connection;

pub const UNKNOWN_CATEGORY: &str = "Sem categoria";

static CATEGORY_NAMES: Lazy<RwLock<HashMap<i32, String>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Replace the cached map with the current table contents. Called at startup
/// and after every category mutation.
pub async fn reload() -> anyhow::Result<()> {
    let conn = get_connection();
    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT id, name FROM categories".to_string(),
        ))
        .await?;

    let mut map = HashMap::with_capacity(rows.len());
    for row in rows {
        let id: i32 = row.try_get("", "id")?;
        let name: String = row.try_get("", "name")?;
        map.insert(id, name);
    }

    let mut guard = CATEGORY_NAMES
        .write()
        .map_err(|_| anyhow::anyhow!("category cache poisoned"))?;
    *guard = map;
    Ok(())
}

/// Resolve a category id to its display name.
pub fn name_of(category_id: Option<i32>) -> String {
    let Some(id) = category_id else {
        return UNKNOWN_CATEGORY.to_string();
    };
    CATEGORY_NAMES
        .read()
        .ok()
        .and_then(|map| map.get(&id).cloned())
        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_fall_back_to_placeholder() {
        assert_eq!(name_of(None), UNKNOWN_CATEGORY);
        assert_eq!(name_of(Some(-42)), UNKNOWN_CATEGORY);
    }

    #[test]
    fn known_ids_resolve() {
        CATEGORY_NAMES
            .write()
            .unwrap()
            .insert(7, "Maquiagem".to_string());
        assert_eq!(name_of(Some(7)), "Maquiagem");
    }
}
