use anyhow::Result;
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;
use crate::system::admins;
use crate::system::auth::password;

/// Seed rows inserted only when the respective tables are empty: the five
/// store categories, a handful of sample products and the default admin
/// account.
pub async fn seed_initial_data() -> Result<()> {
    seed_categories().await?;
    seed_products().await?;
    ensure_admin_user_exists().await?;
    Ok(())
}

const SEED_CATEGORIES: &[(&str, &str)] = &[
    ("Maquiagem", "Produtos de maquiagem para todos os estilos"),
    ("Skincare", "Cuidados diários com a pele"),
    ("Cabelos", "Tratamento e beleza dos cabelos"),
    ("Perfumes", "Fragrâncias femininas e masculinas"),
    ("Corpo e Banho", "Hidratação, banho e bem-estar"),
];

// (name, price, category_id, stock, image, rating, review_count)
const SEED_PRODUCTS: &[(&str, f64, i32, i32, &str, f64, i64)] = &[
    (
        "Base Líquida Professional",
        89.90,
        1,
        25,
        "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?w=500",
        4.5,
        120,
    ),
    (
        "Hidratante Facial com Vitamina C",
        129.90,
        2,
        18,
        "https://images.unsplash.com/photo-1556228578-8c89e6adf883?w=500",
        4.8,
        89,
    ),
    (
        "Shampoo Reconstruidor",
        45.90,
        3,
        40,
        "https://images.unsplash.com/photo-1556228720-195a672e8a03?w=500",
        4.3,
        156,
    ),
    (
        "Perfume Flor do Campo",
        159.90,
        4,
        12,
        "https://images.unsplash.com/photo-1541643600914-78b084683601?w=500",
        4.6,
        203,
    ),
    (
        "Óleo Corporal Relaxante",
        67.90,
        5,
        30,
        "https://images.unsplash.com/photo-1608248543803-ba4f8c70ae0b?w=500",
        4.4,
        78,
    ),
    (
        "Paleta de Sombras Profissionais",
        139.90,
        1,
        20,
        "https://images.unsplash.com/photo-1535585209827-a15fcdbc4c2d?w=500",
        4.7,
        145,
    ),
];

async fn seed_categories() -> Result<()> {
    let conn = get_connection();

    let row = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM categories".to_string(),
        ))
        .await?;
    let count: i64 = row.map(|r| r.try_get("", "cnt")).transpose()?.unwrap_or(0);
    if count > 0 {
        return Ok(());
    }

    tracing::info!("Seeding {} categories", SEED_CATEGORIES.len());
    let now = Utc::now().to_rfc3339();
    for (name, description) in SEED_CATEGORIES {
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO categories (name, description, status, created_at, updated_at)
             VALUES (?, ?, 'active', ?, ?)",
            [
                (*name).into(),
                (*description).into(),
                now.clone().into(),
                now.clone().into(),
            ],
        ))
        .await?;
    }
    Ok(())
}

async fn seed_products() -> Result<()> {
    let conn = get_connection();

    let row = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM products".to_string(),
        ))
        .await?;
    let count: i64 = row.map(|r| r.try_get("", "cnt")).transpose()?.unwrap_or(0);
    if count > 0 {
        return Ok(());
    }

    tracing::info!("Seeding {} sample products", SEED_PRODUCTS.len());
    let now = Utc::now().to_rfc3339();
    for (name, price, category_id, stock, image, rating, review_count) in SEED_PRODUCTS {
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO products
                 (name, price, category_id, stock, image, rating, review_count,
                  status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, 'active', ?, ?)",
            [
                (*name).into(),
                (*price).into(),
                (*category_id).into(),
                (*stock).into(),
                (*image).into(),
                (*rating).into(),
                (*review_count).into(),
                now.clone().into(),
                now.clone().into(),
            ],
        ))
        .await?;
    }
    Ok(())
}

/// Create the default admin account when the table is empty.
async fn ensure_admin_user_exists() -> Result<()> {
    if admins::repository::count().await? > 0 {
        return Ok(());
    }

    tracing::info!("No admin users found, creating default admin account");
    let hash = password::hash_password("admin123")?;
    admins::repository::create("admin", "admin@casabelza.com", &hash).await?;
    tracing::info!("Default admin created (username: admin, password: admin123)");
    Ok(())
}
