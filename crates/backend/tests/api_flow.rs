//! Sequential service-level flow against a throwaway SQLite file: seeding,
//! auth, catalog CRUD, cart round-trip, order creation and dashboard stats.
//!
//! Everything runs in one test function because the database connection and
//! configuration are process-wide singletons.

use backend::domain::{carts, orders, products, stats, users};
use backend::errors::ApiError;
use backend::shared::config::{AuthConfig, Config, DatabaseConfig, ServerConfig, StoreConfig};
use backend::shared::{categories as category_names, config, data::db};
use backend::system::auth::jwt;
use backend::system::{admins, initialization};

use contracts::auth::{AdminLoginRequest, RegisterRequest, UserLoginRequest};
use contracts::cart::CartItem;
use contracts::catalog::{ProductDto, Status};
use contracts::orders::{OrderItemInput, OrderStatus, WhatsappOrderRequest};

const JWT_SECRET: &str = "flow-test-secret";

fn test_config(db_path: &str) -> Config {
    Config {
        database: DatabaseConfig {
            path: db_path.to_string(),
        },
        server: ServerConfig { port: 0 },
        auth: AuthConfig {
            jwt_secret: Some(JWT_SECRET.to_string()),
        },
        store: StoreConfig {
            whatsapp_number: "559391445597".to_string(),
        },
    }
}

#[tokio::test]
async fn full_store_flow() {
    let db_path = std::env::temp_dir().join(format!("store-flow-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&db_path);
    let db_path = db_path.to_string_lossy().to_string();

    config::init(test_config(&db_path)).unwrap();
    db::initialize_database(Some(&db_path)).await.unwrap();
    initialization::seed_initial_data().await.unwrap();
    category_names::reload().await.unwrap();

    // --- seeded catalog ---------------------------------------------------
    let public = products::service::list_public().await.unwrap();
    assert_eq!(public.len(), 6);
    assert!(public.iter().all(|p| p.rating >= 4.0 && p.rating < 5.0));
    assert!(public.iter().all(|p| !p.image.is_empty()));

    // Soft-deleted products disappear from the storefront but stay visible
    // to the admin panel.
    let victim_id = public[0].id;
    products::service::delete(victim_id).await.unwrap();
    let public = products::service::list_public().await.unwrap();
    assert_eq!(public.len(), 5);
    assert!(public.iter().all(|p| p.id != victim_id));
    let admin_view = products::service::list_admin().await.unwrap();
    assert!(admin_view
        .iter()
        .any(|p| p.id == victim_id && p.status == Status::Inactive));

    // --- consumer accounts ------------------------------------------------
    let registered = users::service::register(RegisterRequest {
        name: "A".into(),
        email: "a@x.com".into(),
        password: "secret1".into(),
    })
    .await
    .unwrap();
    assert!(!registered.token.is_empty());
    let user_id = registered.user.id;

    let duplicate = users::service::register(RegisterRequest {
        name: "A".into(),
        email: "a@x.com".into(),
        password: "secret1".into(),
    })
    .await;
    match duplicate {
        Err(ApiError::Validation(msg)) => assert_eq!(msg, "E-mail já cadastrado"),
        other => panic!("expected duplicate-email validation error, got {:?}", other),
    }

    let bad_login = users::service::login(UserLoginRequest {
        email: "a@x.com".into(),
        password: "wrong!".into(),
    })
    .await;
    assert!(matches!(bad_login, Err(ApiError::InvalidCredentials)));

    let login = users::service::login(UserLoginRequest {
        email: "a@x.com".into(),
        password: "secret1".into(),
    })
    .await
    .unwrap();
    let claims = jwt::validate_token(&login.token, JWT_SECRET).unwrap();
    assert_eq!(claims.sub, user_id.to_string());
    assert!(!claims.is_admin);

    // --- admin account ----------------------------------------------------
    let admin = admins::service::login(AdminLoginRequest {
        username: "admin".into(),
        password: "admin123".into(),
    })
    .await
    .unwrap();
    let admin_claims = jwt::validate_token(&admin.token, JWT_SECRET).unwrap();
    assert!(admin_claims.is_admin);

    let bad_admin = admins::service::login(AdminLoginRequest {
        username: "admin".into(),
        password: "wrong".into(),
    })
    .await;
    assert!(matches!(bad_admin, Err(ApiError::InvalidCredentials)));

    // A token can outlive its admin row; the guard checks the row and this
    // is the lookup it relies on.
    assert!(admins::repository::get_by_id(9999).await.unwrap().is_none());

    // --- admin product CRUD -----------------------------------------------
    let created = products::service::create(ProductDto {
        name: "X".into(),
        price: Some(10.5),
        category_id: Some(1),
        stock: Some(5),
        ..Default::default()
    })
    .await
    .unwrap();
    assert_eq!(created.category_name, "Maquiagem");

    let admin_view = products::service::list_admin().await.unwrap();
    assert!(admin_view
        .iter()
        .any(|p| p.id == created.id && p.category_name == "Maquiagem"));

    let missing_fields = products::service::create(ProductDto {
        name: "Y".into(),
        price: None,
        category_id: Some(1),
        ..Default::default()
    })
    .await;
    match missing_fields {
        Err(ApiError::Validation(msg)) => {
            assert_eq!(msg, "Nome, preço e categoria são obrigatórios")
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    // --- cart round-trip --------------------------------------------------
    let first = public[0].id;
    let second = public[1].id;
    carts::service::save_cart(
        user_id,
        &[
            CartItem {
                product_id: first,
                quantity: 2,
            },
            CartItem {
                product_id: second,
                quantity: 1,
            },
        ],
    )
    .await
    .unwrap();

    let lines = carts::service::get_cart(user_id).await.unwrap();
    let mut pairs: Vec<(i32, i32)> = lines.iter().map(|l| (l.product_id, l.quantity)).collect();
    pairs.sort();
    let mut expected = vec![(first, 2), (second, 1)];
    expected.sort();
    assert_eq!(pairs, expected);
    assert!(lines.iter().all(|l| !l.name.is_empty() && l.price > 0.0));

    // Saving again replaces, not appends.
    carts::service::save_cart(
        user_id,
        &[CartItem {
            product_id: second,
            quantity: 3,
        }],
    )
    .await
    .unwrap();
    let lines = carts::service::get_cart(user_id).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product_id, second);
    assert_eq!(lines[0].quantity, 3);

    let rejected = carts::service::save_cart(
        user_id,
        &[CartItem {
            product_id: first,
            quantity: 0,
        }],
    )
    .await;
    assert!(matches!(rejected, Err(ApiError::Validation(_))));

    // --- WhatsApp order ---------------------------------------------------
    let order = orders::service::create_whatsapp_order(WhatsappOrderRequest {
        customer_name: "A".into(),
        customer_email: "a@x.com".into(),
        items: vec![
            OrderItemInput {
                product_id: first,
                product_name: "P1".into(),
                quantity: 2,
                unit_price: 10.0,
            },
            OrderItemInput {
                product_id: second,
                product_name: "P2".into(),
                quantity: 1,
                unit_price: 5.5,
            },
        ],
        message: Some("Olá! Gostaria de finalizar minha compra.".into()),
    })
    .await
    .unwrap();

    let detail = orders::service::get_detail(order.order_id).await.unwrap();
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.order.status, OrderStatus::Pending);
    assert!((detail.order.total_amount - 25.5).abs() < 1e-9);
    let recomputed: f64 = detail
        .items
        .iter()
        .map(|i| i.unit_price * i.quantity as f64)
        .sum();
    assert!((detail.order.total_amount - recomputed).abs() < 1e-9);
    assert!(detail.whatsapp.is_some());
    assert_eq!(
        detail.whatsapp.as_ref().unwrap().whatsapp_number.as_deref(),
        Some("559391445597")
    );

    // --- stats before and after status updates ----------------------------
    let snapshot = stats::service::compute().await.unwrap();
    assert_eq!(snapshot.total_categories, 5);
    // 6 seeded - 1 soft-deleted + 1 created
    assert_eq!(snapshot.total_products, 6);
    assert_eq!(snapshot.total_users, 1);
    assert_eq!(snapshot.total_orders, 1);
    assert_eq!(snapshot.pending_orders, 1);
    assert!(snapshot.total_stock_value > 0.0);

    let updated = orders::service::update_status(order.order_id, "cancelled")
        .await
        .unwrap();
    assert_eq!(updated.order.status, OrderStatus::Cancelled);

    let invalid = orders::service::update_status(order.order_id, "paid").await;
    assert!(matches!(invalid, Err(ApiError::Validation(_))));
    let missing = orders::service::update_status(99999, "pending").await;
    assert!(matches!(missing, Err(ApiError::NotFound)));

    let snapshot = stats::service::compute().await.unwrap();
    assert_eq!(snapshot.total_orders, 0);
    assert_eq!(snapshot.pending_orders, 0);
}
