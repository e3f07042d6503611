//! Shared setup for the integration suites: an in-memory SQLite database
//! with the real migrations applied, plus seed helpers.
#![allow(dead_code)]

use chrono::Utc;
use matpass_backend::entities::{
    LineItemStatus, PassType, StudentPassStatus, UserRole, academy_entity, order_line_item_entity,
    pass_entity, student_pass_entity, user_entity,
};
use matpass_backend::models::CartItem;
use matpass_backend::services::{OrderService, PaymentService};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, Set,
};

pub async fn setup_db() -> DatabaseConnection {
    // Every sqlite::memory: connection is its own database; a single pooled
    // connection keeps all queries on the same one.
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to SQLite");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn create_user(db: &DatabaseConnection, username: &str) -> user_entity::Model {
    let now = Utc::now();
    user_entity::ActiveModel {
        firstname: Set("Test".to_string()),
        lastname: Set("User".to_string()),
        email: Set(format!("{username}@example.com")),
        username: Set(username.to_string()),
        password_digest: Set("not-a-real-digest".to_string()),
        role: Set(UserRole::Student),
        belt_rank: Set(None),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert user")
}

pub async fn create_owner_with_academy(
    db: &DatabaseConnection,
    username: &str,
) -> (user_entity::Model, academy_entity::Model) {
    let now = Utc::now();
    let owner = user_entity::ActiveModel {
        firstname: Set("Owner".to_string()),
        lastname: Set("User".to_string()),
        email: Set(format!("{username}@example.com")),
        username: Set(username.to_string()),
        password_digest: Set("not-a-real-digest".to_string()),
        role: Set(UserRole::Owner),
        belt_rank: Set(None),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert owner");

    let academy = academy_entity::ActiveModel {
        user_id: Set(owner.id),
        name: Set(format!("{username} Academy")),
        email: Set(format!("{username}@academy.example.com")),
        street_address: Set("1 Mat Street".to_string()),
        city: Set("Lisbon".to_string()),
        country: Set("Portugal".to_string()),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert academy");

    (owner, academy)
}

pub async fn create_pass(
    db: &DatabaseConnection,
    academy_id: i64,
    pass_type: PassType,
    price_cents: i64,
    class_credits: Option<i32>,
) -> pass_entity::Model {
    let now = Utc::now();
    pass_entity::ActiveModel {
        academy_id: Set(academy_id),
        name: Set(format!("{pass_type} pass")),
        price_cents: Set(price_cents),
        currency: Set("EUR".to_string()),
        pass_type: Set(pass_type),
        class_credits: Set(class_credits),
        is_active: Set(true),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert pass")
}

pub async fn create_schedule(
    db: &DatabaseConnection,
    academy_id: i64,
    title: &str,
) -> matpass_backend::entities::class_schedule_entity::Model {
    use matpass_backend::entities::class_schedule_entity;

    let now = Utc::now();
    class_schedule_entity::ActiveModel {
        academy_id: Set(academy_id),
        title: Set(title.to_string()),
        day_of_week: Set(1),
        start_time: Set(chrono::NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
        end_time: Set(chrono::NaiveTime::from_hms_opt(19, 30, 0).unwrap()),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert class schedule")
}

/// Flips every line item on the order straight to the given status.
pub async fn set_line_items_status(
    db: &DatabaseConnection,
    order_id: i64,
    status: LineItemStatus,
) {
    let line_items = order_line_item_entity::Entity::find()
        .filter(order_line_item_entity::Column::OrderId.eq(order_id))
        .all(db)
        .await
        .expect("Failed to load line items");

    for line_item in line_items {
        let mut update = line_item.into_active_model();
        update.status = Set(status.clone());
        update.update(db).await.expect("Failed to update line item");
    }
}

/// Runs the full pipeline (order -> approve -> settle) for a single pass
/// and returns the resulting entitlement.
pub async fn purchase_pass(
    db: &DatabaseConnection,
    buyer_id: i64,
    pass: &pass_entity::Model,
) -> student_pass_entity::Model {
    let order_service = OrderService::new(db.clone());
    let payment_service = PaymentService::new(db.clone());

    let (order, line_items) = order_service
        .create_order(
            buyer_id,
            &[CartItem {
                pass_id: pass.id,
                quantity: 1,
            }],
        )
        .await
        .expect("Failed to create order");

    set_line_items_status(db, order.id, LineItemStatus::Approved).await;

    payment_service
        .settle_order(order.id, buyer_id)
        .await
        .expect("Failed to settle order");

    student_pass_entity::Entity::find()
        .filter(student_pass_entity::Column::OrderLineItemId.eq(line_items[0].id))
        .one(db)
        .await
        .expect("Failed to load student pass")
        .expect("No student pass was activated")
}

/// Rewrites an entitlement's expiry, e.g. to put it in the past.
pub async fn backdate_student_pass(
    db: &DatabaseConnection,
    pass: &student_pass_entity::Model,
    expires_at: chrono::DateTime<Utc>,
) -> student_pass_entity::Model {
    let mut update = pass.clone().into_active_model();
    update.expires_at = Set(Some(expires_at));
    update.status = Set(StudentPassStatus::Active);
    update
        .update(db)
        .await
        .expect("Failed to backdate student pass")
}

/// Rewrites an entitlement's credit balance in place.
pub async fn set_student_pass_credits(
    db: &DatabaseConnection,
    pass: &student_pass_entity::Model,
    credits: i32,
) -> student_pass_entity::Model {
    let mut update = pass.clone().into_active_model();
    update.credits_remaining = Set(Some(credits));
    update.status = Set(StudentPassStatus::Active);
    update
        .update(db)
        .await
        .expect("Failed to update student pass credits")
}
