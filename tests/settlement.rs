//! Mock payment settlement: preconditions, idempotence, activation and
//! all-or-nothing rollback.

mod common;

use chrono::{Duration, Utc};
use common::*;
use matpass_backend::entities::{
    LineItemStatus, OrderStatus, PassType, PaymentStatus, StudentPassStatus, order_entity,
    payment_entity, student_pass_entity,
};
use matpass_backend::error::{AppError, SettlementBlock};
use matpass_backend::models::CartItem;
use matpass_backend::services::{OrderService, PaymentService};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, Set,
};

async fn place_order(
    db: &sea_orm::DatabaseConnection,
    buyer_id: i64,
    cart: &[CartItem],
) -> (
    order_entity::Model,
    Vec<matpass_backend::entities::order_line_item_entity::Model>,
) {
    OrderService::new(db.clone())
        .create_order(buyer_id, cart)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_settle_creates_payment_and_completes_order() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    let day_pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;

    let (order, _) = place_order(
        &db,
        buyer.id,
        &[CartItem {
            pass_id: day_pass.id,
            quantity: 1,
        }],
    )
    .await;
    set_line_items_status(&db, order.id, LineItemStatus::Approved).await;

    let payment = PaymentService::new(db.clone())
        .settle_order(order.id, buyer.id)
        .await
        .unwrap();

    assert_eq!(payment.status, PaymentStatus::Succeeded);
    assert_eq!(payment.amount_cents, 2000);
    assert_eq!(payment.processor, "mock");
    assert!(payment.processor_id.starts_with("mock_ch_"));

    let order = order_entity::Entity::find_by_id(order.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
}

#[tokio::test]
async fn test_settle_activates_day_pass_with_one_day_expiry() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    let day_pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;

    let before = Utc::now();
    let student_pass = purchase_pass(&db, buyer.id, &day_pass).await;
    let after = Utc::now();

    assert_eq!(student_pass.status, StudentPassStatus::Active);
    assert_eq!(student_pass.credits_remaining, None);

    let expires_at = student_pass.expires_at.expect("Day pass must be time-limited");
    assert!(expires_at >= before + Duration::days(1));
    assert!(expires_at <= after + Duration::days(1));
}

#[tokio::test]
async fn test_settle_activates_credit_passes() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    let punch_card = create_pass(&db, academy.id, PassType::PunchCard, 8000, Some(10)).await;
    let single = create_pass(&db, academy.id, PassType::Single, 1500, None).await;

    let punch_entitlement = purchase_pass(&db, buyer.id, &punch_card).await;
    assert_eq!(punch_entitlement.credits_remaining, Some(10));
    assert_eq!(punch_entitlement.expires_at, None);

    let single_entitlement = purchase_pass(&db, buyer.id, &single).await;
    assert_eq!(single_entitlement.credits_remaining, Some(1));
    assert_eq!(single_entitlement.expires_at, None);
}

#[tokio::test]
async fn test_settle_requires_awaiting_approvals() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    let day_pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;

    let (order, _) = place_order(
        &db,
        buyer.id,
        &[CartItem {
            pass_id: day_pass.id,
            quantity: 1,
        }],
    )
    .await;
    set_line_items_status(&db, order.id, LineItemStatus::Approved).await;

    let mut update = order.clone().into_active_model();
    update.status = Set(OrderStatus::Completed);
    update.update(&db).await.unwrap();

    let err = PaymentService::new(db.clone())
        .settle_order(order.id, buyer.id)
        .await
        .unwrap_err();

    match err {
        AppError::NotReady(SettlementBlock::NotAwaitingApprovals { current_status }) => {
            assert_eq!(current_status, "completed");
        }
        other => panic!("Expected NotAwaitingApprovals, got {other:?}"),
    }

    let payments = payment_entity::Entity::find().count(&db).await.unwrap();
    assert_eq!(payments, 0);
}

#[tokio::test]
async fn test_settle_requires_all_line_items_approved() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    let day_pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;
    let punch_card = create_pass(&db, academy.id, PassType::PunchCard, 8000, Some(10)).await;

    // One approved, one still pending.
    let (order, line_items) = place_order(
        &db,
        buyer.id,
        &[
            CartItem {
                pass_id: day_pass.id,
                quantity: 1,
            },
            CartItem {
                pass_id: punch_card.id,
                quantity: 1,
            },
        ],
    )
    .await;

    let mut update = line_items[0].clone().into_active_model();
    update.status = Set(LineItemStatus::Approved);
    update.update(&db).await.unwrap();

    let err = PaymentService::new(db.clone())
        .settle_order(order.id, buyer.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::NotReady(SettlementBlock::LineItemsNotApproved)
    ));

    // A rejected line blocks settlement the same way.
    let mut update = line_items[1].clone().into_active_model();
    update.status = Set(LineItemStatus::Rejected);
    update.update(&db).await.unwrap();

    let err = PaymentService::new(db.clone())
        .settle_order(order.id, buyer.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::NotReady(SettlementBlock::LineItemsNotApproved)
    ));

    let payments = payment_entity::Entity::find().count(&db).await.unwrap();
    assert_eq!(payments, 0);
}

#[tokio::test]
async fn test_settle_is_idempotent_safe() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    let day_pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;

    let (order, _) = place_order(
        &db,
        buyer.id,
        &[CartItem {
            pass_id: day_pass.id,
            quantity: 1,
        }],
    )
    .await;
    set_line_items_status(&db, order.id, LineItemStatus::Approved).await;

    let service = PaymentService::new(db.clone());
    service.settle_order(order.id, buyer.id).await.unwrap();

    // A second settle never double-charges.
    let err = service.settle_order(order.id, buyer.id).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::NotReady(SettlementBlock::NotAwaitingApprovals { .. })
    ));

    let payments = payment_entity::Entity::find().count(&db).await.unwrap();
    assert_eq!(payments, 1);
}

#[tokio::test]
async fn test_settlement_rolls_back_when_activation_fails() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    let day_pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;
    // A punch card with no credit count cannot be activated.
    let broken_punch_card = create_pass(&db, academy.id, PassType::PunchCard, 8000, None).await;

    let (order, _) = place_order(
        &db,
        buyer.id,
        &[
            CartItem {
                pass_id: day_pass.id,
                quantity: 1,
            },
            CartItem {
                pass_id: broken_punch_card.id,
                quantity: 1,
            },
        ],
    )
    .await;
    set_line_items_status(&db, order.id, LineItemStatus::Approved).await;

    let err = PaymentService::new(db.clone())
        .settle_order(order.id, buyer.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::TransactionAborted(_)));

    // All-or-nothing: no payment, no entitlements, order untouched.
    let payments = payment_entity::Entity::find().count(&db).await.unwrap();
    assert_eq!(payments, 0);

    let entitlements = student_pass_entity::Entity::find()
        .filter(student_pass_entity::Column::UserId.eq(buyer.id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(entitlements, 0);

    let order = order_entity::Entity::find_by_id(order.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.status, OrderStatus::AwaitingApprovals);
}

#[tokio::test]
async fn test_settle_is_forbidden_for_other_users() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let stranger = create_user(&db, "stranger").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    let day_pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;

    let (order, _) = place_order(
        &db,
        buyer.id,
        &[CartItem {
            pass_id: day_pass.id,
            quantity: 1,
        }],
    )
    .await;
    set_line_items_status(&db, order.id, LineItemStatus::Approved).await;

    let err = PaymentService::new(db.clone())
        .settle_order(order.id, stranger.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}
