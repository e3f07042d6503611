//! Line item approval workflow: transition table and owner authorization.

mod common;

use common::*;
use matpass_backend::entities::{LineItemStatus, PassType};
use matpass_backend::error::AppError;
use matpass_backend::models::CartItem;
use matpass_backend::services::{OrderLineItemService, OrderService};

async fn place_line_item(
    db: &sea_orm::DatabaseConnection,
    buyer_id: i64,
    pass_id: i64,
) -> matpass_backend::entities::order_line_item_entity::Model {
    let (_, mut line_items) = OrderService::new(db.clone())
        .create_order(
            buyer_id,
            &[CartItem {
                pass_id,
                quantity: 1,
            }],
        )
        .await
        .unwrap();
    line_items.remove(0)
}

#[tokio::test]
async fn test_owner_can_approve_pending_line_item() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (owner, academy) = create_owner_with_academy(&db, "owner").await;
    let pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;
    let line_item = place_line_item(&db, buyer.id, pass.id).await;

    let service = OrderLineItemService::new(db.clone());
    let updated = service
        .update_status(line_item.id, "approved", owner.id)
        .await
        .unwrap();

    assert_eq!(updated.status, LineItemStatus::Approved);
}

#[tokio::test]
async fn test_owner_can_reject_pending_line_item() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (owner, academy) = create_owner_with_academy(&db, "owner").await;
    let pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;
    let line_item = place_line_item(&db, buyer.id, pass.id).await;

    let updated = OrderLineItemService::new(db.clone())
        .update_status(line_item.id, "rejected", owner.id)
        .await
        .unwrap();

    assert_eq!(updated.status, LineItemStatus::Rejected);
}

#[tokio::test]
async fn test_unknown_status_value_is_rejected() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (owner, academy) = create_owner_with_academy(&db, "owner").await;
    let pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;
    let line_item = place_line_item(&db, buyer.id, pass.id).await;

    let err = OrderLineItemService::new(db.clone())
        .update_status(line_item.id, "completed", owner.id)
        .await
        .unwrap_err();

    match err {
        AppError::InvalidInput(msg) => assert!(msg.contains("completed")),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn test_terminal_statuses_cannot_transition() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (owner, academy) = create_owner_with_academy(&db, "owner").await;
    let pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;
    let line_item = place_line_item(&db, buyer.id, pass.id).await;

    let service = OrderLineItemService::new(db.clone());
    service
        .update_status(line_item.id, "approved", owner.id)
        .await
        .unwrap();

    // approved -> rejected is not permitted.
    let err = service
        .update_status(line_item.id, "rejected", owner.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { .. }));

    // Re-approving is not permitted either.
    let err = service
        .update_status(line_item.id, "approved", owner.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_only_the_owning_academy_may_transition() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    let (other_owner, _other_academy) = create_owner_with_academy(&db, "other-owner").await;
    let pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;
    let line_item = place_line_item(&db, buyer.id, pass.id).await;

    let err = OrderLineItemService::new(db.clone())
        .update_status(line_item.id, "approved", other_owner.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));

    // The buyer cannot approve their own purchase.
    let err = OrderLineItemService::new(db.clone())
        .update_status(line_item.id, "approved", buyer.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn test_academy_owner_chain_is_derivable() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (owner, academy) = create_owner_with_academy(&db, "owner").await;
    let pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;
    let line_item = place_line_item(&db, buyer.id, pass.id).await;

    let owner_id = OrderLineItemService::new(db.clone())
        .academy_owner_of(&line_item)
        .await
        .unwrap();
    assert_eq!(owner_id, owner.id);
}

#[tokio::test]
async fn test_academy_inbox_lists_and_filters_line_items() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (owner, academy) = create_owner_with_academy(&db, "owner").await;
    let (_other_owner, other_academy) = create_owner_with_academy(&db, "other-owner").await;
    let pass = create_pass(&db, academy.id, PassType::DayPass, 2000, None).await;
    let punch_card = create_pass(&db, academy.id, PassType::PunchCard, 8000, Some(10)).await;
    let foreign_pass = create_pass(&db, other_academy.id, PassType::DayPass, 3000, None).await;

    let first = place_line_item(&db, buyer.id, pass.id).await;
    let second = place_line_item(&db, buyer.id, punch_card.id).await;
    place_line_item(&db, buyer.id, foreign_pass.id).await;

    let service = OrderLineItemService::new(db.clone());
    service
        .update_status(first.id, "approved", owner.id)
        .await
        .unwrap();

    // Only this academy's line items, newest first.
    let inbox = service
        .list_for_academy(academy.id, owner.id, None)
        .await
        .unwrap();
    assert_eq!(inbox.len(), 2);
    assert_eq!(inbox[0].id, second.id);
    assert_eq!(inbox[1].id, first.id);

    let pending = service
        .list_for_academy(academy.id, owner.id, Some("pending_approval"))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second.id);

    // The inbox is owner-only.
    let err = service
        .list_for_academy(academy.id, buyer.id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
}
