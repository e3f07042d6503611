//! Reviews: the attendance gate and the one-review-per-academy rule.

mod common;

use common::*;
use matpass_backend::entities::PassType;
use matpass_backend::error::AppError;
use matpass_backend::models::CreateReviewRequest;
use matpass_backend::services::{BookingService, ReviewService};

async fn attend_class(db: &sea_orm::DatabaseConnection, buyer_id: i64, academy_id: i64) {
    let pass = create_pass(db, academy_id, PassType::PunchCard, 8000, Some(10)).await;
    let schedule = create_schedule(db, academy_id, "Fundamentals").await;
    purchase_pass(db, buyer_id, &pass).await;
    BookingService::new(db.clone())
        .create_booking(buyer_id, schedule.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_review_requires_attendance() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;

    let service = ReviewService::new(db.clone());
    let err = service
        .create_review(
            buyer.id,
            academy.id,
            CreateReviewRequest {
                rating: 5,
                comment: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationFailed(_)));

    attend_class(&db, buyer.id, academy.id).await;

    let review = service
        .create_review(
            buyer.id,
            academy.id,
            CreateReviewRequest {
                rating: 5,
                comment: Some("Great mats".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(review.rating, 5);
}

#[tokio::test]
async fn test_one_review_per_user_per_academy() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    attend_class(&db, buyer.id, academy.id).await;

    let service = ReviewService::new(db.clone());
    service
        .create_review(
            buyer.id,
            academy.id,
            CreateReviewRequest {
                rating: 4,
                comment: None,
            },
        )
        .await
        .unwrap();

    let err = service
        .create_review(
            buyer.id,
            academy.id,
            CreateReviewRequest {
                rating: 5,
                comment: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationFailed(_)));
}

#[tokio::test]
async fn test_rating_must_be_in_range() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    attend_class(&db, buyer.id, academy.id).await;

    let service = ReviewService::new(db.clone());
    for rating in [0, 6, -1] {
        let err = service
            .create_review(
                buyer.id,
                academy.id,
                CreateReviewRequest {
                    rating,
                    comment: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationFailed(_)));
    }
}

#[tokio::test]
async fn test_only_the_author_may_update_or_delete() {
    let db = setup_db().await;
    let buyer = create_user(&db, "buyer").await;
    let stranger = create_user(&db, "stranger").await;
    let (_owner, academy) = create_owner_with_academy(&db, "owner").await;
    attend_class(&db, buyer.id, academy.id).await;

    let service = ReviewService::new(db.clone());
    let review = service
        .create_review(
            buyer.id,
            academy.id,
            CreateReviewRequest {
                rating: 4,
                comment: None,
            },
        )
        .await
        .unwrap();

    let err = service
        .delete_review(review.id, stranger.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));

    service.delete_review(review.id, buyer.id).await.unwrap();
}
