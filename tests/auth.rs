//! Registration and login against the real service layer.

mod common;

use common::*;
use matpass_backend::entities::{BeltRank, UserRole};
use matpass_backend::error::AppError;
use matpass_backend::models::{LoginRequest, RegisterUserRequest};
use matpass_backend::services::AuthService;
use matpass_backend::utils::JwtService;

fn jwt() -> JwtService {
    JwtService::new("test-secret", 3600, 7200)
}

fn register_request(email: &str, username: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        firstname: "Ana".to_string(),
        lastname: "Silva".to_string(),
        email: email.to_string(),
        username: username.to_string(),
        password: "Password123".to_string(),
        belt_rank: Some(BeltRank::Blue),
    }
}

#[tokio::test]
async fn test_register_and_login() {
    let db = setup_db().await;
    let service = AuthService::new(db.clone(), jwt());

    let user = service
        .register(register_request("ana@example.com", "ana"))
        .await
        .unwrap();
    assert_eq!(user.role, UserRole::Student);
    assert_eq!(user.belt_rank, Some(BeltRank::Blue));
    // Never store the plain password.
    assert_ne!(user.password_digest, "Password123");

    let tokens = service
        .login(LoginRequest {
            email: "ana@example.com".to_string(),
            password: "Password123".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(tokens.user.id, user.id);

    let claims = jwt().verify_access_token(&tokens.access_token).unwrap();
    assert_eq!(claims.sub, user.id.to_string());

    let refreshed = service.refresh(&tokens.refresh_token).await.unwrap();
    assert_eq!(refreshed.user.id, user.id);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email_and_username() {
    let db = setup_db().await;
    let service = AuthService::new(db.clone(), jwt());

    service
        .register(register_request("ana@example.com", "ana"))
        .await
        .unwrap();

    let err = service
        .register(register_request("ana@example.com", "ana2"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationFailed(_)));

    let err = service
        .register(register_request("ana2@example.com", "ana"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationFailed(_)));
}

#[tokio::test]
async fn test_register_rejects_bad_email_and_weak_password() {
    let db = setup_db().await;
    let service = AuthService::new(db.clone(), jwt());

    let mut bad_email = register_request("not-an-email", "ana");
    bad_email.email = "not-an-email".to_string();
    assert!(matches!(
        service.register(bad_email).await.unwrap_err(),
        AppError::ValidationFailed(_)
    ));

    let mut weak = register_request("ana@example.com", "ana");
    weak.password = "short".to_string();
    assert!(matches!(
        service.register(weak).await.unwrap_err(),
        AppError::ValidationFailed(_)
    ));
}

#[tokio::test]
async fn test_login_rejects_wrong_credentials() {
    let db = setup_db().await;
    let service = AuthService::new(db.clone(), jwt());

    service
        .register(register_request("ana@example.com", "ana"))
        .await
        .unwrap();

    let err = service
        .login(LoginRequest {
            email: "ana@example.com".to_string(),
            password: "WrongPassword1".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AuthError(_)));

    let err = service
        .login(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "Password123".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AuthError(_)));
}
