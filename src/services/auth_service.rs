use crate::entities::{UserRole, user_entity};
use crate::error::{AppError, AppResult};
use crate::models::{AuthResponse, LoginRequest, RegisterUserRequest, UserResponse};
use crate::utils::{JwtService, hash_password, validate_email, validate_password, verify_password};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    pub async fn register(&self, req: RegisterUserRequest) -> AppResult<user_entity::Model> {
        for (field, value) in [
            ("firstname", &req.firstname),
            ("lastname", &req.lastname),
            ("username", &req.username),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::ValidationFailed(format!("{field} can't be blank")));
            }
        }
        validate_email(&req.email)?;
        validate_password(&req.password)?;

        let email_taken = user_entity::Entity::find()
            .filter(user_entity::Column::Email.eq(req.email.clone()))
            .one(&self.pool)
            .await?
            .is_some();
        if email_taken {
            return Err(AppError::ValidationFailed(
                "Email has already been taken".to_string(),
            ));
        }

        let username_taken = user_entity::Entity::find()
            .filter(user_entity::Column::Username.eq(req.username.clone()))
            .one(&self.pool)
            .await?
            .is_some();
        if username_taken {
            return Err(AppError::ValidationFailed(
                "Username has already been taken".to_string(),
            ));
        }

        let now = Utc::now();
        let user = user_entity::ActiveModel {
            firstname: Set(req.firstname),
            lastname: Set(req.lastname),
            email: Set(req.email),
            username: Set(req.username),
            password_digest: Set(hash_password(&req.password)?),
            role: Set(UserRole::Student),
            belt_rank: Set(req.belt_rank),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    pub async fn login(&self, req: LoginRequest) -> AppResult<AuthResponse> {
        let user = user_entity::Entity::find()
            .filter(user_entity::Column::Email.eq(req.email.clone()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&req.password, &user.password_digest)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        self.issue_tokens(user)
    }

    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;
        let user_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::AuthError("Invalid token subject".to_string()))?;

        let user = user_entity::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("User no longer exists".to_string()))?;

        self.issue_tokens(user)
    }

    fn issue_tokens(&self, user: user_entity::Model) -> AppResult<AuthResponse> {
        let access_token = self.jwt_service.generate_access_token(user.id)?;
        let refresh_token = self.jwt_service.generate_refresh_token(user.id)?;

        Ok(AuthResponse {
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
            user: UserResponse::from(user),
        })
    }
}
