use crate::entities::{BeltRank, UserRole, user_entity};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub belt_rank: Option<BeltRank>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub belt_rank: Option<BeltRank>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub belt_rank: Option<BeltRank>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl From<user_entity::Model> for UserResponse {
    fn from(m: user_entity::Model) -> Self {
        Self {
            id: m.id,
            firstname: m.firstname,
            lastname: m.lastname,
            email: m.email,
            username: m.username,
            role: m.role,
            belt_rank: m.belt_rank,
        }
    }
}
