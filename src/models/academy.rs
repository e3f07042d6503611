use crate::entities::academy_entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAcademyRequest {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub street_address: String,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AcademyResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub street_address: String,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}

impl From<academy_entity::Model> for AcademyResponse {
    fn from(m: academy_entity::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            email: m.email,
            phone_number: m.phone_number,
            website: m.website,
            description: m.description,
            street_address: m.street_address,
            city: m.city,
            state_province: m.state_province,
            postal_code: m.postal_code,
            country: m.country,
        }
    }
}
