use crate::entities::{PassType, pass_entity};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePassRequest {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: Option<String>,
    pub pass_type: PassType,
    pub class_credits: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub pass_type: Option<PassType>,
    pub class_credits: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PassResponse {
    pub id: i64,
    pub academy_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub pass_type: PassType,
    pub class_credits: Option<i32>,
    pub is_active: bool,
}

impl From<pass_entity::Model> for PassResponse {
    fn from(m: pass_entity::Model) -> Self {
        Self {
            id: m.id,
            academy_id: m.academy_id,
            name: m.name,
            description: m.description,
            price_cents: m.price_cents,
            currency: m.currency,
            pass_type: m.pass_type,
            class_credits: m.class_credits,
            is_active: m.is_active,
        }
    }
}
