use crate::entities::{PaymentStatus, payment_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i64,
    pub order_id: i64,
    pub status: PaymentStatus,
    pub amount_cents: i64,
    pub currency: String,
    pub processor: String,
    pub processor_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<payment_entity::Model> for PaymentResponse {
    fn from(m: payment_entity::Model) -> Self {
        Self {
            id: m.id,
            order_id: m.order_id,
            status: m.status,
            amount_cents: m.amount_cents,
            currency: m.currency,
            processor: m.processor,
            processor_id: m.processor_id,
            created_at: m.created_at,
        }
    }
}
