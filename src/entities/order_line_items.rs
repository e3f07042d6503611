use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "snake_case")]
pub enum LineItemStatus {
    #[sea_orm(string_value = "pending_approval")]
    PendingApproval,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl std::fmt::Display for LineItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineItemStatus::PendingApproval => write!(f, "pending_approval"),
            LineItemStatus::Approved => write!(f, "approved"),
            LineItemStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for LineItemStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_approval" => Ok(LineItemStatus::PendingApproval),
            "approved" => Ok(LineItemStatus::Approved),
            "rejected" => Ok(LineItemStatus::Rejected),
            _ => Err(()),
        }
    }
}

impl LineItemStatus {
    /// Statuses an owner may move a line item into from the current one.
    /// Approved and rejected are terminal.
    pub fn allowed_next(&self) -> &'static [LineItemStatus] {
        match self {
            LineItemStatus::PendingApproval => {
                &[LineItemStatus::Approved, LineItemStatus::Rejected]
            }
            LineItemStatus::Approved | LineItemStatus::Rejected => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "order_line_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_id: i64,
    pub pass_id: i64,
    pub quantity: i32,
    pub price_at_purchase_cents: i64,
    pub status: LineItemStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Orders,
    #[sea_orm(
        belongs_to = "super::passes::Entity",
        from = "Column::PassId",
        to = "super::passes::Column::Id"
    )]
    Passes,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::passes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_line_item_status() {
        assert_eq!(
            LineItemStatus::from_str("approved"),
            Ok(LineItemStatus::Approved)
        );
        assert_eq!(
            LineItemStatus::from_str("pending_approval"),
            Ok(LineItemStatus::PendingApproval)
        );
        assert!(LineItemStatus::from_str("completed").is_err());
        assert!(LineItemStatus::from_str("").is_err());
    }

    #[test]
    fn test_terminal_statuses_have_no_successors() {
        assert!(LineItemStatus::Approved.allowed_next().is_empty());
        assert!(LineItemStatus::Rejected.allowed_next().is_empty());
        assert_eq!(LineItemStatus::PendingApproval.allowed_next().len(), 2);
    }
}
