use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Which settlement precondition was not met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettlementBlock {
    NotAwaitingApprovals { current_status: String },
    LineItemsNotApproved,
}

impl std::fmt::Display for SettlementBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettlementBlock::NotAwaitingApprovals { current_status } => {
                write!(f, "Order is not awaiting approvals (status: {current_status})")
            }
            SettlementBlock::LineItemsNotApproved => {
                write!(f, "Not all line items have been approved")
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Cannot transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("{0}")]
    NotReady(SettlementBlock),

    #[error("You have already booked this class")]
    AlreadyBooked,

    #[error("No active pass found for this academy")]
    NoActivePass,

    #[error("Your pass for this academy is expired")]
    PassExpired,

    #[error("Your pass for this academy is out of credits")]
    PassDepleted,

    #[error("Transaction aborted: {0}")]
    TransactionAborted(String),

    #[error("Auth error: {0}")]
    AuthError(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AppError::InvalidInput(msg) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_INPUT",
                msg.clone(),
            ),
            AppError::ValidationFailed(msg) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                msg.clone(),
            ),
            AppError::AuthError(msg) => {
                log::warn!("Authentication error: {msg}");
                (
                    actix_web::http::StatusCode::UNAUTHORIZED,
                    "AUTH_ERROR",
                    msg.clone(),
                )
            }
            AppError::Forbidden => (
                actix_web::http::StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Forbidden".to_string(),
            ),
            AppError::NotFound(msg) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
            ),
            AppError::InvalidTransition { .. } => (
                actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_TRANSITION",
                self.to_string(),
            ),
            AppError::NotReady(block) => (
                actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                "NOT_READY",
                block.to_string(),
            ),
            AppError::AlreadyBooked => (
                actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                "ALREADY_BOOKED",
                self.to_string(),
            ),
            AppError::NoActivePass => (
                actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                "NO_ACTIVE_PASS",
                self.to_string(),
            ),
            AppError::PassExpired => (
                actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                "PASS_EXPIRED",
                self.to_string(),
            ),
            AppError::PassDepleted => (
                actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                "PASS_DEPLETED",
                self.to_string(),
            ),
            AppError::TransactionAborted(msg) => {
                log::error!("Transaction aborted: {msg}");
                (
                    actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
                    "TRANSACTION_ABORTED",
                    msg.clone(),
                )
            }
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error".to_string(),
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message
            }
        }))
    }
}
