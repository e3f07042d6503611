use crate::entities::{
    PassLimit, StudentPassStatus, booking_entity, class_schedule_entity, student_pass_entity,
};
use crate::error::{AppError, AppResult};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set, TransactionTrait,
};

#[derive(Clone)]
pub struct BookingService {
    pool: DatabaseConnection,
}

impl BookingService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Books a class slot by redeeming the user's active pass for the
    /// schedule's academy. Checks run in order and stop at the first
    /// failure; the expiry/depletion status writes persist even when the
    /// booking itself is refused.
    pub async fn create_booking(
        &self,
        user_id: i64,
        class_schedule_id: i64,
    ) -> AppResult<booking_entity::Model> {
        let schedule = class_schedule_entity::Entity::find_by_id(class_schedule_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Class schedule not found".to_string()))?;

        let already_booked = booking_entity::Entity::find()
            .filter(booking_entity::Column::UserId.eq(user_id))
            .filter(booking_entity::Column::ClassScheduleId.eq(class_schedule_id))
            .one(&self.pool)
            .await?
            .is_some();
        if already_booked {
            return Err(AppError::AlreadyBooked);
        }

        let pass = student_pass_entity::Entity::find()
            .filter(student_pass_entity::Column::UserId.eq(user_id))
            .filter(student_pass_entity::Column::AcademyId.eq(schedule.academy_id))
            .filter(student_pass_entity::Column::Status.eq(StudentPassStatus::Active))
            .one(&self.pool)
            .await?
            .ok_or(AppError::NoActivePass)?;

        let now = Utc::now();
        match pass.limit() {
            Some(PassLimit::TimeLimited(expires_at)) if expires_at < now => {
                self.mark_pass(&pass, StudentPassStatus::Expired).await?;
                return Err(AppError::PassExpired);
            }
            Some(PassLimit::CreditLimited(credits)) if credits <= 0 => {
                self.mark_pass(&pass, StudentPassStatus::Depleted).await?;
                return Err(AppError::PassDepleted);
            }
            _ => {}
        }

        let credit_limited = matches!(pass.limit(), Some(PassLimit::CreditLimited(_)));

        // The booking insert and the credit redemption commit together or
        // not at all.
        let txn = self.pool.begin().await?;

        let booking = booking_entity::ActiveModel {
            user_id: Set(user_id),
            class_schedule_id: Set(class_schedule_id),
            student_pass_id: Set(pass.id),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if credit_limited {
            // Guarded decrement: the credits_remaining > 0 filter makes the
            // store serialize racing redemptions, so the last credit is
            // spent at most once.
            let result = student_pass_entity::Entity::update_many()
                .col_expr(
                    student_pass_entity::Column::CreditsRemaining,
                    Expr::col(student_pass_entity::Column::CreditsRemaining).sub(1),
                )
                .col_expr(student_pass_entity::Column::UpdatedAt, Expr::value(now))
                .filter(student_pass_entity::Column::Id.eq(pass.id))
                .filter(student_pass_entity::Column::CreditsRemaining.gt(0))
                .exec(&txn)
                .await?;

            if result.rows_affected != 1 {
                // A concurrent redemption took the last credit between the
                // pre-check and the decrement. Release the connection before
                // writing the status flip.
                txn.rollback().await?;
                self.mark_pass(&pass, StudentPassStatus::Depleted).await?;
                return Err(AppError::PassDepleted);
            }

            let redeemed = student_pass_entity::Entity::find_by_id(pass.id)
                .one(&txn)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!("Student pass {} disappeared", pass.id))
                })?;

            if redeemed.credits_remaining == Some(0) {
                let mut update = redeemed.into_active_model();
                update.status = Set(StudentPassStatus::Depleted);
                update.updated_at = Set(Some(now));
                update.update(&txn).await?;
            }
        }

        txn.commit().await?;

        log::info!(
            "User {user_id} booked class schedule {class_schedule_id} with pass {}",
            pass.id
        );

        Ok(booking)
    }

    /// Booking through the nested academy route: the schedule must belong
    /// to the academy in the path.
    pub async fn create_booking_in_academy(
        &self,
        user_id: i64,
        academy_id: i64,
        class_schedule_id: i64,
    ) -> AppResult<booking_entity::Model> {
        let schedule = class_schedule_entity::Entity::find_by_id(class_schedule_id)
            .one(&self.pool)
            .await?;

        match schedule {
            Some(s) if s.academy_id == academy_id => {
                self.create_booking(user_id, class_schedule_id).await
            }
            _ => Err(AppError::NotFound(
                "Class schedule not found for this academy".to_string(),
            )),
        }
    }

    pub async fn list_user_bookings(&self, user_id: i64) -> AppResult<Vec<booking_entity::Model>> {
        let bookings = booking_entity::Entity::find()
            .filter(booking_entity::Column::UserId.eq(user_id))
            .all(&self.pool)
            .await?;
        Ok(bookings)
    }

    async fn mark_pass(
        &self,
        pass: &student_pass_entity::Model,
        status: StudentPassStatus,
    ) -> AppResult<()> {
        let mut update = pass.clone().into_active_model();
        update.status = Set(status);
        update.updated_at = Set(Some(Utc::now()));
        update.update(&self.pool).await?;
        Ok(())
    }
}
