use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum ClassSchedules {
    Table,
    Id,
    AcademyId,
    Title,
    DayOfWeek,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    UserId,
    ClassScheduleId,
    StudentPassId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Academies {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum StudentPasses {
    Table,
    Id,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::AcademyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassSchedules::Title).string().not_null())
                    .col(
                        ColumnDef::new(ClassSchedules::DayOfWeek)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassSchedules::StartTime).time().not_null())
                    .col(ColumnDef::new(ClassSchedules::EndTime).time().not_null())
                    .col(
                        ColumnDef::new(ClassSchedules::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_schedules_academy")
                            .from(ClassSchedules::Table, ClassSchedules::AcademyId)
                            .to(Academies::Table, Academies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_schedules_academy")
                    .table(ClassSchedules::Table)
                    .col(ClassSchedules::AcademyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Bookings::ClassScheduleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::StudentPassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_user")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_class_schedule")
                            .from(Bookings::Table, Bookings::ClassScheduleId)
                            .to(ClassSchedules::Table, ClassSchedules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_student_pass")
                            .from(Bookings::Table, Bookings::StudentPassId)
                            .to(StudentPasses::Table, StudentPasses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user may book a given class occurrence at most once.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bookings_user_class_schedule")
                    .table(Bookings::Table)
                    .col(Bookings::UserId)
                    .col(Bookings::ClassScheduleId)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bookings_student_pass")
                    .table(Bookings::Table)
                    .col(Bookings::StudentPassId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Bookings::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(ClassSchedules::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
