use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum StudentPasses {
    Table,
    Id,
    UserId,
    PassId,
    OrderLineItemId,
    AcademyId,
    Status,
    ExpiresAt,
    CreditsRemaining,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Passes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum OrderLineItems {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Academies {
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
                    .table(StudentPasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentPasses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentPasses::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentPasses::PassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentPasses::OrderLineItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentPasses::AcademyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentPasses::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(StudentPasses::ExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentPasses::CreditsRemaining)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentPasses::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentPasses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_passes_user")
                            .from(StudentPasses::Table, StudentPasses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_passes_pass")
                            .from(StudentPasses::Table, StudentPasses::PassId)
                            .to(Passes::Table, Passes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_passes_order_line_item")
                            .from(StudentPasses::Table, StudentPasses::OrderLineItemId)
                            .to(OrderLineItems::Table, OrderLineItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_passes_academy")
                            .from(StudentPasses::Table, StudentPasses::AcademyId)
                            .to(Academies::Table, Academies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One entitlement per settled line item.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_passes_order_line_item")
                    .table(StudentPasses::Table)
                    .col(StudentPasses::OrderLineItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_passes_user")
                    .table(StudentPasses::Table)
                    .col(StudentPasses::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_passes_academy")
                    .table(StudentPasses::Table)
                    .col(StudentPasses::AcademyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(StudentPasses::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
