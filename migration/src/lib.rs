pub use sea_orm_migration::prelude::*;

mod m20251025_000001_initial;
mod m20251102_000002_create_student_passes;
mod m20251103_000003_create_class_schedules_and_bookings;
mod m20251115_000004_create_reviews;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251025_000001_initial::Migration),
            Box::new(m20251102_000002_create_student_passes::Migration),
            Box::new(m20251103_000003_create_class_schedules_and_bookings::Migration),
            Box::new(m20251115_000004_create_reviews::Migration),
        ]
    }
}
