pub mod academies;
pub mod bookings;
pub mod class_schedules;
pub mod order_line_items;
pub mod orders;
pub mod passes;
pub mod payments;
pub mod reviews;
pub mod student_passes;
pub mod users;

pub use academies as academy_entity;
pub use bookings as booking_entity;
pub use class_schedules as class_schedule_entity;
pub use order_line_items as order_line_item_entity;
pub use orders as order_entity;
pub use passes as pass_entity;
pub use payments as payment_entity;
pub use reviews as review_entity;
pub use student_passes as student_pass_entity;
pub use users as user_entity;

pub use order_line_items::LineItemStatus;
pub use orders::OrderStatus;
pub use passes::PassType;
pub use payments::PaymentStatus;
pub use student_passes::{PassLimit, StudentPassStatus};
pub use users::{BeltRank, UserRole};
