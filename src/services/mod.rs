pub mod academy_service;
pub mod auth_service;
pub mod booking_service;
pub mod class_schedule_service;
pub mod order_line_item_service;
pub mod order_service;
pub mod pass_service;
pub mod payment_service;
pub mod review_service;
pub mod student_pass_service;
pub mod user_service;

pub use academy_service::*;
pub use auth_service::*;
pub use booking_service::*;
pub use class_schedule_service::*;
pub use order_line_item_service::*;
pub use order_service::*;
pub use pass_service::*;
pub use payment_service::*;
pub use review_service::*;
pub use student_pass_service::*;
pub use user_service::*;
