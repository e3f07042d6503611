pub mod academy;
pub mod auth;
pub mod booking;
pub mod class_schedule;
pub mod order;
pub mod order_line_item;
pub mod pass;
pub mod review;
pub mod student_pass;
pub mod user;

pub use academy::academy_config;
pub use auth::auth_config;
pub use booking::booking_config;
pub use class_schedule::class_schedule_config;
pub use order::order_config;
pub use order_line_item::order_line_item_config;
pub use pass::pass_config;
pub use review::review_config;
pub use student_pass::student_pass_config;
pub use user::user_config;

use actix_web::{HttpMessage, HttpRequest};

/// The auth middleware stores the authenticated user id in the request
/// extensions.
pub(crate) fn get_user_id_from_request(req: &HttpRequest) -> Option<i64> {
    req.extensions().get::<i64>().copied()
}
