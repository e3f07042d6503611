pub mod academy;
pub mod booking;
pub mod class_schedule;
pub mod common;
pub mod order;
pub mod pass;
pub mod payment;
pub mod review;
pub mod student_pass;
pub mod user;

pub use academy::*;
pub use booking::*;
pub use class_schedule::*;
pub use common::*;
pub use order::*;
pub use pass::*;
pub use payment::*;
pub use review::*;
pub use student_pass::*;
pub use user::*;
