pub mod jwt;
pub mod password;
pub mod token;
pub mod validation;

pub use jwt::*;
pub use password::*;
pub use token::generate_processor_id;
pub use validation::validate_email;
