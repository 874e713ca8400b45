pub mod errors;
pub mod users;

pub use errors::{ErrorResponse, ValidationErrorResponse};
pub use users::UserProfileDto;
