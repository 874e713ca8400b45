pub mod errors;
pub mod taxonomy;
pub mod user;
