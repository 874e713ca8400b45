pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUserProfile, UserProfile};
pub use repository::{UserRepository, UserStoreError};
pub use value_objects::{Email, UserId, Username};
