// src/domain/user/repository.rs
use crate::domain::user::{
    entity::{NewUserProfile, UserProfile},
    value_objects::{Email, Username},
};
use async_trait::async_trait;
use thiserror::Error;

/// Write failures. Uniqueness is checked under the store's own lock, so a
/// duplicate that slipped past an earlier lookup still surfaces here.
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("email is already registered")]
    DuplicateEmail,
    #[error("username is already taken")]
    DuplicateUsername,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Storage for user profiles. Read failures are infrastructure failures and
/// are reported as `anyhow::Error`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUserProfile) -> Result<UserProfile, UserStoreError>;

    async fn find_by_email(&self, email: &Email) -> anyhow::Result<Option<UserProfile>>;

    async fn find_by_username(&self, username: &Username) -> anyhow::Result<Option<UserProfile>>;
}
