// src/infrastructure/repositories/in_memory_user.rs
use crate::domain::user::{
    Email, NewUserProfile, UserId, UserProfile, UserRepository, UserStoreError, Username,
};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<UserProfile>,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> anyhow::Result<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| anyhow!("user store lock poisoned"))
    }

    fn write(&self) -> anyhow::Result<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| anyhow!("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUserProfile) -> Result<UserProfile, UserStoreError> {
        let mut state = self.write()?;
        if state.users.iter().any(|u| u.email == new_user.email) {
            return Err(UserStoreError::DuplicateEmail);
        }
        if state.users.iter().any(|u| u.username == new_user.username) {
            return Err(UserStoreError::DuplicateUsername);
        }
        state.next_id += 1;
        let user = new_user.into_profile(UserId(state.next_id));
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> anyhow::Result<Option<UserProfile>> {
        let state = self.read()?;
        Ok(state.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> anyhow::Result<Option<UserProfile>> {
        let state = self.read()?;
        Ok(state.users.iter().find(|u| &u.username == username).cloned())
    }
}
