// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub username: Username,
    pub display_name: String,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUserProfile {
    pub email: Email,
    pub username: Username,
    pub display_name: String,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewUserProfile {
    pub fn into_profile(self, id: UserId) -> UserProfile {
        UserProfile {
            id,
            email: self.email,
            username: self.username,
            display_name: self.display_name,
            bio: self.bio,
            website: self.website,
            created_at: self.created_at,
        }
    }
}
