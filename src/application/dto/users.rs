use crate::domain::user::UserProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserProfileDto {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            display_name: user.display_name,
            bio: user.bio,
            website: user.website,
            created_at: user.created_at,
        }
    }
}
