use super::UserQueryService;
use crate::application::{dto::UserProfileDto, error::ApplicationResult};
use crate::domain::{errors::DomainException, user::Username};

impl UserQueryService {
    pub async fn get_by_username(&self, username: &str) -> ApplicationResult<UserProfileDto> {
        // a malformed name can never match a stored user
        let Ok(username) = Username::new(username) else {
            return Err(DomainException::user_not_found().into());
        };

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(DomainException::user_not_found)?;

        Ok(user.into())
    }
}
