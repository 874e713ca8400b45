use super::UserCommandService;
use crate::{
    application::{dto::UserProfileDto, error::ApplicationResult},
    domain::{
        errors::{DomainException, FieldError},
        user::{Email, NewUserProfile, Username},
    },
};

pub struct RegisterUserCommand {
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub website: Option<String>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserProfileDto> {
        let (email, username) = parse_identity(&command)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(DomainException::email_exists().into());
        }
        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(DomainException::username_exists().into());
        }

        let new_user = NewUserProfile {
            email,
            username,
            display_name: command.display_name.trim().to_string(),
            bio: command.bio,
            website: command.website,
            created_at: self.clock.now(),
        };
        let user = self.user_repo.insert(new_user).await?;

        Ok(user.into())
    }
}

/// Parses both identity fields, reporting every failure together.
fn parse_identity(command: &RegisterUserCommand) -> Result<(Email, Username), DomainException> {
    match (
        Email::new(command.email.as_str()),
        Username::new(command.username.as_str()),
    ) {
        (Ok(email), Ok(username)) => Ok((email, username)),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err),
        (Err(email_err), Err(username_err)) => Err(DomainException::validation(vec![
            first_field(&email_err, "email"),
            first_field(&username_err, "username"),
        ])),
    }
}

fn first_field(err: &DomainException, field: &str) -> FieldError {
    err.details()
        .and_then(|d| d.get(0))
        .and_then(|v| serde_json::from_value::<FieldError>(v.clone()).ok())
        .unwrap_or_else(|| FieldError::new(field, err.message()))
}
