// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::RegisterUserCommand,
    dto::UserProfileDto,
    validation::{Validate, ValidationNode},
};
use crate::domain::user::{Username, value_objects::looks_like_email};
use crate::presentation::http::error::{ErrorScope, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;

const DISPLAY_NAME_MAX: usize = 50;
const BIO_MAX: usize = 280;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub profile: Option<ProfileInput>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileInput {
    pub bio: Option<String>,
    pub website: Option<String>,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Vec<ValidationNode> {
        let mut nodes = Vec::new();

        let mut email = ValidationNode::new("email").with_value(Value::from(self.email.as_str()));
        if self.email.trim().is_empty() {
            email = email.constraint("isNotEmpty", "email should not be empty");
        } else if !looks_like_email(&self.email.trim().to_lowercase()) {
            email = email.constraint("isEmail", "email must be an email");
        }
        nodes.push(email);

        let mut username =
            ValidationNode::new("username").with_value(Value::from(self.username.as_str()));
        if self.username.chars().count() < Username::MIN_LEN {
            username = username.constraint(
                "minLength",
                format!(
                    "username must be longer than or equal to {} characters",
                    Username::MIN_LEN
                ),
            );
        }
        if self.username.chars().count() > Username::MAX_LEN {
            username = username.constraint(
                "maxLength",
                format!(
                    "username must be shorter than or equal to {} characters",
                    Username::MAX_LEN
                ),
            );
        }
        nodes.push(username);

        let mut display_name = ValidationNode::new("displayName");
        if self.display_name.trim().is_empty() {
            display_name = display_name.constraint("isNotEmpty", "displayName should not be empty");
        }
        if self.display_name.chars().count() > DISPLAY_NAME_MAX {
            display_name = display_name.constraint(
                "maxLength",
                format!("displayName must be shorter than or equal to {DISPLAY_NAME_MAX} characters"),
            );
        }
        nodes.push(display_name);

        if let Some(profile) = &self.profile {
            let mut node = ValidationNode::new("profile");
            if let Some(bio) = &profile.bio {
                if bio.chars().count() > BIO_MAX {
                    node = node.child(ValidationNode::new("bio").constraint(
                        "maxLength",
                        format!("bio must be shorter than or equal to {BIO_MAX} characters"),
                    ));
                }
            }
            if let Some(website) = &profile.website {
                if !(website.starts_with("https://") || website.starts_with("http://")) {
                    node = node.child(
                        ValidationNode::new("website")
                            .with_value(Value::from(website.as_str()))
                            .constraint("isUrl", "website must be a URL address"),
                    );
                }
            }
            nodes.push(node);
        }

        nodes
    }
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    scope: ErrorScope,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserProfileDto>)> {
    let profile = payload.profile.unwrap_or_default();
    let command = RegisterUserCommand {
        email: payload.email,
        username: payload.username,
        display_name: payload.display_name,
        bio: profile.bio,
        website: profile.website,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http(&scope)
        .map(|user| (StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    scope: ErrorScope,
    Path(username): Path<String>,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_by_username(&username)
        .await
        .into_http(&scope)
        .map(Json)
}
