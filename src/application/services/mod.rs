// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::users::UserCommandService,
        ports::{error_sink::ErrorSink, time::Clock},
        queries::users::UserQueryService,
        translator::ErrorTranslator,
    },
    domain::user::UserRepository,
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    errors: Arc<ErrorTranslator>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        error_sink: Arc<dyn ErrorSink>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let errors = Arc::new(ErrorTranslator::new(clock, error_sink));

        Self {
            user_commands,
            user_queries,
            errors,
        }
    }

    pub fn errors(&self) -> Arc<ErrorTranslator> {
        Arc::clone(&self.errors)
    }
}
