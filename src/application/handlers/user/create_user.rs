//! CreateUserHandler - Command handler for registering users.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::domain::foundation::Timestamp;
use crate::domain::user::{NewUser, User, UserError};
use crate::ports::UserRepository;

/// Command to create a user.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: Option<String>,
}

/// Handler for creating users.
pub struct CreateUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all)]
    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<User, UserError> {
        let new_user = NewUser::new(&cmd.name, cmd.email.as_deref(), Timestamp::now())?;
        let user = self.repository.create(&new_user).await?;

        info!(user_id = %user.id(), "User created");
        Ok(user)
    }
}
