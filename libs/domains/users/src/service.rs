use chrono::Local;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, RegisterResult, RegisterUser, User};
use crate::repository::UserRepository;

/// Service layer for registration and user lookups
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Register a user unless the email is already taken.
    ///
    /// The check and the insert are separate store calls, so two concurrent
    /// registrations of one email can both succeed.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterUser) -> UserResult<RegisterResult> {
        if self.repository.find_by_email(&input.email).await?.is_some() {
            tracing::info!("Registration rejected: email already exists");
            return Err(UserError::DuplicateEmail(input.email));
        }

        let user = NewUser::from_registration(input, &Local::now());
        let id = self.repository.insert(user).await?;

        Ok(RegisterResult {
            acknowledged: true,
            inserted_id: id.to_hex(),
        })
    }

    #[instrument(skip(self))]
    pub async fn email_exists(&self, email: &str) -> UserResult<bool> {
        Ok(self.repository.find_by_email(email).await?.is_some())
    }

    /// Unknown emails are simply not admins.
    #[instrument(skip(self))]
    pub async fn is_admin(&self, email: &str) -> UserResult<bool> {
        let user = self.repository.find_by_email(email).await?;
        Ok(user.is_some_and(|u| u.is_admin()))
    }
}
