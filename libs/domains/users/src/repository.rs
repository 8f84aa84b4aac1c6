use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::UserResult;
use crate::models::{NewUser, User};

/// Data access for the `users` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user, in store order
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Exact, case-sensitive email match
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Insert without any uniqueness check; returns the assigned id
    async fn insert(&self, user: NewUser) -> UserResult<ObjectId>;
}
