//! In-memory user repository for tests

use tokio::sync::Mutex;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};
use crate::infra::postgres::{EMAIL_CONSTRAINT, USER_NAME_CONSTRAINT};

/// Enforces the same uniqueness rules as the `users` table
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub async fn user_count(&self) -> usize {
        self.users.lock().await.len()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().await;
        if users
            .iter()
            .any(|u| u.user_name.canonical() == user.user_name.canonical())
        {
            return Err(AuthError::ConstraintViolation(USER_NAME_CONSTRAINT.to_string()));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::ConstraintViolation(EMAIL_CONSTRAINT.to_string()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|u| u.user_name.canonical() == user_name.canonical())
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self.find_by_user_name(user_name).await?.is_some())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.users.lock().await.iter().any(|u| &u.email == email))
    }
}
