//! Login Use Case
//!
//! Checks a user name and password and issues an access token.
//! Unknown names and wrong passwords fail identically.

use std::sync::Arc;

use crate::application::access_token::{AccessTokenIssuer, IssuedToken};
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<IssuedToken> {
        let raw_password = RawPassword::for_login(input.password);

        // A name that could never have registered is treated like an unknown one
        let user = match UserName::new(&input.user_name) {
            Ok(user_name) => self.user_repo.find_by_user_name(&user_name).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            raw_password.verify_against_nothing(self.config.pepper());
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = AccessTokenIssuer::new(self.config.clone()).issue(user.token_subject())?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::application::test_fixtures;

    async fn registered() -> LoginUseCase<crate::infra::memory::InMemoryUserRepository> {
        let repo = test_fixtures::repo();
        let config = test_fixtures::config();
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(RegisterInput {
                user_name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "home row warrior".to_string(),
            })
            .await
            .unwrap();
        LoginUseCase::new(repo, config)
    }

    fn login(user_name: &str, password: &str) -> LoginInput {
        LoginInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user() {
        let use_case = registered().await;
        let issued = use_case
            .execute(login("alice", "home row warrior"))
            .await
            .unwrap();

        assert_eq!(issued.expires_in, 3600);
        let subject = AccessTokenIssuer::new(test_fixtures::config())
            .verify(&issued.token)
            .unwrap();
        assert_eq!(subject, "alice");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_fail_alike() {
        let use_case = registered().await;

        let wrong_password = use_case
            .execute(login("alice", "home row warrior!"))
            .await
            .unwrap_err();
        let unknown_user = use_case
            .execute(login("mallory", "home row warrior"))
            .await
            .unwrap_err();
        let unparseable = use_case
            .execute(login("", "home row warrior"))
            .await
            .unwrap_err();

        for err in [&wrong_password, &unknown_user, &unparseable] {
            assert!(matches!(err, AuthError::InvalidCredentials));
        }
        assert_eq!(
            wrong_password.to_app_error().message(),
            unknown_user.to_app_error().message()
        );
    }
}
