//! Resolve Token Use Case
//!
//! Maps a bearer token to the stored user it names.

use std::sync::Arc;

use crate::application::access_token::AccessTokenIssuer;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

pub struct ResolveTokenUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    issuer: AccessTokenIssuer,
}

impl<U> ResolveTokenUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            issuer: AccessTokenIssuer::new(config),
        }
    }

    /// `InvalidToken` for a bad token, `UnknownUser` for a good token
    /// whose subject is gone
    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let subject = self.issuer.verify(token)?;

        self.user_repo
            .find_by_user_name(&UserName::from_canonical(subject))
            .await?
            .ok_or(AuthError::UnknownUser)
    }
}
