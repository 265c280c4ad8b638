//! User Entity
//!
//! A registered account. Created on registration and read on login and
//! token resolution; never mutated afterwards.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique, compared case-insensitively through its canonical form
    pub user_name: UserName,
    /// Unique
    pub email: Email,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: UserName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Value written into the `sub` claim of access tokens
    pub fn token_subject(&self) -> &str {
        self.user_name.canonical()
    }
}
