//! User repository trait for dependency injection and testing.
//!
//! The trait can be mocked with mockall; use `MockUserRepository` in tests.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::user::User;

use super::repository::{MemoryTable, Record};

pub const EMAIL_TAKEN: &str = "Email already registered";
pub const USERNAME_TAKEN: &str = "Username already taken";

impl Record for User {
    const LABEL: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Find user by email, ignoring ASCII case
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Create a new user; the id is assigned by the repository. A taken
    /// email or username is a `Conflict`.
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// Accounts held in process memory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: MemoryTable<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.table.find_first(|user| user.id == id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .table
            .find_first(|user| user.email.eq_ignore_ascii_case(email))
            .await)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .table
            .find_first(|user| user.username == username)
            .await)
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        self.table
            .create_unless(user, |existing, new| {
                if existing.email.eq_ignore_ascii_case(&new.email) {
                    Some(AppError::Conflict(EMAIL_TAKEN.into()))
                } else if existing.username == new.username {
                    Some(AppError::Conflict(USERNAME_TAKEN.into()))
                } else {
                    None
                }
            })
            .await
    }
}
