use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{error::AppError, models::profile::Profile};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self) -> Result<Profile, AppError>;

    /// Replaces the whole profile.
    async fn replace(&self, profile: Profile) -> Result<Profile, AppError>;
}

pub struct InMemoryProfileRepository {
    profile: RwLock<Profile>,
}

impl InMemoryProfileRepository {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self) -> Result<Profile, AppError> {
        Ok(self.profile.read().await.clone())
    }

    async fn replace(&self, profile: Profile) -> Result<Profile, AppError> {
        let mut current = self.profile.write().await;
        *current = profile;
        Ok(current.clone())
    }
}
