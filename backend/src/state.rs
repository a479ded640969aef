use std::sync::Arc;

use chrono::Utc;

use crate::{
    config::Config,
    models::{post::Post, project::Project, user::User},
    repositories::{
        InMemoryProfileRepository, InMemoryUserRepository, PostTable, ProfileRepository,
        ProjectTable, Repository, UserRepository,
    },
    seed,
    utils::password::hash_password,
};

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn Repository<Post>>,
    pub projects: Arc<dyn Repository<Project>>,
    pub users: Arc<dyn UserRepository>,
    pub profile: Arc<dyn ProfileRepository>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn Repository<Post>>,
        projects: Arc<dyn Repository<Project>>,
        users: Arc<dyn UserRepository>,
        profile: Arc<dyn ProfileRepository>,
        config: Config,
    ) -> Self {
        Self {
            posts,
            projects,
            users,
            profile,
            config,
        }
    }

    /// Store loaded with the mock content and the configured admin account.
    pub async fn seeded(config: Config) -> anyhow::Result<Self> {
        let users = InMemoryUserRepository::new();
        users
            .create(User {
                id: 0,
                username: config.admin_username.clone(),
                email: config.admin_email.clone(),
                password_hash: hash_password(&config.admin_password)?,
                is_active: true,
                is_superuser: true,
                created_at: Utc::now(),
            })
            .await
            .map_err(|err| anyhow::anyhow!("failed to seed admin account: {err:?}"))?;

        Ok(Self::new(
            Arc::new(PostTable::with_rows(seed::posts())),
            Arc::new(ProjectTable::with_rows(seed::projects())),
            Arc::new(users),
            Arc::new(InMemoryProfileRepository::new(seed::profile())),
            config,
        ))
    }
}
