use crate::api::{
    ApiClient, ApiError, DashboardStats, Post, PostPayload, Profile, Project, ProjectPayload,
};
use std::rc::Rc;

/// Admin-only endpoints. Every call carries the stored bearer token.
#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(Rc::new(leptos::use_context::<ApiClient>().unwrap_or_default()))
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        self.client.get_dashboard().await
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.client.admin_list_posts(None).await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.client.admin_get_post(id).await
    }

    /// Creates when `id` is `None`, otherwise replaces the post.
    pub async fn save_post(&self, id: Option<i64>, payload: PostPayload) -> Result<Post, ApiError> {
        match id {
            Some(id) => self.client.update_post(id, &payload).await,
            None => self.client.create_post(&payload).await,
        }
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_post(id).await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.client.admin_list_projects(None).await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, ApiError> {
        self.client.get_project(id).await
    }

    pub async fn save_project(
        &self,
        id: Option<i64>,
        payload: ProjectPayload,
    ) -> Result<Project, ApiError> {
        match id {
            Some(id) => self.client.update_project(id, &payload).await,
            None => self.client.create_project(&payload).await,
        }
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_project(id).await
    }

    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.client.get_profile().await
    }

    pub async fn update_profile(&self, profile: Profile) -> Result<Profile, ApiError> {
        self.client.update_profile(&profile).await
    }
}
