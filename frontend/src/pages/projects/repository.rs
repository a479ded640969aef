use crate::api::{collect_pages, ApiClient, ApiError, Project, ProjectQuery, PAGE_LIMIT};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProjectsRepository {
    client: Rc<ApiClient>,
}

impl ProjectsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(Rc::new(leptos::use_context::<ApiClient>().unwrap_or_default()))
    }

    /// Every project; the list page filters them locally.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.fetch_all(None).await
    }

    pub async fn fetch_featured(&self) -> Result<Vec<Project>, ApiError> {
        self.fetch_all(Some("featured")).await
    }

    async fn fetch_all(&self, filter: Option<&str>) -> Result<Vec<Project>, ApiError> {
        let client = Rc::clone(&self.client);
        let filter = filter.map(str::to_string);
        collect_pages(move |skip| {
            let client = Rc::clone(&client);
            let query = ProjectQuery {
                filter: filter.clone(),
                skip: Some(skip),
                limit: Some(PAGE_LIMIT),
            };
            async move { client.list_projects(&query).await }
        })
        .await
    }

    pub async fn fetch_project(&self, id: i64) -> Result<Project, ApiError> {
        self.client.get_project(id).await
    }
}
