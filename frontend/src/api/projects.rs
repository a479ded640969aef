use super::{
    client::ApiClient,
    posts::search_pairs,
    types::{ApiError, Project, ProjectPayload},
};

/// Query string for the public project list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectQuery {
    /// `featured` or a status name; `None` or `all` lists everything.
    pub filter: Option<String>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl ProjectQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = self
            .filter
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty() && !f.eq_ignore_ascii_case("all"))
        {
            pairs.push(("filter", filter.to_string()));
        }
        if let Some(skip) = self.skip.filter(|skip| *skip > 0) {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

impl ApiClient {
    pub async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, ApiError> {
        let url = self.url("/projects").await;
        self.send_json(self.http_client().get(url).query(&query.to_pairs()))
            .await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, ApiError> {
        let url = self.url(&format!("/projects/{id}")).await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn admin_list_projects(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<Project>, ApiError> {
        let url = self.url("/admin/projects").await;
        self.send_json(self.http_client().get(url).query(&search_pairs(search)))
            .await
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> Result<Project, ApiError> {
        let url = self.url("/admin/projects").await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn update_project(
        &self,
        id: i64,
        payload: &ProjectPayload,
    ) -> Result<Project, ApiError> {
        let url = self.url(&format!("/admin/projects/{id}")).await;
        self.send_json(self.http_client().put(url).json(payload))
            .await
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/admin/projects/{id}")).await;
        self.send_empty(self.http_client().delete(url)).await
    }
}
