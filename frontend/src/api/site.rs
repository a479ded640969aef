use super::{
    client::ApiClient,
    types::{ApiError, DashboardStats, Profile, SearchResult},
};

impl ApiClient {
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        let url = self.url("/search").await;
        self.send_json(self.http_client().get(url).query(&[("q", query)]))
            .await
    }

    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        let url = self.url("/profile").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn update_profile(&self, profile: &Profile) -> Result<Profile, ApiError> {
        let url = self.url("/admin/profile").await;
        self.send_json(self.http_client().put(url).json(profile))
            .await
    }

    pub async fn get_dashboard(&self) -> Result<DashboardStats, ApiError> {
        let url = self.url("/admin/dashboard").await;
        self.send_json(self.http_client().get(url)).await
    }
}
