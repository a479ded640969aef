use super::{
    client::ApiClient,
    types::{ApiError, Post, PostDetail, PostPayload, PostView},
};

/// Query string for the public post list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl PostQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category.as_ref().filter(|c| !c.trim().is_empty()) {
            pairs.push(("category", category.trim().to_string()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.trim().to_string()));
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

pub(crate) fn search_pairs(search: Option<&str>) -> Vec<(&'static str, String)> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| vec![("search", s.to_string())])
        .unwrap_or_default()
}

impl ApiClient {
    pub async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ApiError> {
        let url = self.url("/posts").await;
        self.send_json(self.http_client().get(url).query(&query.to_pairs()))
            .await
    }

    pub async fn get_post_categories(&self) -> Result<Vec<String>, ApiError> {
        let url = self.url("/posts/categories").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn get_post(&self, id: i64) -> Result<PostDetail, ApiError> {
        let url = self.url(&format!("/posts/{id}")).await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn record_post_view(&self, id: i64) -> Result<PostView, ApiError> {
        let url = self.url(&format!("/posts/{id}/view")).await;
        self.send_json(self.http_client().post(url)).await
    }

    pub async fn admin_list_posts(&self, search: Option<&str>) -> Result<Vec<Post>, ApiError> {
        let url = self.url("/admin/posts").await;
        self.send_json(self.http_client().get(url).query(&search_pairs(search)))
            .await
    }

    pub async fn admin_get_post(&self, id: i64) -> Result<Post, ApiError> {
        let url = self.url(&format!("/admin/posts/{id}")).await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create_post(&self, payload: &PostPayload) -> Result<Post, ApiError> {
        let url = self.url("/admin/posts").await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn update_post(&self, id: i64, payload: &PostPayload) -> Result<Post, ApiError> {
        let url = self.url(&format!("/admin/posts/{id}")).await;
        self.send_json(self.http_client().put(url).json(payload))
            .await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/admin/posts/{id}")).await;
        self.send_empty(self.http_client().delete(url)).await
    }
}
