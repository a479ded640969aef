use crate::api::{
    collect_pages, ApiClient, ApiError, Post, PostDetail, PostQuery, PostView, PAGE_LIMIT,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct BlogRepository {
    client: Rc<ApiClient>,
}

impl BlogRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(Rc::new(leptos::use_context::<ApiClient>().unwrap_or_default()))
    }

    /// Every published post; the list page filters them locally.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let client = Rc::clone(&self.client);
        collect_pages(move |skip| {
            let client = Rc::clone(&client);
            async move {
                let query = PostQuery {
                    skip: Some(skip),
                    limit: Some(PAGE_LIMIT),
                    ..PostQuery::default()
                };
                client.list_posts(&query).await
            }
        })
        .await
    }

    pub async fn fetch_recent(&self, limit: usize) -> Result<Vec<Post>, ApiError> {
        let query = PostQuery {
            limit: Some(limit),
            ..PostQuery::default()
        };
        self.client.list_posts(&query).await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<String>, ApiError> {
        self.client.get_post_categories().await
    }

    pub async fn fetch_post(&self, id: i64) -> Result<PostDetail, ApiError> {
        self.client.get_post(id).await
    }

    pub async fn record_view(&self, id: i64) -> Result<PostView, ApiError> {
        self.client.record_post_view(id).await
    }
}
