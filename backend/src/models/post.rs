//! Blog post records and the payloads used to author them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::rules::validate_labels;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// A blog article as held by the store.
pub struct Post {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    /// Markdown body. Only returned by the detail endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub cover_image: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: NaiveDate,
    /// Estimated read time in minutes.
    pub read_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl Post {
    /// Posts without an explicit flag predate drafts and count as published.
    pub fn is_published(&self) -> bool {
        self.published.unwrap_or(true)
    }

    pub fn views(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// List representation of a post; the body is left out.
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub cover_image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: NaiveDate,
    pub read_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            cover_image: post.cover_image.clone(),
            category: post.category.clone(),
            tags: post.tags.clone(),
            created_at: post.created_at,
            read_time: post.read_time,
            view_count: post.view_count,
            published: post.published,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
/// Title and id of a neighbouring post, used for previous/next links.
pub struct PostLink {
    pub id: i64,
    pub title: String,
}

impl From<&Post> for PostLink {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDetailResponse {
    pub post: Post,
    pub previous: Option<PostLink>,
    pub next: Option<PostLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostViewResponse {
    pub id: i64,
    pub view_count: u64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
/// Query string accepted by `GET /api/posts`.
pub struct PostListQuery {
    /// Exact category; `All` or empty disables the filter.
    pub category: Option<String>,
    /// Case-insensitive term matched against title and excerpt.
    pub search: Option<String>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
/// Query string accepted by the admin list endpoints.
pub struct TitleSearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 300))]
    pub excerpt: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image: String,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    #[serde(default)]
    #[validate(custom(function = "validate_labels"))]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Partial update; absent fields keep their current value.
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 300))]
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
    #[validate(custom(function = "validate_labels"))]
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}
