//! Portfolio project records and their filters.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::rules::{
    validate_end_date, validate_labels, validate_link, validate_partial_date,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project status `{0}`")]
pub struct UnknownStatus(pub String);

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| UnknownStatus(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// A portfolio entry as held by the store.
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_content: Option<String>,
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// `YYYY-MM` or `YYYY-MM-DD`.
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub status: ProjectStatus,
    pub featured: bool,
}

/// Selection offered by the project list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    Status(ProjectStatus),
}

impl FromStr for ProjectFilter {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(ProjectFilter::All),
            "featured" => Ok(ProjectFilter::Featured),
            _ => raw.parse().map(ProjectFilter::Status),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
/// Query string accepted by `GET /api/projects`.
pub struct ProjectListQuery {
    /// `all`, `featured`, `completed`, `in-progress` or `archived`.
    pub filter: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 500))]
    pub description: String,
    #[serde(default)]
    pub detail_content: Option<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    #[validate(custom(function = "validate_labels"))]
    pub tech_stack: Vec<String>,
    #[validate(length(min = 1, max = 100))]
    pub role: String,
    #[validate(range(min = 1))]
    pub team_size: Option<u32>,
    #[validate(custom(function = "validate_link"))]
    pub github_url: Option<String>,
    #[validate(custom(function = "validate_link"))]
    pub live_url: Option<String>,
    #[validate(custom(function = "validate_partial_date"))]
    pub start_date: String,
    #[validate(custom(function = "validate_end_date"))]
    pub end_date: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Partial update; absent fields keep their current value. A blank string
/// clears an optional text field.
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,
    pub detail_content: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Option<Vec<String>>,
    #[validate(custom(function = "validate_labels"))]
    pub tech_stack: Option<Vec<String>>,
    #[validate(length(min = 1, max = 100))]
    pub role: Option<String>,
    /// `null` clears the team size.
    #[serde(
        default,
        deserialize_with = "super::deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<u32>)]
    #[validate(range(min = 1))]
    pub team_size: Option<Option<u32>>,
    #[validate(custom(function = "validate_link"))]
    pub github_url: Option<String>,
    #[validate(custom(function = "validate_link"))]
    pub live_url: Option<String>,
    #[validate(custom(function = "validate_partial_date"))]
    pub start_date: Option<String>,
    #[validate(custom(function = "validate_end_date"))]
    pub end_date: Option<String>,
    pub status: Option<ProjectStatus>,
    pub featured: Option<bool>,
}
