use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{post::PostSummary, project::Project};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Figures shown on the admin landing page.
pub struct DashboardStats {
    pub total_posts: usize,
    pub total_projects: usize,
    pub total_views: u64,
    pub recent_posts: Vec<PostSummary>,
    pub recent_projects: Vec<Project>,
}
