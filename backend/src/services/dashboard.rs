use crate::models::{dashboard::DashboardStats, post::{Post, PostSummary}, project::Project};

use super::search::{sort_posts_newest_first, sort_projects_newest_first};

pub const RECENT_LIMIT: usize = 5;

/// Totals count drafts too and views are summed over every post. The recent
/// list only shows published posts.
pub fn build_stats(mut posts: Vec<Post>, mut projects: Vec<Project>) -> DashboardStats {
    let total_views = posts.iter().map(Post::views).sum();
    sort_posts_newest_first(&mut posts);
    sort_projects_newest_first(&mut projects);

    DashboardStats {
        total_posts: posts.len(),
        total_projects: projects.len(),
        total_views,
        recent_posts: posts
            .iter()
            .filter(|post| post.is_published())
            .take(RECENT_LIMIT)
            .map(PostSummary::from)
            .collect(),
        recent_projects: projects.into_iter().take(RECENT_LIMIT).collect(),
    }
}
