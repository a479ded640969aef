//! Client-side filtering for the list pages. The lists are already fetched, so
//! narrowing them happens in memory as the visitor types or picks a chip.

use crate::api::{Post, Project, ProjectStatus};

pub const ALL_CATEGORIES: &str = "All";

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keeps posts whose category matches (or `All`) and whose title or excerpt
/// contains `search`, ignoring case.
pub fn filter_posts(posts: &[Post], category: &str, search: &str) -> Vec<Post> {
    let search = search.trim();
    posts
        .iter()
        .filter(|post| category == ALL_CATEGORIES || post.category == category)
        .filter(|post| {
            search.is_empty()
                || contains_ignore_case(&post.title, search)
                || contains_ignore_case(&post.excerpt, search)
        })
        .cloned()
        .collect()
}

/// `All` followed by each category in first-seen order.
pub fn post_categories(posts: &[Post]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for post in posts {
        if !categories.contains(&post.category) {
            categories.push(post.category.clone());
        }
    }
    categories
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    Status(ProjectStatus),
}

impl ProjectFilter {
    pub const CHIPS: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Featured,
        ProjectFilter::Status(ProjectStatus::Completed),
        ProjectFilter::Status(ProjectStatus::InProgress),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Featured => "Featured",
            ProjectFilter::Status(status) => status.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
            ProjectFilter::Status(status) => project.status == *status,
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .cloned()
        .collect()
}

/// Title-only narrowing used by the admin management tables.
pub fn filter_by_title<T: Clone>(items: &[T], search: &str, title: impl Fn(&T) -> &str) -> Vec<T> {
    let search = search.trim();
    items
        .iter()
        .filter(|item| search.is_empty() || contains_ignore_case(title(item), search))
        .cloned()
        .collect()
}
