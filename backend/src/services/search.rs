//! Filtering and substring search over the in-memory content lists.
//!
//! Everything here is a linear scan; the lists are small enough that no index
//! is kept.

use std::cmp::Reverse;

use crate::models::{
    post::{Post, PostLink},
    project::{Project, ProjectFilter},
    search::{SearchKind, SearchResult},
    Pagination,
};
use crate::validation::rules::normalize_partial_date;

/// Queries with fewer characters than this return nothing.
pub const MIN_QUERY_CHARS: usize = 2;
/// Upper bound on the number of hits returned by [`search_content`].
pub const MAX_RESULTS: usize = 8;
/// Category label that disables the category filter.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn post_haystack(post: &Post) -> String {
    let mut parts = vec![post.title.as_str(), post.excerpt.as_str(), post.category.as_str()];
    parts.extend(post.tags.iter().map(String::as_str));
    parts.join(" ")
}

fn project_haystack(project: &Project) -> String {
    let mut parts = vec![project.title.as_str(), project.description.as_str()];
    parts.extend(project.tech_stack.iter().map(String::as_str));
    parts.push(project.role.as_str());
    parts.join(" ")
}

fn post_hit(post: &Post) -> SearchResult {
    SearchResult {
        kind: SearchKind::Post,
        id: post.id,
        title: post.title.clone(),
        description: post.excerpt.clone(),
        url: format!("/blog/{}", post.id),
        category: Some(post.category.clone()),
        tags: Some(post.tags.clone()),
        tech_stack: None,
        date: SearchResult::post_date(post.created_at),
    }
}

fn project_hit(project: &Project) -> SearchResult {
    SearchResult {
        kind: SearchKind::Project,
        id: project.id,
        title: project.title.clone(),
        description: project.description.clone(),
        url: format!("/projects/{}", project.id),
        category: None,
        tags: None,
        tech_stack: Some(project.tech_stack.clone()),
        date: project.start_date.clone(),
    }
}

/// Searches published posts and all projects for `query`.
///
/// Posts come before projects, then hits whose title contains the query are
/// moved ahead of the rest without otherwise changing the order.
pub fn search_content(posts: &[Post], projects: &[Project], query: &str) -> Vec<SearchResult> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let post_hits = posts
        .iter()
        .filter(|post| post.is_published())
        .filter(|post| contains_folded(&post_haystack(post), &needle))
        .map(post_hit);
    let project_hits = projects
        .iter()
        .filter(|project| contains_folded(&project_haystack(project), &needle))
        .map(project_hit);

    let (mut ranked, rest): (Vec<_>, Vec<_>) = post_hits
        .chain(project_hits)
        .partition(|hit| contains_folded(&hit.title, &needle));
    ranked.extend(rest);
    ranked.truncate(MAX_RESULTS);
    ranked
}

fn category_matches(post: &Post, category: Option<&str>) -> bool {
    match category.map(str::trim) {
        None | Some("") => true,
        Some(category) if category.eq_ignore_ascii_case(ALL_CATEGORIES) => true,
        Some(category) => post.category == category,
    }
}

fn term_matches(post: &Post, search: Option<&str>) -> bool {
    let term = search.map(str::trim).unwrap_or_default();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    contains_folded(&post.title, &needle) || contains_folded(&post.excerpt, &needle)
}

/// Applies the blog list filters: category, then title/excerpt search.
pub fn filter_posts(posts: &[Post], filter: &PostFilter) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| category_matches(post, filter.category.as_deref()))
        .filter(|post| term_matches(post, filter.search.as_deref()))
        .cloned()
        .collect()
}

pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| match filter {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
            ProjectFilter::Status(status) => project.status == status,
        })
        .cloned()
        .collect()
}

/// Title-only search used by the admin management lists.
pub fn search_titles<T, F>(items: Vec<T>, search: Option<&str>, title: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let term = search.map(str::trim).unwrap_or_default();
    if term.is_empty() {
        return items;
    }
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|item| contains_folded(title(item), &needle))
        .collect()
}

pub fn paginate<T>(items: Vec<T>, page: Pagination) -> Vec<T> {
    items.into_iter().skip(page.skip).take(page.limit).collect()
}

/// Newest `createdAt` first; ties fall back to the higher id.
pub fn sort_posts_newest_first(posts: &mut [Post]) {
    posts.sort_by_key(|post| Reverse((post.created_at, post.id)));
}

/// Newest start date first, compared on the normalised date.
pub fn sort_projects_newest_first(projects: &mut [Project]) {
    projects.sort_by_key(|project| {
        Reverse((normalize_partial_date(&project.start_date), project.id))
    });
}

/// Previous and next entries around `id` in the given order, or `None` when
/// `id` is not in the list.
pub fn post_neighbours(posts: &[Post], id: i64) -> Option<(Option<PostLink>, Option<PostLink>)> {
    let index = posts.iter().position(|post| post.id == id)?;
    let previous = index
        .checked_sub(1)
        .and_then(|i| posts.get(i))
        .map(PostLink::from);
    let next = posts.get(index + 1).map(PostLink::from);
    Some((previous, next))
}

/// Distinct categories in first-seen order, led by [`ALL_CATEGORIES`].
pub fn categories(posts: &[Post]) -> Vec<String> {
    let mut seen = vec![ALL_CATEGORIES.to_string()];
    for post in posts {
        if !seen.iter().any(|category| category == &post.category) {
            seen.push(post.category.clone());
        }
    }
    seen
}
