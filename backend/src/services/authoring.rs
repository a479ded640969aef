//! Turning editor payloads into stored posts and projects.

use chrono::NaiveDate;

use crate::{
    error::AppError,
    models::{
        post::{CreatePostRequest, Post, UpdatePostRequest},
        project::{CreateProjectRequest, Project, UpdateProjectRequest},
    },
    validation::rules::normalize_partial_date,
};

const WORDS_PER_MINUTE: usize = 200;

/// Minutes needed to read `content`, never less than one.
pub fn estimate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Trims labels and drops blanks and repeats, keeping the first occurrence.
pub fn normalize_labels(labels: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.trim();
        if !label.is_empty() && !kept.iter().any(|existing| existing == label) {
            kept.push(label.to_string());
        }
    }
    kept
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn new_post(payload: CreatePostRequest, today: NaiveDate) -> Post {
    let read_time = payload.content.as_deref().map_or(1, estimate_read_time);
    Post {
        id: 0,
        title: payload.title.trim().to_string(),
        excerpt: payload.excerpt.trim().to_string(),
        content: payload.content,
        cover_image: payload.cover_image,
        category: payload.category.trim().to_string(),
        tags: normalize_labels(payload.tags),
        created_at: today,
        read_time,
        view_count: Some(0),
        published: Some(payload.published),
    }
}

/// Applies a partial update; the read time follows a changed body.
pub fn apply_post_update(post: &mut Post, payload: UpdatePostRequest) {
    if let Some(title) = payload.title {
        post.title = title.trim().to_string();
    }
    if let Some(excerpt) = payload.excerpt {
        post.excerpt = excerpt.trim().to_string();
    }
    if let Some(content) = payload.content {
        post.read_time = estimate_read_time(&content);
        post.content = Some(content);
    }
    if let Some(cover_image) = payload.cover_image {
        post.cover_image = cover_image;
    }
    if let Some(category) = payload.category {
        post.category = category.trim().to_string();
    }
    if let Some(tags) = payload.tags {
        post.tags = normalize_labels(tags);
    }
    if let Some(published) = payload.published {
        post.published = Some(published);
    }
}

/// Rejects an end date that precedes the start date.
pub fn check_date_range(start: &str, end: Option<&str>) -> Result<(), AppError> {
    let Some(end) = end else {
        return Ok(());
    };
    match (normalize_partial_date(start), normalize_partial_date(end)) {
        (Some(start), Some(end)) if end < start => Err(AppError::BadRequest(
            "endDate must not be before startDate".into(),
        )),
        _ => Ok(()),
    }
}

pub fn new_project(payload: CreateProjectRequest) -> Result<Project, AppError> {
    let end_date = blank_to_none(payload.end_date);
    check_date_range(&payload.start_date, end_date.as_deref())?;
    Ok(Project {
        id: 0,
        title: payload.title.trim().to_string(),
        description: payload.description.trim().to_string(),
        detail_content: blank_to_none(payload.detail_content),
        thumbnail: payload.thumbnail,
        images: payload.images.map(normalize_labels),
        tech_stack: normalize_labels(payload.tech_stack),
        role: payload.role.trim().to_string(),
        team_size: payload.team_size,
        github_url: blank_to_none(payload.github_url),
        live_url: blank_to_none(payload.live_url),
        start_date: payload.start_date.trim().to_string(),
        end_date,
        status: payload.status,
        featured: payload.featured,
    })
}

pub fn apply_project_update(
    project: &mut Project,
    payload: UpdateProjectRequest,
) -> Result<(), AppError> {
    if let Some(title) = payload.title {
        project.title = title.trim().to_string();
    }
    if let Some(description) = payload.description {
        project.description = description.trim().to_string();
    }
    if let Some(detail_content) = payload.detail_content {
        project.detail_content = blank_to_none(Some(detail_content));
    }
    if let Some(thumbnail) = payload.thumbnail {
        project.thumbnail = thumbnail;
    }
    if let Some(images) = payload.images {
        project.images = Some(normalize_labels(images));
    }
    if let Some(tech_stack) = payload.tech_stack {
        project.tech_stack = normalize_labels(tech_stack);
    }
    if let Some(role) = payload.role {
        project.role = role.trim().to_string();
    }
    if let Some(team_size) = payload.team_size {
        project.team_size = team_size;
    }
    if let Some(github_url) = payload.github_url {
        project.github_url = blank_to_none(Some(github_url));
    }
    if let Some(live_url) = payload.live_url {
        project.live_url = blank_to_none(Some(live_url));
    }
    if let Some(start_date) = payload.start_date {
        project.start_date = start_date.trim().to_string();
    }
    if let Some(end_date) = payload.end_date {
        project.end_date = blank_to_none(Some(end_date));
    }
    if let Some(status) = payload.status {
        project.status = status;
    }
    if let Some(featured) = payload.featured {
        project.featured = featured;
    }
    check_date_range(&project.start_date, project.end_date.as_deref())
}
