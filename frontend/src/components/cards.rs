use crate::{
    api::{Post, Project, ProjectStatus},
    utils::format::{format_count, format_date, format_read_time},
};
use leptos::*;

#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .into_iter()
                .map(|tag| view! {
                    <span class="text-xs px-2 py-1 rounded-full bg-surface-muted text-fg-muted">{tag}</span>
                })
                .collect_view()}
        </div>
    }
}

pub fn status_badge_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "bg-status-success-bg text-status-success-text",
        ProjectStatus::InProgress => "bg-status-info-bg text-status-info-text",
        ProjectStatus::Archived => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn StatusBadge(status: ProjectStatus) -> impl IntoView {
    view! {
        <span class=format!("text-xs font-semibold px-2 py-1 rounded {}", status_badge_class(status))>
            {status.label()}
        </span>
    }
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/blog/{}", post.id);
    let views = post.view_count.map(format_count);
    view! {
        <article class="flex flex-col overflow-hidden rounded-lg border border-border bg-surface-elevated shadow-sm hover:shadow-md transition-shadow">
            <a href=href.clone()>
                <img src=post.cover_image.clone() alt=post.title.clone() class="h-48 w-full object-cover" loading="lazy" />
            </a>
            <div class="flex flex-1 flex-col gap-3 p-5">
                <span class="text-xs font-semibold uppercase text-action-primary-bg">{post.category.clone()}</span>
                <a href=href>
                    <h3 class="text-lg font-bold text-fg hover:underline">{post.title.clone()}</h3>
                </a>
                <p class="text-sm text-fg-muted line-clamp-3">{post.excerpt.clone()}</p>
                <TagList tags=post.tags.clone() />
                <div class="mt-auto flex items-center gap-3 text-xs text-fg-muted">
                    <span>{format_date(post.created_at)}</span>
                    <span>{format_read_time(post.read_time)}</span>
                    {views.map(|count| view! { <span>{format!("{count} views")}</span> })}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let featured = project.featured;
    view! {
        <article class="flex flex-col overflow-hidden rounded-lg border border-border bg-surface-elevated shadow-sm hover:shadow-md transition-shadow">
            <a href=href.clone()>
                <img src=project.thumbnail.clone() alt=project.title.clone() class="h-48 w-full object-cover" loading="lazy" />
            </a>
            <div class="flex flex-1 flex-col gap-3 p-5">
                <div class="flex items-center justify-between">
                    <StatusBadge status=project.status />
                    <Show when=move || featured>
                        <span class="text-xs font-semibold text-status-warning-text">"Featured"</span>
                    </Show>
                </div>
                <a href=href>
                    <h3 class="text-lg font-bold text-fg hover:underline">{project.title.clone()}</h3>
                </a>
                <p class="text-sm text-fg-muted line-clamp-3">{project.description.clone()}</p>
                <TagList tags=project.tech_stack.clone() />
                <div class="mt-auto text-xs text-fg-muted">{project.period()}</div>
            </div>
        </article>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{sample_post, sample_project};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn post_card_links_to_detail() {
        let html = render_to_string(|| {
            view! { <PostCard post=sample_post(7, "Leptos signals", "Frontend") /> }
        });
        assert!(html.contains("href=\"/blog/7\""));
        assert!(html.contains("Leptos signals"));
        assert!(html.contains("4 min read"));
        assert!(html.contains("120 views"));
    }

    #[test]
    fn project_card_shows_status_and_featured_flag() {
        let html = render_to_string(|| {
            view! { <ProjectCard project=sample_project(2, "Shop", ProjectStatus::Completed, true) /> }
        });
        assert!(html.contains("href=\"/projects/2\""));
        assert!(html.contains("Completed"));
        assert!(html.contains("Featured"));
        assert!(html.contains("2025-10 ~ present"));
    }
}
