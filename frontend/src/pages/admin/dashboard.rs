use super::{layout::AdminLayout, repository::AdminRepository};
use crate::{
    api::DashboardStats,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::format::{format_count, format_date},
};
use leptos::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let repo = AdminRepository::from_context();
    let stats = create_resource(|| (), move |_| {
        let repo = repo.clone();
        async move { repo.dashboard().await }
    });

    view! {
        <AdminLayout title="Dashboard">
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(stats) => view! { <DashboardView stats=stats /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                }}
            </Suspense>
        </AdminLayout>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-5">
            <dt class="text-sm text-fg-muted">{label}</dt>
            <dd class="mt-1 text-3xl font-semibold text-fg">{value}</dd>
        </div>
    }
}

#[component]
pub fn DashboardView(stats: DashboardStats) -> impl IntoView {
    let DashboardStats {
        total_posts,
        total_projects,
        total_views,
        recent_posts,
        recent_projects,
    } = stats;

    view! {
        <dl class="grid gap-4 sm:grid-cols-3">
            <StatCard label="Posts" value=format_count(total_posts as u64) />
            <StatCard label="Projects" value=format_count(total_projects as u64) />
            <StatCard label="Total views" value=format_count(total_views) />
        </dl>
        <div class="flex gap-3">
            <a href="/admin/posts/new" class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text">"New post"</a>
            <a href="/admin/projects/new" class="rounded-md border border-border px-4 py-2 text-sm font-semibold text-fg">"New project"</a>
        </div>
        <div class="grid gap-6 lg:grid-cols-2">
            <section class="space-y-3">
                <h2 class="text-lg font-semibold text-fg">"Recent posts"</h2>
                {if recent_posts.is_empty() {
                    view! { <EmptyState title="No posts yet" action_href="/admin/posts/new" action_label="Write one" /> }.into_view()
                } else {
                    view! {
                        <ul class="divide-y divide-border rounded-lg border border-border">
                            {recent_posts
                                .into_iter()
                                .map(|post| view! {
                                    <li class="flex items-center justify-between px-4 py-3">
                                        <a href=format!("/admin/posts/{}/edit", post.id) class="font-medium text-fg hover:underline">
                                            {post.title}
                                        </a>
                                        <span class="text-xs text-fg-muted">{format_date(post.created_at)}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_view()
                }}
            </section>
            <section class="space-y-3">
                <h2 class="text-lg font-semibold text-fg">"Recent projects"</h2>
                <ul class="divide-y divide-border rounded-lg border border-border">
                    {recent_projects
                        .into_iter()
                        .map(|project| view! {
                            <li class="flex items-center justify-between px-4 py-3">
                                <a href=format!("/admin/projects/{}/edit", project.id) class="font-medium text-fg hover:underline">
                                    {project.title.clone()}
                                </a>
                                <span class="text-xs text-fg-muted">{project.status.label()}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ProjectStatus;
    use crate::test_support::helpers::{sample_post, sample_project};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_shows_counts_and_recent_items() {
        let html = render_to_string(|| {
            let stats = DashboardStats {
                total_posts: 12,
                total_projects: 4,
                total_views: 15230,
                recent_posts: vec![
                    sample_post(1, "Async Rust", "Backend"),
                    sample_post(2, "Leptos signals", "Frontend"),
                ],
                recent_projects: vec![sample_project(3, "Devlog", ProjectStatus::InProgress, true)],
            };
            view! { <DashboardView stats=stats /> }
        });
        assert!(html.contains("15,230"));
        assert!(html.contains("href=\"/admin/posts/1/edit\""));
        assert!(html.contains("href=\"/admin/posts/2/edit\""));
        assert!(html.contains("Oct 10, 2025"));
        assert!(html.contains("href=\"/admin/projects/3/edit\""));
    }

    #[test]
    fn dashboard_without_posts_offers_to_write_one() {
        let html = render_to_string(|| {
            let stats = DashboardStats {
                total_posts: 0,
                total_projects: 0,
                total_views: 0,
                recent_posts: Vec::new(),
                recent_projects: Vec::new(),
            };
            view! { <DashboardView stats=stats /> }
        });
        assert!(html.contains("No posts yet"));
    }
}
