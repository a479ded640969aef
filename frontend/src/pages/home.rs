use crate::{
    api::{Post, Project},
    components::{
        cards::{PostCard, ProjectCard},
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    pages::{blog::repository::BlogRepository, projects::repository::ProjectsRepository},
};
use leptos::*;

pub const RECENT_POST_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let blog = BlogRepository::from_context();
    let projects = ProjectsRepository::from_context();
    let recent_posts = create_resource(|| (), move |_| {
        let blog = blog.clone();
        async move { blog.fetch_recent(RECENT_POST_COUNT).await }
    });
    let featured = create_resource(|| (), move |_| {
        let projects = projects.clone();
        async move { projects.fetch_featured().await }
    });

    view! {
        <Layout>
            <Hero />
            <section class="mt-16 space-y-6">
                <SectionHeading title="Featured projects" href="/projects" />
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        featured
                            .get()
                            .map(|result| match result {
                                Ok(projects) => view! { <FeaturedProjects projects=projects /> }.into_view(),
                                Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            })
                    }}
                </Suspense>
            </section>
            <section class="mt-16 space-y-6">
                <SectionHeading title="Recent posts" href="/blog" />
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        recent_posts
                            .get()
                            .map(|result| match result {
                                Ok(posts) => view! { <RecentPosts posts=posts /> }.into_view(),
                                Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            })
                    }}
                </Suspense>
            </section>
        </Layout>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="py-16 text-center">
            <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">"Devlog"</h1>
            <p class="mt-4 max-w-2xl mx-auto text-lg text-fg-muted">
                "A developer's notebook: posts on what I learn and the projects I build."
            </p>
            <div class="mt-8 flex justify-center gap-4">
                <a href="/blog" class="px-6 py-3 rounded-md font-medium bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover">
                    "Read the blog"
                </a>
                <a href="/projects" class="px-6 py-3 rounded-md font-medium border border-border text-fg hover:bg-surface-muted">
                    "See projects"
                </a>
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(title: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-baseline justify-between">
            <h2 class="text-2xl font-bold text-fg">{title}</h2>
            <a href=href class="text-sm text-action-primary-bg hover:underline">"View all →"</a>
        </div>
    }
}

#[component]
pub fn FeaturedProjects(projects: Vec<Project>) -> impl IntoView {
    if projects.is_empty() {
        return view! { <EmptyState title="No featured projects yet" /> }.into_view();
    }
    view! {
        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
            {projects.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
        </div>
    }
    .into_view()
}

#[component]
pub fn RecentPosts(posts: Vec<Post>) -> impl IntoView {
    if posts.is_empty() {
        return view! { <EmptyState title="No posts yet" /> }.into_view();
    }
    view! {
        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
            {posts.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ProjectStatus;
    use crate::test_support::helpers::{sample_post, sample_project};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn hero_links_to_blog_and_projects() {
        let html = render_to_string(|| view! { <Hero /> });
        assert!(html.contains("href=\"/blog\""));
        assert!(html.contains("href=\"/projects\""));
    }

    #[test]
    fn sections_render_cards_or_empty_states() {
        let html = render_to_string(|| {
            view! {
                <FeaturedProjects projects=vec![sample_project(1, "Devlog", ProjectStatus::InProgress, true)] />
                <RecentPosts posts=Vec::new() />
            }
        });
        assert!(html.contains("href=\"/projects/1\""));
        assert!(html.contains("No posts yet"));

        let html = render_to_string(|| {
            view! { <RecentPosts posts=vec![sample_post(5, "Async Rust", "Backend")] /> }
        });
        assert!(html.contains("href=\"/blog/5\""));
    }
}
