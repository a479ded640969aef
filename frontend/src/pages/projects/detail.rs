use super::repository::ProjectsRepository;
use crate::{
    api::Project,
    components::{
        cards::{StatusBadge, TagList},
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::{
        markdown::{parse_blocks, Block},
        navigation::use_route_id,
    },
};
use leptos::*;

pub fn team_size_label(team_size: Option<u32>) -> Option<String> {
    team_size.map(|size| match size {
        1 => "Solo".to_string(),
        n => format!("Team of {n}"),
    })
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let project_id = use_route_id();
    let repo = ProjectsRepository::from_context();
    let project = create_resource(
        move || project_id.get(),
        move |id| {
            let repo = repo.clone();
            async move {
                match id {
                    Some(id) => repo.fetch_project(id).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );

    view! {
        <Layout>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    project
                        .get()
                        .map(|result| match result {
                            Ok(Some(project)) => view! { <ProjectArticle project=project /> }.into_view(),
                            Ok(None) => view! { <ProjectNotFound /> }.into_view(),
                            Err(err) if err.is_not_found() => view! { <ProjectNotFound /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                }}
            </Suspense>
        </Layout>
    }
}

#[component]
pub fn ProjectNotFound() -> impl IntoView {
    view! {
        <div class="py-24 text-center">
            <h1 class="text-2xl font-bold text-fg">"Project not found"</h1>
            <a href="/projects" class="mt-6 inline-block text-action-primary-bg hover:underline">"Back to projects"</a>
        </div>
    }
}

#[component]
pub fn ProjectArticle(project: Project) -> impl IntoView {
    let period = project.period();
    let team = team_size_label(project.team_size);
    let body = project
        .detail_content
        .as_deref()
        .map(parse_blocks)
        .unwrap_or_default();
    let images = project.images.clone().unwrap_or_default();

    view! {
        <article class="max-w-4xl mx-auto space-y-8">
            <a href="/projects" class="text-sm text-fg-muted hover:text-fg">"← All projects"</a>
            <header class="space-y-3">
                <StatusBadge status=project.status />
                <h1 class="text-4xl font-bold text-fg">{project.title.clone()}</h1>
                <p class="text-lg text-fg-muted">{project.description.clone()}</p>
            </header>
            <dl class="grid grid-cols-2 gap-4 md:grid-cols-4 text-sm">
                <div>
                    <dt class="text-fg-muted">"Role"</dt>
                    <dd class="font-medium text-fg">{project.role.clone()}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"Period"</dt>
                    <dd class="font-medium text-fg">{period}</dd>
                </div>
                {team.map(|team| view! {
                    <div>
                        <dt class="text-fg-muted">"Team"</dt>
                        <dd class="font-medium text-fg">{team}</dd>
                    </div>
                })}
            </dl>
            <div class="flex gap-4">
                {project.github_url.clone().map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer" class="text-action-primary-bg hover:underline">"GitHub"</a>
                })}
                {project.live_url.clone().map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer" class="text-action-primary-bg hover:underline">"Live demo"</a>
                })}
            </div>
            <TagList tags=project.tech_stack.clone() />
            <div class="space-y-4 text-fg">
                {body
                    .into_iter()
                    .map(|block| match block {
                        Block::Heading { text, .. } => view! { <h2 class="text-2xl font-bold mt-6">{text}</h2> }.into_view(),
                        Block::Code { body, .. } => view! {
                            <pre class="overflow-x-auto rounded-lg bg-surface-muted p-4 text-sm"><code>{body}</code></pre>
                        }
                        .into_view(),
                        Block::List(items) => view! {
                            <ul class="list-disc pl-6">
                                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view(),
                        Block::Paragraph(text) => view! { <p class="leading-7">{text}</p> }.into_view(),
                    })
                    .collect_view()}
            </div>
            <div class="grid gap-4 md:grid-cols-2">
                {images
                    .into_iter()
                    .map(|src| view! { <img src=src alt="" class="rounded-lg object-cover" loading="lazy" /> })
                    .collect_view()}
            </div>
        </article>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ProjectStatus;
    use crate::test_support::helpers::sample_project;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn article_shows_period_links_and_body() {
        let html = render_to_string(|| {
            let mut project = sample_project(3, "Devlog", ProjectStatus::Completed, false);
            project.end_date = Some("2025-12".into());
            project.team_size = Some(3);
            project.detail_content = Some("## Goals\n\nShip it.".into());
            view! { <ProjectArticle project=project /> }
        });
        assert!(html.contains("2025-10 ~ 2025-12"));
        assert!(html.contains("Team of 3"));
        assert!(html.contains("https://github.com/example/devlog"));
        assert!(!html.contains("Live demo"));
        assert!(html.contains("Goals"));
        assert!(html.contains("Ship it."));
    }

    #[test]
    fn not_found_links_back_to_the_list() {
        let html = render_to_string(|| view! { <ProjectNotFound /> });
        assert!(html.contains("Project not found"));
        assert!(html.contains("href=\"/projects\""));
    }
}
