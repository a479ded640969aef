use super::repository::ProjectsRepository;
use crate::{
    api::Project,
    components::{
        cards::ProjectCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::filters::{filter_projects, ProjectFilter},
};
use leptos::*;

pub fn project_count_label(count: usize) -> String {
    match count {
        1 => "1 project".to_string(),
        n => format!("{n} projects"),
    }
}

#[component]
pub fn ProjectListPage() -> impl IntoView {
    let repo = ProjectsRepository::from_context();
    let projects = create_resource(|| (), move |_| {
        let repo = repo.clone();
        async move { repo.fetch_projects().await }
    });

    view! {
        <Layout>
            <section class="mb-8">
                <h1 class="text-4xl font-bold text-fg">"Projects"</h1>
                <p class="mt-2 text-fg-muted">"Things I have built, shipped or am still building."</p>
            </section>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    projects
                        .get()
                        .map(|result| match result {
                            Ok(projects) => view! { <ProjectList projects=projects /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                }}
            </Suspense>
        </Layout>
    }
}

#[component]
pub fn ProjectList(
    projects: Vec<Project>,
    #[prop(optional)] initial_filter: ProjectFilter,
) -> impl IntoView {
    let projects = store_value(projects);
    let filter = create_rw_signal(initial_filter);
    let visible = create_memo(move |_| projects.with_value(|all| filter_projects(all, filter.get())));

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap gap-2">
                {ProjectFilter::CHIPS
                    .into_iter()
                    .map(|chip| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if filter.get() == chip {
                                        "px-4 py-2 rounded-full text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                    } else {
                                        "px-4 py-2 rounded-full text-sm font-medium bg-surface-muted text-fg-muted hover:text-fg"
                                    }
                                }
                                on:click=move |_| filter.set(chip)
                            >
                                {chip.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="text-sm text-fg-muted">
                {move || project_count_label(visible.with(|list| list.len()))}
            </p>
            <Show
                when=move || visible.with(|list| !list.is_empty())
                fallback=|| view! { <EmptyState title="No projects found" description="Try another filter." /> }
            >
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || visible.get()
                        key=|project| project.id
                        children=|project| view! { <ProjectCard project=project /> }
                    />
                </div>
            </Show>
        </div>
    }
}
