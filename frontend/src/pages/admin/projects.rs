use super::{layout::AdminLayout, posts::delete_prompt, posts::PendingDelete, repository::AdminRepository};
use crate::{
    api::{ApiError, Project},
    components::{
        cards::StatusBadge,
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::filters::filter_by_title,
};
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn AdminProjectsPage() -> impl IntoView {
    let repo = AdminRepository::from_context();
    let reload = create_rw_signal(0u32);
    let search = create_rw_signal(String::new());
    let pending_delete = create_rw_signal::<PendingDelete>(None);
    let action_error = create_rw_signal(None::<ApiError>);

    let repo_for_list = repo.clone();
    let projects = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
            async move { repo.list_projects().await }
        },
    );

    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete_project(id).await }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    action_error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(err) => action_error.set(Some(err)),
            }
        }
    });

    view! {
        <AdminLayout title="Projects">
            <div class="flex items-center justify-between gap-4">
                <input
                    type="search"
                    placeholder="Search by title..."
                    class="w-full max-w-sm px-4 py-2 rounded-md border border-border bg-surface text-fg"
                    prop:value=search
                    on:input=move |ev| search.set(event_target::<HtmlInputElement>(&ev).value())
                />
                <a href="/admin/projects/new" class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text">
                    "New project"
                </a>
            </div>
            <InlineErrorMessage error=action_error />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    projects
                        .get()
                        .map(|result| match result {
                            Ok(projects) => {
                                let visible = Signal::derive(move || {
                                    filter_by_title(&projects, &search.get(), |project: &Project| {
                                        project.title.as_str()
                                    })
                                });
                                view! {
                                    <ProjectsTable
                                        projects=visible
                                        on_delete=Callback::new(move |target| pending_delete.set(Some(target)))
                                    />
                                }
                                .into_view()
                            }
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                }}
            </Suspense>
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                message=Signal::derive(move || {
                    pending_delete.with(|target| {
                        target.as_ref().map(|(_, title)| delete_prompt(title)).unwrap_or_default()
                    })
                })
                on_confirm=Callback::new(move |_| {
                    if let Some((id, _)) = pending_delete.get_untracked() {
                        delete_action.dispatch(id);
                    }
                })
                on_cancel=Callback::new(move |_| pending_delete.set(None))
                busy=delete_action.pending()
            />
        </AdminLayout>
    }
}

#[component]
pub fn ProjectsTable(
    #[prop(into)] projects: Signal<Vec<Project>>,
    on_delete: Callback<(i64, String)>,
) -> impl IntoView {
    view! {
        <Show
            when=move || projects.with(|list| !list.is_empty())
            fallback=|| view! { <EmptyState title="No projects match" /> }
        >
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-fg-muted border-b border-border">
                        <th class="py-2">"Title"</th>
                        <th class="py-2">"Status"</th>
                        <th class="py-2">"Period"</th>
                        <th class="py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || projects.get()
                        key=|project| project.id
                        children=move |project| {
                            let target = (project.id, project.title.clone());
                            let featured = project.featured;
                            view! {
                                <tr class="border-b border-border">
                                    <td class="py-2 font-medium text-fg">
                                        {project.title.clone()}
                                        <Show when=move || featured>
                                            <span class="ml-2 text-xs text-status-warning-text">"★"</span>
                                        </Show>
                                    </td>
                                    <td class="py-2"><StatusBadge status=project.status /></td>
                                    <td class="py-2 text-fg-muted">{project.period()}</td>
                                    <td class="py-2 text-right space-x-3">
                                        <a href=format!("/admin/projects/{}/edit", project.id) class="text-action-primary-bg hover:underline">"Edit"</a>
                                        <button
                                            type="button"
                                            class="text-action-danger-bg hover:underline"
                                            on:click=move |_| on_delete.call(target.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ProjectStatus;
    use crate::test_support::helpers::sample_project;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn table_lists_projects_with_status_and_edit_links() {
        let html = render_to_string(|| {
            let projects = vec![
                sample_project(1, "Devlog", ProjectStatus::InProgress, true),
                sample_project(2, "Shop", ProjectStatus::Archived, false),
            ];
            view! { <ProjectsTable projects=Signal::derive(move || projects.clone()) on_delete=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("href=\"/admin/projects/1/edit\""));
        assert!(html.contains("In Progress"));
        assert!(html.contains("Archived"));
        assert!(html.contains("2025-10 ~ present"));
    }

    #[test]
    fn empty_table_shows_empty_state() {
        let html = render_to_string(|| {
            view! { <ProjectsTable projects=Signal::derive(Vec::<Project>::new) on_delete=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("No projects match"));
    }
}
