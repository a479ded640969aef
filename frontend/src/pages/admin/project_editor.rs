use super::{layout::AdminLayout, repository::AdminRepository};
use crate::{
    api::{ApiError, Project, ProjectPayload, ProjectStatus},
    components::{
        error::InlineErrorMessage,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::navigation,
};
use leptos::{ev::KeyboardEvent, *};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const FIELD_CLASS: &str = "w-full px-3 py-2 rounded-md border border-border bg-surface text-fg";

/// Adds a technology unless it is blank or already listed (ignoring case).
pub fn add_tech(stack: &mut Vec<String>, raw: &str) -> Result<(), String> {
    let tech = raw.trim();
    if tech.is_empty() {
        return Err("Enter a technology first".to_string());
    }
    if stack.iter().any(|existing| existing.eq_ignore_ascii_case(tech)) {
        return Err(format!("{tech} is already listed"));
    }
    stack.push(tech.to_string());
    Ok(())
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Copy)]
pub struct ProjectFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub detail_content: RwSignal<String>,
    pub thumbnail: RwSignal<String>,
    pub tech_stack: RwSignal<Vec<String>>,
    pub tech_input: RwSignal<String>,
    pub tech_error: RwSignal<Option<String>>,
    pub role: RwSignal<String>,
    pub team_size: RwSignal<String>,
    pub github_url: RwSignal<String>,
    pub live_url: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub status: RwSignal<ProjectStatus>,
    pub featured: RwSignal<bool>,
}

impl Default for ProjectFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            detail_content: create_rw_signal(String::new()),
            thumbnail: create_rw_signal(String::new()),
            tech_stack: create_rw_signal(Vec::new()),
            tech_input: create_rw_signal(String::new()),
            tech_error: create_rw_signal(None),
            role: create_rw_signal(String::new()),
            team_size: create_rw_signal(String::new()),
            github_url: create_rw_signal(String::new()),
            live_url: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            status: create_rw_signal(ProjectStatus::default()),
            featured: create_rw_signal(false),
        }
    }
}

impl ProjectFormState {
    pub fn fill(&self, project: &Project) {
        self.title.set(project.title.clone());
        self.description.set(project.description.clone());
        self.detail_content
            .set(project.detail_content.clone().unwrap_or_default());
        self.thumbnail.set(project.thumbnail.clone());
        self.tech_stack.set(project.tech_stack.clone());
        self.role.set(project.role.clone());
        self.team_size
            .set(project.team_size.map(|n| n.to_string()).unwrap_or_default());
        self.github_url
            .set(project.github_url.clone().unwrap_or_default());
        self.live_url.set(project.live_url.clone().unwrap_or_default());
        self.start_date.set(project.start_date.clone());
        self.end_date.set(project.end_date.clone().unwrap_or_default());
        self.status.set(project.status);
        self.featured.set(project.featured);
    }

    pub fn add_pending_tech(&self) {
        let raw = self.tech_input.get_untracked();
        let mut outcome = Ok(());
        self.tech_stack.update(|stack| outcome = add_tech(stack, &raw));
        match outcome {
            Ok(()) => {
                self.tech_input.set(String::new());
                self.tech_error.set(None);
            }
            Err(message) => self.tech_error.set(Some(message)),
        }
    }

    pub fn remove_tech(&self, tech: &str) {
        self.tech_stack.update(|stack| stack.retain(|t| t != tech));
    }

    /// Optional text fields are always sent, so a field emptied in the form
    /// clears the stored value. A blank team size is sent as `null`.
    pub fn to_payload(&self) -> Result<ProjectPayload, ApiError> {
        let team_size = match optional(self.team_size.get_untracked()) {
            None => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(size) if size >= 1 => Some(size),
                _ => {
                    return Err(ApiError::new(
                        "VALIDATION_ERROR",
                        "Team size must be a whole number of at least 1",
                    ))
                }
            },
        };
        let payload = ProjectPayload {
            title: self.title.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
            detail_content: Some(self.detail_content.get_untracked()),
            thumbnail: self.thumbnail.get_untracked().trim().to_string(),
            tech_stack: self.tech_stack.get_untracked(),
            role: self.role.get_untracked().trim().to_string(),
            team_size,
            github_url: Some(self.github_url.get_untracked().trim().to_string()),
            live_url: Some(self.live_url.get_untracked().trim().to_string()),
            start_date: self.start_date.get_untracked().trim().to_string(),
            end_date: Some(self.end_date.get_untracked().trim().to_string()),
            status: self.status.get_untracked(),
            featured: self.featured.get_untracked(),
        };
        if payload.title.is_empty() || payload.description.is_empty() || payload.start_date.is_empty()
        {
            return Err(ApiError::new(
                "VALIDATION_ERROR",
                "Title, description and start date are required",
            ));
        }
        Ok(payload)
    }
}

#[component]
pub fn ProjectEditorPage() -> impl IntoView {
    let project_id = navigation::use_route_id();
    let repo = AdminRepository::from_context();
    let form = ProjectFormState::default();
    let error = create_rw_signal(None::<ApiError>);

    let repo_for_load = repo.clone();
    let existing = create_resource(
        move || project_id.get(),
        move |id| {
            let repo = repo_for_load.clone();
            async move {
                match id {
                    Some(id) => repo.get_project(id).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );
    create_effect(move |_| {
        if let Some(Ok(Some(project))) = existing.get() {
            form.fill(&project);
        }
    });

    let save_action = create_action(move |payload: &ProjectPayload| {
        let repo = repo.clone();
        let payload = payload.clone();
        let id = project_id.get_untracked();
        async move { repo.save_project(id, payload).await }
    });
    create_effect(move |_| match save_action.value().get() {
        Some(Ok(_)) => navigation::redirect_to("/admin/projects"),
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    let on_save = Callback::new(move |_| match form.to_payload() {
        Ok(payload) => {
            error.set(None);
            save_action.dispatch(payload);
        }
        Err(err) => error.set(Some(err)),
    });

    let title = if project_id.get_untracked().is_some() {
        "Edit project"
    } else {
        "New project"
    };

    view! {
        <AdminLayout title=title>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    existing
                        .get()
                        .map(|result| match result {
                            Err(err) if err.is_not_found() => {
                                view! { <ErrorMessage message="Project not found" /> }.into_view()
                            }
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            Ok(_) => view! {
                                <ProjectForm
                                    form=form
                                    error=error
                                    pending=save_action.pending()
                                    on_save=on_save
                                />
                            }
                            .into_view(),
                        })
                }}
            </Suspense>
        </AdminLayout>
    }
}

#[component]
pub fn ProjectForm(
    form: ProjectFormState,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_save: Callback<()>,
) -> impl IntoView {
    let input = move |signal: RwSignal<String>| {
        move |ev| signal.set(event_target::<HtmlInputElement>(&ev).value())
    };

    view! {
        <form class="space-y-4" on:submit=move |ev| {
            ev.prevent_default();
            on_save.call(());
        }>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Title"</span>
                <input name="title" class=FIELD_CLASS prop:value=form.title on:input=input(form.title) />
            </label>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Description"</span>
                <input name="description" class=FIELD_CLASS prop:value=form.description on:input=input(form.description) />
            </label>
            <div class="grid gap-4 md:grid-cols-3">
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Role"</span>
                    <input name="role" class=FIELD_CLASS prop:value=form.role on:input=input(form.role) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Team size"</span>
                    <input name="team_size" type="number" min="1" class=FIELD_CLASS prop:value=form.team_size on:input=input(form.team_size) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Status"</span>
                    <select
                        name="status"
                        class=FIELD_CLASS
                        on:change=move |ev| {
                            let raw = event_target::<HtmlSelectElement>(&ev).value();
                            if let Some(status) = ProjectStatus::parse(&raw) {
                                form.status.set(status);
                            }
                        }
                    >
                        {ProjectStatus::ALL
                            .into_iter()
                            .map(|status| view! {
                                <option value=status.as_str() selected=move || form.status.get() == status>
                                    {status.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <div class="grid gap-4 md:grid-cols-2">
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Start (YYYY-MM)"</span>
                    <input name="start_date" class=FIELD_CLASS prop:value=form.start_date on:input=input(form.start_date) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"End (blank while ongoing)"</span>
                    <input name="end_date" class=FIELD_CLASS prop:value=form.end_date on:input=input(form.end_date) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"GitHub URL"</span>
                    <input name="github_url" class=FIELD_CLASS prop:value=form.github_url on:input=input(form.github_url) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Live URL"</span>
                    <input name="live_url" class=FIELD_CLASS prop:value=form.live_url on:input=input(form.live_url) />
                </label>
            </div>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Thumbnail URL"</span>
                <input name="thumbnail" class=FIELD_CLASS prop:value=form.thumbnail on:input=input(form.thumbnail) />
            </label>
            <TechStackEditor form=form />
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Details (markdown)"</span>
                <textarea
                    name="detail_content"
                    rows="10"
                    class=format!("{FIELD_CLASS} font-mono text-sm")
                    prop:value=form.detail_content
                    on:input=move |ev| form.detail_content.set(event_target::<HtmlTextAreaElement>(&ev).value())
                ></textarea>
            </label>
            <label class="flex items-center gap-2 text-sm text-fg">
                <input
                    type="checkbox"
                    name="featured"
                    prop:checked=form.featured
                    on:change=move |ev| form.featured.set(event_target_checked(&ev))
                />
                "Featured on the home page"
            </label>
            <InlineErrorMessage error=error />
            <div class="flex justify-end gap-3">
                <a href="/admin/projects" class="px-4 py-2 text-sm text-fg-muted">"Cancel"</a>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                >
                    "Save project"
                </button>
            </div>
        </form>
    }
}

#[component]
fn TechStackEditor(form: ProjectFormState) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <span class="text-sm font-medium text-fg">"Tech stack"</span>
            <div class="flex flex-wrap gap-2">
                <For
                    each=move || form.tech_stack.get()
                    key=|tech| tech.clone()
                    children=move |tech| {
                        let label = tech.clone();
                        let remove_label = format!("Remove {tech}");
                        view! {
                            <span class="inline-flex items-center gap-1 rounded-full bg-surface-muted px-3 py-1 text-xs text-fg">
                                {label}
                                <button
                                    type="button"
                                    aria-label=remove_label
                                    class="text-fg-muted hover:text-fg"
                                    on:click=move |_| form.remove_tech(&tech)
                                >
                                    "✕"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
            <div class="flex gap-2">
                <input
                    name="tech_input"
                    class=FIELD_CLASS
                    placeholder="Add a technology"
                    prop:value=form.tech_input
                    on:input=move |ev| form.tech_input.set(event_target::<HtmlInputElement>(&ev).value())
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            form.add_pending_tech();
                        }
                    }
                />
                <button
                    type="button"
                    class="rounded-md border border-border px-4 py-2 text-sm text-fg"
                    on:click=move |_| form.add_pending_tech()
                >
                    "Add"
                </button>
            </div>
            {move || form.tech_error.get().map(|message| view! {
                <p class="text-sm text-status-error-text">{message}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::add_tech;

    #[test]
    fn duplicates_and_blanks_are_rejected() {
        let mut stack = vec!["Rust".to_string()];
        assert!(add_tech(&mut stack, " Leptos ").is_ok());
        assert_eq!(add_tech(&mut stack, "rust"), Err("rust is already listed".to_string()));
        assert!(add_tech(&mut stack, "   ").is_err());
        assert_eq!(stack, vec!["Rust".to_string(), "Leptos".to_string()]);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_project;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn emptied_optionals_are_sent_blank() {
        with_runtime(|| {
            let form = ProjectFormState::default();
            form.fill(&sample_project(1, "Devlog", ProjectStatus::Completed, true));
            form.github_url.set("  ".into());
            form.team_size.set(String::new());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.github_url.as_deref(), Some(""));
            assert_eq!(payload.live_url.as_deref(), Some(""));
            assert_eq!(payload.detail_content.as_deref(), Some(""));
            assert_eq!(payload.end_date.as_deref(), Some(""));
            assert_eq!(payload.team_size, None);

            let body = serde_json::to_value(&payload).unwrap();
            assert_eq!(body["githubUrl"], "");
            assert!(body.get("teamSize").is_some_and(|v| v.is_null()));
        });
    }

    #[test]
    fn new_project_defaults_to_in_progress() {
        with_runtime(|| {
            let form = ProjectFormState::default();
            form.title.set("Devlog".into());
            form.description.set("Blog".into());
            form.start_date.set("2025-10".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.status, ProjectStatus::InProgress);
        });
    }

    #[test]
    fn invalid_team_size_is_reported() {
        with_runtime(|| {
            let form = ProjectFormState::default();
            form.fill(&sample_project(1, "Devlog", ProjectStatus::Completed, true));
            form.team_size.set("zero".into());
            let err = form.to_payload().unwrap_err();
            assert!(err.error.contains("Team size"));
        });
    }

    #[test]
    fn tech_input_adds_once_and_removes() {
        with_runtime(|| {
            let form = ProjectFormState::default();
            form.tech_input.set("Axum".into());
            form.add_pending_tech();
            assert_eq!(form.tech_stack.get_untracked(), vec!["Axum".to_string()]);
            assert_eq!(form.tech_input.get_untracked(), "");

            form.tech_input.set("axum".into());
            form.add_pending_tech();
            assert_eq!(form.tech_stack.get_untracked().len(), 1);
            assert!(form.tech_error.get_untracked().is_some());

            form.remove_tech("Axum");
            assert!(form.tech_stack.get_untracked().is_empty());
        });
    }

    #[test]
    fn form_lists_existing_stack() {
        let html = render_to_string(|| {
            let form = ProjectFormState::default();
            form.fill(&sample_project(1, "Devlog", ProjectStatus::Completed, true));
            view! {
                <ProjectForm
                    form=form
                    error=Signal::derive(|| None::<ApiError>)
                    pending=Signal::derive(|| false)
                    on_save=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("Remove Rust"));
        assert!(html.contains("Remove Leptos"));
        assert!(html.contains("Save project"));
    }
}
