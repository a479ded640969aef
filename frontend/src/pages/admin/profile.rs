use super::{layout::AdminLayout, repository::AdminRepository};
use crate::{
    api::{ApiError, Profile, SkillGroup, TimelineEntry, TimelineKind},
    components::{
        error::InlineErrorMessage,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::format::split_labels,
};
use leptos::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

const FIELD_CLASS: &str = "w-full px-3 py-2 rounded-md border border-border bg-surface text-fg";

/// One group per line: `Backend: Rust, Axum`.
pub fn parse_skills(raw: &str) -> Vec<SkillGroup> {
    raw.lines()
        .filter_map(|line| {
            let (name, skills) = line.split_once(':')?;
            let name = name.trim();
            (!name.is_empty()).then(|| SkillGroup {
                name: name.to_string(),
                skills: split_labels(skills),
            })
        })
        .collect()
}

pub fn format_skills(groups: &[SkillGroup]) -> String {
    groups
        .iter()
        .map(|group| format!("{}: {}", group.name, group.skills.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn kind_name(kind: TimelineKind) -> &'static str {
    match kind {
        TimelineKind::Project => "project",
        TimelineKind::Work => "work",
        TimelineKind::Education => "education",
    }
}

/// One entry per line: `year | kind | title | description`.
pub fn parse_timeline(raw: &str) -> Result<Vec<TimelineEntry>, String> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let mut parts = line.splitn(4, '|').map(str::trim);
            let year = parts.next().unwrap_or_default();
            let kind = match parts.next().unwrap_or_default() {
                "project" => TimelineKind::Project,
                "work" => TimelineKind::Work,
                "education" => TimelineKind::Education,
                other => return Err(format!("Line {}: unknown kind '{other}'", index + 1)),
            };
            let title = parts.next().unwrap_or_default();
            if year.is_empty() || title.is_empty() {
                return Err(format!("Line {}: year and title are required", index + 1));
            }
            Ok(TimelineEntry {
                year: year.to_string(),
                title: title.to_string(),
                description: parts.next().unwrap_or_default().to_string(),
                kind,
            })
        })
        .collect()
}

pub fn format_timeline(entries: &[TimelineEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{} | {} | {} | {}",
                entry.year,
                kind_name(entry.kind),
                entry.title,
                entry.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Copy)]
pub struct ProfileFormState {
    pub name: RwSignal<String>,
    pub title: RwSignal<String>,
    pub bio: RwSignal<String>,
    pub location: RwSignal<String>,
    pub email: RwSignal<String>,
    pub experience: RwSignal<String>,
    pub github_url: RwSignal<String>,
    pub linkedin_url: RwSignal<String>,
    pub skills: RwSignal<String>,
    pub timeline: RwSignal<String>,
}

impl ProfileFormState {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: create_rw_signal(profile.name.clone()),
            title: create_rw_signal(profile.title.clone()),
            bio: create_rw_signal(profile.bio.clone()),
            location: create_rw_signal(profile.location.clone()),
            email: create_rw_signal(profile.email.clone()),
            experience: create_rw_signal(profile.experience.clone()),
            github_url: create_rw_signal(profile.github_url.clone().unwrap_or_default()),
            linkedin_url: create_rw_signal(profile.linkedin_url.clone().unwrap_or_default()),
            skills: create_rw_signal(format_skills(&profile.skills)),
            timeline: create_rw_signal(format_timeline(&profile.timeline)),
        }
    }

    pub fn to_profile(&self) -> Result<Profile, ApiError> {
        let timeline = parse_timeline(&self.timeline.get_untracked())
            .map_err(|message| ApiError::new("VALIDATION_ERROR", message))?;
        let optional = |value: String| {
            let value = value.trim().to_string();
            (!value.is_empty()).then_some(value)
        };
        let profile = Profile {
            name: self.name.get_untracked().trim().to_string(),
            title: self.title.get_untracked().trim().to_string(),
            bio: self.bio.get_untracked(),
            location: self.location.get_untracked().trim().to_string(),
            email: self.email.get_untracked().trim().to_string(),
            experience: self.experience.get_untracked().trim().to_string(),
            github_url: optional(self.github_url.get_untracked()),
            linkedin_url: optional(self.linkedin_url.get_untracked()),
            skills: parse_skills(&self.skills.get_untracked()),
            timeline,
        };
        if profile.name.is_empty() || profile.email.is_empty() {
            return Err(ApiError::new("VALIDATION_ERROR", "Name and email are required"));
        }
        Ok(profile)
    }
}

#[component]
pub fn ProfileSettingsPage() -> impl IntoView {
    let repo = AdminRepository::from_context();
    let repo_for_load = repo.clone();
    let profile = create_resource(|| (), move |_| {
        let repo = repo_for_load.clone();
        async move { repo.get_profile().await }
    });

    view! {
        <AdminLayout title="Profile">
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {let repo = repo.clone(); move || {
                    let repo = repo.clone();
                    profile
                        .get()
                        .map(move |result| match result {
                            Ok(profile) => {
                                view! { <ProfileForm profile=profile repo=repo /> }.into_view()
                            }
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                }}
            </Suspense>
        </AdminLayout>
    }
}

#[component]
pub fn ProfileForm(profile: Profile, repo: AdminRepository) -> impl IntoView {
    let form = ProfileFormState::from_profile(&profile);
    let error = create_rw_signal(None::<ApiError>);
    let saved = create_rw_signal(false);

    let save_action = create_action(move |profile: &Profile| {
        let repo = repo.clone();
        let profile = profile.clone();
        async move { repo.update_profile(profile).await }
    });
    create_effect(move |_| match save_action.value().get() {
        Some(Ok(_)) => {
            error.set(None);
            saved.set(true);
        }
        Some(Err(err)) => {
            saved.set(false);
            error.set(Some(err));
        }
        None => {}
    });

    let input = move |signal: RwSignal<String>| {
        move |ev| signal.set(event_target::<HtmlInputElement>(&ev).value())
    };
    let textarea = move |signal: RwSignal<String>| {
        move |ev| signal.set(event_target::<HtmlTextAreaElement>(&ev).value())
    };
    let pending = save_action.pending();

    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                saved.set(false);
                match form.to_profile() {
                    Ok(profile) => save_action.dispatch(profile),
                    Err(err) => error.set(Some(err)),
                }
            }
        >
            <div class="grid gap-4 md:grid-cols-2">
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Name"</span>
                    <input name="name" class=FIELD_CLASS prop:value=form.name on:input=input(form.name) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Title"</span>
                    <input name="title" class=FIELD_CLASS prop:value=form.title on:input=input(form.title) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Email"</span>
                    <input name="email" type="email" class=FIELD_CLASS prop:value=form.email on:input=input(form.email) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Location"</span>
                    <input name="location" class=FIELD_CLASS prop:value=form.location on:input=input(form.location) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Experience"</span>
                    <input name="experience" class=FIELD_CLASS prop:value=form.experience on:input=input(form.experience) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"GitHub URL"</span>
                    <input name="github_url" class=FIELD_CLASS prop:value=form.github_url on:input=input(form.github_url) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"LinkedIn URL"</span>
                    <input name="linkedin_url" class=FIELD_CLASS prop:value=form.linkedin_url on:input=input(form.linkedin_url) />
                </label>
            </div>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Bio"</span>
                <textarea name="bio" rows="4" class=FIELD_CLASS prop:value=form.bio on:input=textarea(form.bio)></textarea>
            </label>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Skills"</span>
                <textarea name="skills" rows="5" class=FIELD_CLASS prop:value=form.skills on:input=textarea(form.skills)></textarea>
                <span class="text-xs text-fg-muted">"One group per line, e.g. Backend: Rust, Axum"</span>
            </label>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Timeline"</span>
                <textarea name="timeline" rows="6" class=FIELD_CLASS prop:value=form.timeline on:input=textarea(form.timeline)></textarea>
                <span class="text-xs text-fg-muted">"year | project, work or education | title | description"</span>
            </label>
            <InlineErrorMessage error=error />
            <Show when=move || saved.get()>
                <p class="text-sm text-status-success-text">"Profile saved."</p>
            </Show>
            <div class="flex justify-end">
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                >
                    "Save profile"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_lines_parse_into_groups() {
        let groups = parse_skills("Backend: Rust, Axum\nnot a group\n: orphan\nFrontend: Leptos");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Backend");
        assert_eq!(groups[0].skills, vec!["Rust".to_string(), "Axum".to_string()]);
        assert_eq!(format_skills(&groups), "Backend: Rust, Axum\nFrontend: Leptos");
    }

    #[test]
    fn timeline_lines_parse_and_report_bad_rows() {
        let entries = parse_timeline("2024 | work | Joined Acme | Platform team\n\n2019 | education | BSc").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, TimelineKind::Work);
        assert_eq!(entries[1].description, "");

        assert_eq!(
            parse_timeline("2024 | hobby | Chess").unwrap_err(),
            "Line 1: unknown kind 'hobby'"
        );
        assert!(parse_timeline("2024 | work |").is_err());
    }

    #[test]
    fn formatted_timeline_parses_back() {
        let entries = vec![TimelineEntry {
            year: "2025".into(),
            title: "Devlog".into(),
            description: "Side project".into(),
            kind: TimelineKind::Project,
        }];
        assert_eq!(parse_timeline(&format_timeline(&entries)).unwrap(), entries);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    fn profile() -> Profile {
        Profile {
            name: "Kim Dev".into(),
            title: "Developer".into(),
            bio: String::new(),
            location: String::new(),
            email: "dev@example.com".into(),
            experience: String::new(),
            github_url: None,
            linkedin_url: None,
            skills: vec![],
            timeline: vec![],
        }
    }

    #[test]
    fn unchanged_form_reproduces_the_profile() {
        with_runtime(|| {
            let form = ProfileFormState::from_profile(&profile());
            assert_eq!(form.to_profile().unwrap(), profile());
        });
    }

    #[test]
    fn blank_name_is_rejected() {
        with_runtime(|| {
            let form = ProfileFormState::from_profile(&profile());
            form.name.set("  ".into());
            assert_eq!(form.to_profile().unwrap_err().code, "VALIDATION_ERROR");
        });
    }
}
