use super::{layout::AdminLayout, repository::AdminRepository};
use crate::{
    api::{ApiError, Post, PostPayload},
    components::{
        error::InlineErrorMessage,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::{format::split_labels, navigation},
};
use leptos::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

const FIELD_CLASS: &str = "w-full px-3 py-2 rounded-md border border-border bg-surface text-fg";

#[derive(Clone, Copy)]
pub struct PostFormState {
    pub title: RwSignal<String>,
    pub excerpt: RwSignal<String>,
    pub content: RwSignal<String>,
    pub cover_image: RwSignal<String>,
    pub category: RwSignal<String>,
    pub tags: RwSignal<String>,
}

impl Default for PostFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            excerpt: create_rw_signal(String::new()),
            content: create_rw_signal(String::new()),
            cover_image: create_rw_signal(String::new()),
            category: create_rw_signal(String::new()),
            tags: create_rw_signal(String::new()),
        }
    }
}

impl PostFormState {
    pub fn fill(&self, post: &Post) {
        self.title.set(post.title.clone());
        self.excerpt.set(post.excerpt.clone());
        self.content.set(post.content.clone().unwrap_or_default());
        self.cover_image.set(post.cover_image.clone());
        self.category.set(post.category.clone());
        self.tags.set(post.tags.join(", "));
    }

    pub fn to_payload(&self, published: bool) -> PostPayload {
        let content = self.content.get_untracked();
        PostPayload {
            title: self.title.get_untracked().trim().to_string(),
            excerpt: self.excerpt.get_untracked().trim().to_string(),
            content: (!content.trim().is_empty()).then_some(content),
            cover_image: self.cover_image.get_untracked().trim().to_string(),
            category: self.category.get_untracked().trim().to_string(),
            tags: split_labels(&self.tags.get_untracked()),
            published,
        }
    }
}

/// Checks what the form can know before the server validates the rest.
pub fn validate_post(payload: &PostPayload) -> Result<(), ApiError> {
    let missing: Vec<&str> = [
        ("Title", payload.title.as_str()),
        ("Excerpt", payload.excerpt.as_str()),
        ("Category", payload.category.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::new(
            "VALIDATION_ERROR",
            format!("{} required", missing.join(", ")),
        ))
    }
}

pub fn editor_title(id: Option<i64>) -> &'static str {
    if id.is_some() {
        "Edit post"
    } else {
        "New post"
    }
}

#[component]
pub fn PostEditorPage() -> impl IntoView {
    let post_id = navigation::use_route_id();
    let repo = AdminRepository::from_context();
    let form = PostFormState::default();
    let error = create_rw_signal(None::<ApiError>);

    let repo_for_load = repo.clone();
    let existing = create_resource(
        move || post_id.get(),
        move |id| {
            let repo = repo_for_load.clone();
            async move {
                match id {
                    Some(id) => repo.get_post(id).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );
    create_effect(move |_| {
        if let Some(Ok(Some(post))) = existing.get() {
            form.fill(&post);
        }
    });

    let save_action = create_action(move |payload: &PostPayload| {
        let repo = repo.clone();
        let payload = payload.clone();
        let id = post_id.get_untracked();
        async move { repo.save_post(id, payload).await }
    });
    create_effect(move |_| match save_action.value().get() {
        Some(Ok(_)) => navigation::redirect_to("/admin/posts"),
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    let on_save = Callback::new(move |published: bool| {
        let payload = form.to_payload(published);
        match validate_post(&payload) {
            Ok(()) => {
                error.set(None);
                save_action.dispatch(payload);
            }
            Err(err) => error.set(Some(err)),
        }
    });

    view! {
        <AdminLayout title=editor_title(post_id.get_untracked())>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    existing
                        .get()
                        .map(|result| match result {
                            Err(err) if err.is_not_found() => {
                                view! { <ErrorMessage message="Post not found" /> }.into_view()
                            }
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            Ok(_) => view! {
                                <PostForm
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
pub fn PostForm(
    form: PostFormState,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_save: Callback<bool>,
) -> impl IntoView {
    let input = move |signal: RwSignal<String>| {
        move |ev| signal.set(event_target::<HtmlInputElement>(&ev).value())
    };

    view! {
        <form class="space-y-4" on:submit=move |ev| {
            ev.prevent_default();
            on_save.call(true);
        }>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Title"</span>
                <input name="title" class=FIELD_CLASS prop:value=form.title on:input=input(form.title) />
            </label>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Excerpt"</span>
                <input name="excerpt" class=FIELD_CLASS prop:value=form.excerpt on:input=input(form.excerpt) />
            </label>
            <div class="grid gap-4 md:grid-cols-2">
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Category"</span>
                    <input name="category" class=FIELD_CLASS prop:value=form.category on:input=input(form.category) />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Cover image URL"</span>
                    <input name="cover_image" class=FIELD_CLASS prop:value=form.cover_image on:input=input(form.cover_image) />
                </label>
            </div>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Tags"</span>
                <input name="tags" class=FIELD_CLASS placeholder="rust, leptos, web" prop:value=form.tags on:input=input(form.tags) />
                <span class="text-xs text-fg-muted">"Comma separated"</span>
            </label>
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Content (markdown)"</span>
                <textarea
                    name="content"
                    rows="16"
                    class=format!("{FIELD_CLASS} font-mono text-sm")
                    prop:value=form.content
                    on:input=move |ev| form.content.set(event_target::<HtmlTextAreaElement>(&ev).value())
                ></textarea>
            </label>
            <InlineErrorMessage error=error />
            <div class="flex justify-end gap-3">
                <a href="/admin/posts" class="px-4 py-2 text-sm text-fg-muted">"Cancel"</a>
                <button
                    type="button"
                    disabled=move || pending.get()
                    class="rounded-md border border-border px-4 py-2 text-sm font-semibold text-fg disabled:opacity-50"
                    on:click=move |_| on_save.call(false)
                >
                    "Save draft"
                </button>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                >
                    "Publish"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_fields_are_listed() {
        let err = validate_post(&PostPayload::default()).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "Title, Excerpt, Category required");

        let payload = PostPayload {
            title: "T".into(),
            excerpt: "E".into(),
            category: "C".into(),
            ..PostPayload::default()
        };
        assert!(validate_post(&payload).is_ok());
    }

    #[test]
    fn title_follows_mode() {
        assert_eq!(editor_title(None), "New post");
        assert_eq!(editor_title(Some(4)), "Edit post");
    }
}
