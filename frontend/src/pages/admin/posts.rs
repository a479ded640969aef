use super::{layout::AdminLayout, repository::AdminRepository};
use crate::{
    api::{ApiError, Post},
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::{filters::filter_by_title, format::format_date},
};
use leptos::*;
use web_sys::HtmlInputElement;

/// A row waiting for the delete confirmation: id and title.
pub type PendingDelete = Option<(i64, String)>;

pub fn delete_prompt(title: &str) -> String {
    format!("Delete \"{title}\"? This cannot be undone.")
}

#[component]
pub fn AdminPostsPage() -> impl IntoView {
    let repo = AdminRepository::from_context();
    let reload = create_rw_signal(0u32);
    let search = create_rw_signal(String::new());
    let pending_delete = create_rw_signal::<PendingDelete>(None);
    let action_error = create_rw_signal(None::<ApiError>);

    let repo_for_list = repo.clone();
    let posts = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
            async move { repo.list_posts().await }
        },
    );

    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete_post(id).await }
    });
    create_effect(move |_| match delete_action.value().get() {
        Some(Ok(())) => {
            pending_delete.set(None);
            action_error.set(None);
            reload.update(|n| *n += 1);
        }
        Some(Err(err)) => {
            pending_delete.set(None);
            action_error.set(Some(err));
        }
        None => {}
    });

    view! {
        <AdminLayout title="Posts">
            <div class="flex items-center justify-between gap-4">
                <input
                    type="search"
                    placeholder="Search by title..."
                    class="w-full max-w-sm px-4 py-2 rounded-md border border-border bg-surface text-fg"
                    prop:value=search
                    on:input=move |ev| search.set(event_target::<HtmlInputElement>(&ev).value())
                />
                <a href="/admin/posts/new" class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text">
                    "New post"
                </a>
            </div>
            <InlineErrorMessage error=action_error />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(posts) => {
                                let visible = Signal::derive(move || {
                                    filter_by_title(&posts, &search.get(), |post: &Post| post.title.as_str())
                                });
                                view! {
                                    <PostsTable
                                        posts=visible
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
pub fn PostsTable(
    #[prop(into)] posts: Signal<Vec<Post>>,
    on_delete: Callback<(i64, String)>,
) -> impl IntoView {
    view! {
        <Show
            when=move || posts.with(|list| !list.is_empty())
            fallback=|| view! { <EmptyState title="No posts match" /> }
        >
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-fg-muted border-b border-border">
                        <th class="py-2">"Title"</th>
                        <th class="py-2">"Category"</th>
                        <th class="py-2">"Status"</th>
                        <th class="py-2">"Created"</th>
                        <th class="py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || posts.get()
                        key=|post| post.id
                        children=move |post| {
                            let target = (post.id, post.title.clone());
                            view! {
                                <tr class="border-b border-border">
                                    <td class="py-2 font-medium text-fg">{post.title.clone()}</td>
                                    <td class="py-2 text-fg-muted">{post.category.clone()}</td>
                                    <td class="py-2">{if post.is_published() { "Published" } else { "Draft" }}</td>
                                    <td class="py-2 text-fg-muted">{format_date(post.created_at)}</td>
                                    <td class="py-2 text-right space-x-3">
                                        <a href=format!("/admin/posts/{}/edit", post.id) class="text-action-primary-bg hover:underline">"Edit"</a>
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
    use crate::test_support::helpers::sample_post;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn table_lists_rows_with_edit_links() {
        let html = render_to_string(|| {
            let mut draft = sample_post(2, "Draft notes", "Notes");
            draft.published = Some(false);
            let posts = vec![sample_post(1, "Async Rust", "Backend"), draft];
            view! { <PostsTable posts=Signal::derive(move || posts.clone()) on_delete=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("href=\"/admin/posts/1/edit\""));
        assert!(html.contains("href=\"/admin/posts/2/edit\""));
        assert!(html.contains("Published"));
        assert!(html.contains("Draft"));
    }

    #[test]
    fn title_search_narrows_rows() {
        let html = render_to_string(|| {
            let posts = vec![
                sample_post(1, "Async Rust", "Backend"),
                sample_post(2, "CSS grids", "Frontend"),
            ];
            let visible = filter_by_title(&posts, "rust", |post: &Post| post.title.as_str());
            view! { <PostsTable posts=Signal::derive(move || visible.clone()) on_delete=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("Async Rust"));
        assert!(!html.contains("CSS grids"));
    }

    #[test]
    fn empty_table_shows_empty_state() {
        let html = render_to_string(|| {
            view! { <PostsTable posts=Signal::derive(Vec::<Post>::new) on_delete=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("No posts match"));
    }
}
