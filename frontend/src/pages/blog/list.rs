use super::repository::BlogRepository;
use crate::{
    api::{ApiError, Post},
    components::{
        cards::PostCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::filters::{filter_posts, post_categories, ALL_CATEGORIES},
};
use leptos::*;
use web_sys::HtmlInputElement;

pub fn post_count_label(count: usize) -> String {
    match count {
        1 => "1 post".to_string(),
        n => format!("{n} posts"),
    }
}

#[component]
pub fn BlogListPage() -> impl IntoView {
    let repo = BlogRepository::from_context();
    let posts = create_resource(|| (), move |_| {
        let repo = repo.clone();
        async move {
            let posts = repo.fetch_posts().await?;
            // The chip row still works from the posts themselves if this fails.
            let categories = repo.fetch_categories().await.unwrap_or_default();
            Ok::<_, ApiError>((posts, categories))
        }
    });

    view! {
        <Layout>
            <section class="mb-8">
                <h1 class="text-4xl font-bold text-fg">"Blog"</h1>
                <p class="mt-2 text-fg-muted">"Notes on frontend, backend and operations."</p>
            </section>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok((posts, categories)) => {
                                view! { <BlogList posts=posts categories=categories /> }.into_view()
                            }
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                }}
            </Suspense>
        </Layout>
    }
}

/// Category chips and a search box narrowing an already loaded list.
#[component]
pub fn BlogList(posts: Vec<Post>, #[prop(optional)] categories: Vec<String>) -> impl IntoView {
    let categories = if categories.is_empty() {
        post_categories(&posts)
    } else {
        categories
    };
    let posts = store_value(posts);
    let category = create_rw_signal(ALL_CATEGORIES.to_string());
    let search = create_rw_signal(String::new());
    let visible = create_memo(move |_| {
        posts.with_value(|all| filter_posts(all, &category.get(), &search.get()))
    });

    view! {
        <div class="space-y-6">
            <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                <div class="flex flex-wrap gap-2">
                    {categories
                        .into_iter()
                        .map(|name| {
                            let value = name.clone();
                            let is_selected = {
                                let name = name.clone();
                                move || category.get() == name
                            };
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if is_selected() {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-surface-muted text-fg-muted hover:text-fg"
                                        }
                                    }
                                    on:click=move |_| category.set(value.clone())
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input
                    type="search"
                    placeholder="Search posts..."
                    class="w-full md:w-72 px-4 py-2 rounded-md border border-border bg-surface text-fg"
                    prop:value=search
                    on:input=move |ev| search.set(event_target::<HtmlInputElement>(&ev).value())
                />
            </div>
            <p class="text-sm text-fg-muted">
                {move || post_count_label(visible.with(|list| list.len()))}
            </p>
            <Show
                when=move || visible.with(|list| !list.is_empty())
                fallback=|| view! {
                    <EmptyState title="No posts found" description="Try another category or search term." />
                }
            >
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || visible.get()
                        key=|post| post.id
                        children=|post| view! { <PostCard post=post /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::post_count_label;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(post_count_label(1), "1 post");
        assert_eq!(post_count_label(3), "3 posts");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_post;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn list_renders_chips_count_and_cards() {
        let html = render_to_string(|| {
            let posts = vec![
                sample_post(1, "React 18", "React"),
                sample_post(2, "FastAPI", "Backend"),
            ];
            view! { <BlogList posts=posts /> }
        });
        assert!(html.contains("All"));
        assert!(html.contains("Backend"));
        assert!(html.contains("2 posts"));
        assert!(html.contains("href=\"/blog/2\""));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_to_string(|| view! { <BlogList posts=Vec::new() /> });
        assert!(html.contains("No posts found"));
        assert!(html.contains("0 posts"));
    }
}
