use super::repository::BlogRepository;
use crate::{
    api::{PostDetail, PostLink},
    components::{
        cards::TagList,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::{
        format::{format_count, format_date, format_read_time},
        markdown::{parse_blocks, Block},
        navigation::use_route_id,
    },
};
use leptos::*;

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let post_id = use_route_id();
    let repo = BlogRepository::from_context();

    let repo_for_detail = repo.clone();
    let detail = create_resource(
        move || post_id.get(),
        move |id| {
            let repo = repo_for_detail.clone();
            async move {
                match id {
                    Some(id) => repo.fetch_post(id).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );

    create_effect(move |_| {
        if let Some(id) = post_id.get() {
            let repo = repo.clone();
            spawn_local(async move {
                if let Err(err) = repo.record_view(id).await {
                    log::debug!("view for post {id} not recorded: {err}");
                }
            });
        }
    });

    view! {
        <Layout>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok(Some(detail)) => view! { <PostArticle detail=detail /> }.into_view(),
                            Ok(None) => view! { <PostNotFound /> }.into_view(),
                            Err(err) if err.is_not_found() => view! { <PostNotFound /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                }}
            </Suspense>
        </Layout>
    }
}

#[component]
pub fn PostNotFound() -> impl IntoView {
    view! {
        <div class="py-24 text-center">
            <h1 class="text-2xl font-bold text-fg">"Post not found"</h1>
            <p class="mt-2 text-fg-muted">"It may have been removed or never existed."</p>
            <a href="/blog" class="mt-6 inline-block text-action-primary-bg hover:underline">"Back to the blog"</a>
        </div>
    }
}

#[component]
pub fn PostArticle(detail: PostDetail) -> impl IntoView {
    let PostDetail {
        post,
        previous,
        next,
    } = detail;
    let blocks = parse_blocks(post.content.as_deref().unwrap_or_default());
    let views = post.view_count.map(format_count);

    view! {
        <article class="max-w-3xl mx-auto">
            <a href="/blog" class="text-sm text-fg-muted hover:text-fg">"← All posts"</a>
            <header class="mt-4 space-y-3">
                <span class="text-xs font-semibold uppercase text-action-primary-bg">{post.category.clone()}</span>
                <h1 class="text-4xl font-bold text-fg">{post.title.clone()}</h1>
                <div class="flex gap-3 text-sm text-fg-muted">
                    <span>{format_date(post.created_at)}</span>
                    <span>{format_read_time(post.read_time)}</span>
                    {views.map(|count| view! { <span>{format!("{count} views")}</span> })}
                </div>
            </header>
            <img src=post.cover_image.clone() alt=post.title.clone() class="my-8 w-full rounded-lg object-cover" />
            <div class="prose max-w-none text-fg">
                {blocks.into_iter().map(render_block).collect_view()}
            </div>
            <div class="mt-8">
                <TagList tags=post.tags.clone() />
            </div>
            <nav class="mt-12 grid grid-cols-2 gap-4 border-t border-border pt-6">
                <div>{previous.map(|link| neighbour_link(link, "Previous"))}</div>
                <div class="text-right">{next.map(|link| neighbour_link(link, "Next"))}</div>
            </nav>
        </article>
    }
}

fn neighbour_link(link: PostLink, label: &'static str) -> View {
    view! {
        <a href=format!("/blog/{}", link.id) class="block hover:underline">
            <span class="block text-xs uppercase text-fg-muted">{label}</span>
            <span class="font-medium text-fg">{link.title}</span>
        </a>
    }
    .into_view()
}

fn render_block(block: Block) -> View {
    match block {
        Block::Heading { level: 1, text } => view! { <h1 class="text-3xl font-bold mt-8">{text}</h1> }.into_view(),
        Block::Heading { level: 2, text } => view! { <h2 class="text-2xl font-bold mt-8">{text}</h2> }.into_view(),
        Block::Heading { text, .. } => view! { <h3 class="text-xl font-semibold mt-6">{text}</h3> }.into_view(),
        Block::Code { language, body } => view! {
            <pre class="my-4 overflow-x-auto rounded-lg bg-surface-muted p-4 text-sm" data-language=language>
                <code>{body}</code>
            </pre>
        }
        .into_view(),
        Block::List(items) => view! {
            <ul class="my-4 list-disc pl-6 space-y-1">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_view(),
        Block::Paragraph(text) => view! { <p class="my-4 leading-7">{text}</p> }.into_view(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_post;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn article_renders_body_and_neighbours() {
        let html = render_to_string(|| {
            let detail = PostDetail {
                post: sample_post(2, "FastAPI in production", "Backend"),
                previous: Some(PostLink {
                    id: 1,
                    title: "React 18".into(),
                }),
                next: None,
            };
            view! { <PostArticle detail=detail /> }
        });
        assert!(html.contains("<h1 class=\"text-3xl font-bold mt-8\">"));
        assert!(html.contains("Body text."));
        assert!(html.contains("href=\"/blog/1\""));
        assert!(html.contains("Previous"));
        assert!(!html.contains(">Next<"));
    }

    #[test]
    fn not_found_is_rendered_in_page() {
        let html = render_to_string(|| view! { <PostNotFound /> });
        assert!(html.contains("Post not found"));
        assert!(html.contains("href=\"/blog\""));
    }
}
