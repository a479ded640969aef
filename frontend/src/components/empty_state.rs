use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] action_href: Option<String>,
    #[prop(optional, into)] action_label: Option<String>,
) -> impl IntoView {
    let action = action_href.zip(action_label).map(|(href, label)| {
        view! {
            <a href=href class="mt-4 inline-block rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text">
                {label}
            </a>
        }
    });
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <h3 class="text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
            {action}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_optional_action() {
        let html = render_to_string(|| {
            view! {
                <EmptyState
                    title="No posts yet"
                    description="Write the first one"
                    action_href="/admin/posts/new"
                    action_label="New post"
                />
            }
        });
        assert!(html.contains("No posts yet"));
        assert!(html.contains("href=\"/admin/posts/new\""));

        let html = render_to_string(|| view! { <EmptyState title="Nothing here" /> });
        assert!(!html.contains("<a"));
    }
}
