use crate::{
    api::{ApiClient, SearchKind, SearchResult},
    utils::debounce::{DebounceGate, SEARCH_DEBOUNCE_MS},
};
use leptos::ev::KeyboardEvent;
use leptos::*;
use web_sys::HtmlInputElement;

pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Hint,
    Searching,
    Results(Vec<SearchResult>),
    Failed(String),
}

/// Queries shorter than the minimum never reach the server.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

pub fn result_count_label(count: usize) -> String {
    match count {
        1 => "1 result".to_string(),
        n => format!("{n} results"),
    }
}

fn kind_label(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Post => "Post",
        SearchKind::Project => "Project",
    }
}

#[component]
pub fn SearchModal(open: RwSignal<bool>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let gate = DebounceGate::new();
    let query = create_rw_signal(String::new());
    let phase = create_rw_signal(SearchPhase::Hint);

    let close = {
        let gate = gate.clone();
        move || {
            gate.cancel();
            open.set(false);
            query.set(String::new());
            phase.set(SearchPhase::Hint);
        }
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target::<HtmlInputElement>(&ev).value();
        query.set(value.clone());
        let ticket = gate.ticket();
        if !is_searchable(&value) {
            phase.set(SearchPhase::Hint);
            return;
        }
        phase.set(SearchPhase::Searching);
        let gate = gate.clone();
        let api = api.clone();
        spawn_local(async move {
            if !gate.settle(ticket, SEARCH_DEBOUNCE_MS).await {
                return;
            }
            let outcome = api.search(value.trim()).await;
            // A newer keystroke may have landed while the request was in flight.
            if !gate.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(results) => phase.set(SearchPhase::Results(results)),
                Err(err) => phase.set(SearchPhase::Failed(err.error)),
            }
        });
    };

    let close_on_escape = close.clone();
    let close_on_overlay = close.clone();
    let close_on_button = close.clone();

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 overflow-y-auto"
                on:keydown={
                    let close = close_on_escape.clone();
                    move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close();
                        }
                    }
                }
            >
                <div
                    class="fixed inset-0 bg-overlay-backdrop"
                    data-testid="search-overlay"
                    on:click={
                        let close = close_on_overlay.clone();
                        move |_| close()
                    }
                ></div>
                <div class="relative flex justify-center p-4 pt-16 sm:pt-24">
                    <div
                        class="relative w-full max-w-2xl rounded-xl bg-surface-elevated shadow-2xl"
                        role="dialog"
                        aria-modal="true"
                    >
                        <div class="flex items-center p-4 border-b border-border">
                            <input
                                type="text"
                                autofocus
                                class="flex-1 bg-transparent text-lg text-fg focus:outline-none"
                                placeholder="Search posts and projects..."
                                prop:value=move || query.get()
                                on:input=on_input.clone()
                            />
                            <button
                                type="button"
                                aria-label="Close search"
                                class="ml-3 text-fg-muted hover:text-fg"
                                on:click={
                                    let close = close_on_button.clone();
                                    move |_| close()
                                }
                            >
                                "✕"
                            </button>
                        </div>
                        <div class="max-h-96 overflow-y-auto">
                            {move || render_phase(phase.get())}
                        </div>
                        <div class="px-4 py-2 border-t border-border text-xs text-fg-muted">
                            {move || match phase.get() {
                                SearchPhase::Results(results) => result_count_label(results.len()),
                                _ => "Press Esc to close".to_string(),
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn render_phase(phase: SearchPhase) -> View {
    match phase {
        SearchPhase::Hint => view! {
            <p class="p-8 text-center text-fg-muted">
                {format!("Type at least {MIN_QUERY_CHARS} characters to search")}
            </p>
        }
        .into_view(),
        SearchPhase::Searching => view! {
            <p class="p-8 text-center text-fg-muted">"Searching..."</p>
        }
        .into_view(),
        SearchPhase::Failed(message) => view! {
            <p class="p-8 text-center text-status-error-text">{message}</p>
        }
        .into_view(),
        SearchPhase::Results(results) if results.is_empty() => view! {
            <p class="p-8 text-center text-fg-muted">"No matches found"</p>
        }
        .into_view(),
        SearchPhase::Results(results) => view! {
            <ul class="divide-y divide-border">
                {results
                    .into_iter()
                    .map(|hit| {
                        let labels = hit
                            .tags
                            .clone()
                            .or_else(|| hit.tech_stack.clone())
                            .unwrap_or_default();
                        view! {
                            <li>
                                <a href=hit.url.clone() class="block p-4 hover:bg-surface-muted">
                                    <div class="flex items-center gap-2 text-xs text-fg-muted">
                                        <span class="font-semibold uppercase">{kind_label(hit.kind)}</span>
                                        {hit.category.clone().map(|c| view! { <span>{c}</span> })}
                                        <span>{hit.date.clone()}</span>
                                    </div>
                                    <div class="font-medium text-fg">{hit.title.clone()}</div>
                                    <p class="text-sm text-fg-muted line-clamp-2">{hit.description.clone()}</p>
                                    <div class="mt-1 flex flex-wrap gap-1">
                                        {labels
                                            .into_iter()
                                            .map(|label| view! {
                                                <span class="text-xs px-2 py-0.5 rounded bg-surface-muted">{label}</span>
                                            })
                                            .collect_view()}
                                    </div>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_are_not_searchable() {
        assert!(!is_searchable(""));
        assert!(!is_searchable(" a "));
        assert!(is_searchable("ai"));
        assert!(is_searchable("웹앱"));
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(result_count_label(0), "0 results");
        assert_eq!(result_count_label(1), "1 result");
        assert_eq!(result_count_label(8), "8 results");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_to_string(|| {
            let open = create_rw_signal(false);
            view! { <SearchModal open=open /> }
        });
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn open_modal_starts_with_hint() {
        let html = render_to_string(|| {
            let open = create_rw_signal(true);
            view! { <SearchModal open=open /> }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Type at least 2 characters"));
        assert!(html.contains("search-overlay"));
    }

    #[test]
    fn results_list_links_each_hit() {
        let html = render_to_string(|| {
            render_phase(SearchPhase::Results(vec![SearchResult {
                kind: SearchKind::Post,
                id: 3,
                title: "AWS deployment guide".into(),
                description: "Shipping with ECS".into(),
                url: "/blog/3".into(),
                category: Some("DevOps".into()),
                tags: Some(vec!["AWS".into()]),
                tech_stack: None,
                date: "2025-10-05".into(),
            }]))
        });
        assert!(html.contains("href=\"/blog/3\""));
        assert!(html.contains("DevOps"));
        assert!(html.contains("AWS deployment guide"));
    }
}
