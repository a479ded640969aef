use crate::{
    components::search_modal::SearchModal,
    state::{
        auth::{self, use_auth},
        theme::use_theme,
    },
    utils::navigation,
};
use leptos::*;

pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/blog", "Blog"),
    ("/projects", "Projects"),
    ("/about", "About"),
];

const NAV_LINK_CLASS: &str = "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let theme = use_theme();
    let (menu_open, set_menu_open) = create_signal(false);
    let search_open = create_rw_signal(false);
    let is_admin = move || auth.get().is_admin();
    let is_authenticated = move || auth.get().is_authenticated;

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            navigation::redirect_to("/");
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };

    view! {
        <header class="sticky top-0 z-40 bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-bold text-fg">"Devlog"</a>
                    <div class="flex items-center gap-2">
                        <nav class="hidden md:flex space-x-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|(href, label)| view! { <a href=*href class=NAV_LINK_CLASS>{*label}</a> })
                                .collect_view()}
                            <Show when=is_admin>
                                <a href="/admin" class=NAV_LINK_CLASS>"Admin"</a>
                            </Show>
                        </nav>
                        <button
                            type="button"
                            class=NAV_LINK_CLASS
                            aria-label="Search"
                            on:click=move |_| search_open.set(true)
                        >
                            "Search"
                        </button>
                        <button
                            type="button"
                            class=NAV_LINK_CLASS
                            aria-label="Toggle theme"
                            on:click=move |_| theme.toggle()
                        >
                            {move || if theme.is_dark() { "Light" } else { "Dark" }}
                        </button>
                        <Show
                            when=is_authenticated
                            fallback=|| view! { <a href="/login" class=NAV_LINK_CLASS>"Login"</a> }
                        >
                            <button
                                type="button"
                                class=NAV_LINK_CLASS
                                disabled=move || logout_pending.get()
                                on:click=on_logout
                            >
                                "Logout"
                            </button>
                        </Show>
                        <button
                            type="button"
                            class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg"
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "Close" } else { "Menu" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="md:hidden border-t border-border px-2 py-3 space-y-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=*href
                                        class="block px-3 py-2 rounded-md text-fg-muted hover:text-fg"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
            <SearchModal open=search_open />
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border py-8 text-center text-sm text-fg-muted">
            "Devlog · notes on building software"
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-surface text-fg">
            <Header />
            <main class="flex-1 max-w-6xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {children()}
            </main>
            <Footer />
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            {message}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, regular_user};
    use crate::test_support::ssr::{render_as, render_to_string};

    #[test]
    fn header_shows_admin_link_for_admins_only() {
        let html = render_as(Some(admin_user()), || view! { <Header /> });
        assert!(html.contains("href=\"/admin\""));
        assert!(html.contains("Logout"));

        let html = render_as(Some(regular_user()), || view! { <Header /> });
        assert!(!html.contains("href=\"/admin\""));
    }

    #[test]
    fn header_offers_login_when_signed_out() {
        let html = render_as(None, || view! { <Header /> });
        assert!(html.contains("href=\"/login\""));
        for (href, _) in NAV_ITEMS {
            assert!(html.contains(&format!("href=\"{href}\"")));
        }
    }

    #[test]
    fn spinner_and_error_render() {
        let html = render_to_string(|| view! { <LoadingSpinner /> });
        assert!(html.contains("animate-spin"));
        let html = render_to_string(|| view! { <ErrorMessage message="Boom" /> });
        assert!(html.contains("Boom"));
    }
}
