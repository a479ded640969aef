use crate::{components::layout::LoadingSpinner, state::auth::use_auth, utils::navigation};
use leptos::*;

/// Where an admin-only page sends a visitor who may not see it.
pub fn admin_redirect_target(is_loading: bool, is_authenticated: bool, is_admin: bool) -> Option<&'static str> {
    if is_loading {
        None
    } else if !is_authenticated {
        Some(navigation::LOGIN_PATH)
    } else if !is_admin {
        Some("/")
    } else {
        None
    }
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| auth.get().is_admin());
    create_effect(move |_| {
        if let Some(target) =
            admin_redirect_target(is_loading.get(), is_authenticated.get(), is_admin.get())
        {
            navigation::redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAdmin;
    use crate::api::UserResponse;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::{render_as, render_to_string};
    use leptos::*;

    fn guarded(user: Option<UserResponse>) -> String {
        render_as(user, || {
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        })
    }

    #[test]
    fn admin_sees_the_protected_page() {
        assert!(guarded(Some(admin_user())).contains("admin-protected"));
    }

    #[test]
    fn regular_user_and_visitor_see_nothing() {
        let html = guarded(Some(regular_user()));
        assert!(!html.contains("admin-protected"));

        let html = guarded(None);
        assert!(!html.contains("admin-protected"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn spinner_shows_while_the_session_check_runs() {
        let html = render_to_string(|| {
            provide_auth(None, true);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("admin-protected"));
    }
}
