//! Host-side rendering helpers. Resources never load here, so views render
//! their loading or fallback branches unless data is passed in directly.

use crate::api::UserResponse;
use crate::test_support::helpers::provide_auth;
use leptos::*;

/// Re-enables resource loading even if the render panics.
struct SuppressedResources;

impl SuppressedResources {
    fn enter() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for SuppressedResources {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _guard = SuppressedResources::enter();
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// Renders with a settled session for `user` (or a signed-out visitor).
pub fn render_as<F, N>(user: Option<UserResponse>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_auth(user, false);
        view()
    })
}
