use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="py-24 text-center space-y-4">
                <p class="text-6xl font-extrabold text-fg-muted">"404"</p>
                <h1 class="text-2xl font-bold text-fg">"Page not found"</h1>
                <a href="/" class="inline-block text-action-primary-bg hover:underline">"Go home"</a>
            </div>
        </Layout>
    }
}
