use crate::components::layout::Layout;
use leptos::*;

pub const ADMIN_NAV: [(&str, &str); 4] = [
    ("/admin", "Dashboard"),
    ("/admin/posts", "Posts"),
    ("/admin/projects", "Projects"),
    ("/admin/profile", "Profile"),
];

/// The sidebar entry for `path`: exact match for the dashboard, prefix match
/// for the sections so editors highlight their list.
pub fn is_active_section(section: &str, path: &str) -> bool {
    if section == "/admin" {
        path == "/admin" || path == "/admin/"
    } else {
        path == section || path.starts_with(&format!("{section}/"))
    }
}

#[component]
pub fn AdminLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let path = crate::utils::navigation::current_path().unwrap_or_default();
    view! {
        <Layout>
            <div class="flex flex-col gap-8 md:flex-row">
                <aside class="md:w-48 shrink-0">
                    <nav class="flex md:flex-col gap-1">
                        {ADMIN_NAV
                            .iter()
                            .map(|(href, label)| {
                                let class = if is_active_section(href, &path) {
                                    "px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                } else {
                                    "px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:bg-surface-muted"
                                };
                                view! { <a href=*href class=class>{*label}</a> }
                            })
                            .collect_view()}
                    </nav>
                </aside>
                <section class="flex-1 space-y-6">
                    <h1 class="text-2xl font-bold text-fg">{title}</h1>
                    {children()}
                </section>
            </div>
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::admin_user;
    use crate::test_support::ssr::render_as;

    #[test]
    fn sidebar_lists_every_admin_section() {
        let html = render_as(Some(admin_user()), || {
            view! { <AdminLayout title="Dashboard">"body"</AdminLayout> }
        });
        for (href, _) in ADMIN_NAV {
            assert!(html.contains(&format!("href=\"{href}\"")));
        }
        assert!(html.contains("body"));
    }
}
