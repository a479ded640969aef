use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::RequireAdmin,
    pages::{
        admin::{
            AdminDashboardPage, AdminPostsPage, AdminProjectsPage, PostEditorPage,
            ProfileSettingsPage, ProjectEditorPage,
        },
        AboutPage, BlogDetailPage, BlogListPage, HomePage, LoginPage, NotFoundPage,
        ProjectDetailPage, ProjectListPage,
    },
    state::{auth::AuthProvider, theme::provide_theme},
};

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/blog",
    "/blog/:id",
    "/projects",
    "/projects/:id",
    "/about",
    "/login",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin",
    "/admin/posts",
    "/admin/posts/new",
    "/admin/posts/:id/edit",
    "/admin/projects",
    "/admin/projects/new",
    "/admin/projects/:id/edit",
    "/admin/profile",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    provide_theme();
    view! {
        <Title formatter=|page: String| if page.is_empty() { "Devlog".to_string() } else { format!("{page} | Devlog") } />
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/blog" view=BlogListPage/>
                    <Route path="/blog/:id" view=BlogDetailPage/>
                    <Route path="/projects" view=ProjectListPage/>
                    <Route path="/projects/:id" view=ProjectDetailPage/>
                    <Route path="/about" view=AboutPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/admin" view=AdminDashboard/>
                    <Route path="/admin/posts" view=AdminPosts/>
                    <Route path="/admin/posts/new" view=AdminPostEditor/>
                    <Route path="/admin/posts/:id/edit" view=AdminPostEditor/>
                    <Route path="/admin/projects" view=AdminProjects/>
                    <Route path="/admin/projects/new" view=AdminProjectEditor/>
                    <Route path="/admin/projects/:id/edit" view=AdminProjectEditor/>
                    <Route path="/admin/profile" view=AdminProfile/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    view! { <RequireAdmin><AdminDashboardPage/></RequireAdmin> }
}

#[component]
fn AdminPosts() -> impl IntoView {
    view! { <RequireAdmin><AdminPostsPage/></RequireAdmin> }
}

#[component]
fn AdminPostEditor() -> impl IntoView {
    view! { <RequireAdmin><PostEditorPage/></RequireAdmin> }
}

#[component]
fn AdminProjects() -> impl IntoView {
    view! { <RequireAdmin><AdminProjectsPage/></RequireAdmin> }
}

#[component]
fn AdminProjectEditor() -> impl IntoView {
    view! { <RequireAdmin><ProjectEditorPage/></RequireAdmin> }
}

#[component]
fn AdminProfile() -> impl IntoView {
    view! { <RequireAdmin><ProfileSettingsPage/></RequireAdmin> }
}
