#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    models::{
        dashboard::DashboardStats,
        post::{
            CreatePostRequest, Post, PostDetailResponse, PostLink, PostListQuery, PostSummary,
            PostViewResponse, TitleSearchQuery, UpdatePostRequest,
        },
        profile::{Profile, SkillGroup, TimelineEntry, TimelineKind},
        project::{
            CreateProjectRequest, Project, ProjectListQuery, ProjectStatus, UpdateProjectRequest,
        },
        search::{SearchKind, SearchQuery, SearchResult},
        user::{LoginRequest, RefreshTokenRequest, RegisterRequest, TokenResponse, UserResponse},
        MessageResponse,
    },
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        register_doc,
        login_doc,
        refresh_doc,
        me_doc,
        logout_doc,
        list_posts_doc,
        list_categories_doc,
        get_post_doc,
        record_view_doc,
        list_projects_doc,
        get_project_doc,
        search_doc,
        get_profile_doc,
        admin_dashboard_doc,
        admin_list_posts_doc,
        admin_get_post_doc,
        admin_create_post_doc,
        admin_update_post_doc,
        admin_delete_post_doc,
        admin_list_projects_doc,
        admin_create_project_doc,
        admin_update_project_doc,
        admin_delete_project_doc,
        admin_update_profile_doc
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            // auth
            RegisterRequest,
            LoginRequest,
            RefreshTokenRequest,
            TokenResponse,
            UserResponse,
            // posts
            Post,
            PostSummary,
            PostLink,
            PostDetailResponse,
            PostViewResponse,
            CreatePostRequest,
            UpdatePostRequest,
            // projects
            Project,
            ProjectStatus,
            CreateProjectRequest,
            UpdateProjectRequest,
            // search
            SearchKind,
            SearchResult,
            // profile & dashboard
            Profile,
            SkillGroup,
            TimelineEntry,
            TimelineKind,
            DashboardStats
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Accounts and tokens"),
        (name = "Posts", description = "Blog posts"),
        (name = "Projects", description = "Portfolio projects"),
        (name = "Search", description = "Search across posts and projects"),
        (name = "Profile", description = "Author profile"),
        (name = "Admin", description = "Authoring endpoints for superusers")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email or username taken", body = ErrorResponse)
    ),
    tag = "Auth",
    security(())
)]
fn register_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token pair", body = TokenResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse)
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "New access token", body = TokenResponse),
        (status = 401, description = "Invalid refresh token", body = ErrorResponse)
    ),
    tag = "Auth",
    security(())
)]
fn refresh_doc() {}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Auth"
)]
fn me_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Logged out", body = MessageResponse)),
    tag = "Auth"
)]
fn logout_doc() {}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(PostListQuery),
    responses((status = 200, description = "Published posts, newest first", body = [PostSummary])),
    tag = "Posts",
    security(())
)]
fn list_posts_doc() {}

#[utoipa::path(
    get,
    path = "/api/posts/categories",
    responses((status = 200, description = "`All` followed by each category", body = [String])),
    tag = "Posts",
    security(())
)]
fn list_categories_doc() {}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with neighbour links", body = PostDetailResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(())
)]
fn get_post_doc() {}

#[utoipa::path(
    post,
    path = "/api/posts/{id}/view",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Updated view count", body = PostViewResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(())
)]
fn record_view_doc() {}

#[utoipa::path(
    get,
    path = "/api/projects",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "Projects", body = [Project]),
        (status = 400, description = "Unknown filter", body = ErrorResponse)
    ),
    tag = "Projects",
    security(())
)]
fn list_projects_doc() {}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = Project),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    tag = "Projects",
    security(())
)]
fn get_project_doc() {}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses((status = 200, description = "At most eight hits, title matches first", body = [SearchResult])),
    tag = "Search",
    security(())
)]
fn search_doc() {}

#[utoipa::path(
    get,
    path = "/api/profile",
    responses((status = 200, description = "Author profile", body = Profile)),
    tag = "Profile",
    security(())
)]
fn get_profile_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Totals and recent content", body = DashboardStats),
        (status = 403, description = "Not a superuser")
    ),
    tag = "Admin"
)]
fn admin_dashboard_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/posts",
    params(TitleSearchQuery),
    responses((status = 200, description = "All posts including drafts", body = [PostSummary])),
    tag = "Admin"
)]
fn admin_list_posts_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post including drafts", body = Post),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn admin_get_post_doc() {}

#[utoipa::path(
    post,
    path = "/api/admin/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Created", body = Post),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn admin_create_post_doc() {}

#[utoipa::path(
    put,
    path = "/api/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated", body = Post),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn admin_update_post_doc() {}

#[utoipa::path(
    delete,
    path = "/api/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn admin_delete_post_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/projects",
    params(TitleSearchQuery),
    responses((status = 200, description = "Projects", body = [Project])),
    tag = "Admin"
)]
fn admin_list_projects_doc() {}

#[utoipa::path(
    post,
    path = "/api/admin/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Created", body = Project),
        (status = 400, description = "Validation failed or dates out of order", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn admin_create_project_doc() {}

#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Updated", body = Project),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn admin_update_project_doc() {}

#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn admin_delete_project_doc() {}

#[utoipa::path(
    put,
    path = "/api/admin/profile",
    request_body = Profile,
    responses(
        (status = 200, description = "Saved profile", body = Profile),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn admin_update_profile_doc() {}
