#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Post, Project, ProjectStatus, UserResponse};
    use crate::state::auth::AuthState;
    use chrono::NaiveDate;
    use leptos::*;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: 1,
            username: "admin".into(),
            email: "admin@example.com".into(),
            is_active: true,
            is_superuser: true,
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: 2,
            username: "reader".into(),
            email: "reader@example.com".into(),
            is_active: true,
            is_superuser: false,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn sample_post(id: i64, title: &str, category: &str) -> Post {
        Post {
            id,
            title: title.into(),
            excerpt: format!("About {title}"),
            content: Some(format!("# {title}\n\nBody text.")),
            cover_image: format!("https://images.example.com/{id}.png"),
            category: category.into(),
            tags: vec![category.to_string(), "Notes".into()],
            created_at: NaiveDate::from_ymd_opt(2025, 10, 10).unwrap(),
            read_time: 4,
            view_count: Some(120),
            published: Some(true),
        }
    }

    pub fn sample_project(id: i64, title: &str, status: ProjectStatus, featured: bool) -> Project {
        Project {
            id,
            title: title.into(),
            description: format!("{title} description"),
            detail_content: None,
            thumbnail: String::new(),
            images: None,
            tech_stack: vec!["Rust".into(), "Leptos".into()],
            role: "Full Stack Developer".into(),
            team_size: Some(1),
            github_url: Some("https://github.com/example/devlog".into()),
            live_url: None,
            start_date: "2025-10".into(),
            end_date: None,
            status,
            featured,
        }
    }
}
