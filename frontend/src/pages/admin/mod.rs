pub mod dashboard;
pub mod layout;
pub mod post_editor;
pub mod posts;
pub mod profile;
pub mod project_editor;
pub mod projects;
pub mod repository;

pub use dashboard::AdminDashboardPage;
pub use post_editor::PostEditorPage;
pub use posts::AdminPostsPage;
pub use profile::ProfileSettingsPage;
pub use project_editor::ProjectEditorPage;
pub use projects::AdminProjectsPage;
