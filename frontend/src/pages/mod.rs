pub mod about;
pub mod admin;
pub mod blog;
pub mod home;
pub mod login;
pub mod not_found;
pub mod projects;

pub use about::AboutPage;
pub use blog::{BlogDetailPage, BlogListPage};
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use projects::{ProjectDetailPage, ProjectListPage};
