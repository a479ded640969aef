pub mod detail;
pub mod list;
pub mod repository;

pub use detail::ProjectDetailPage;
pub use list::ProjectListPage;
