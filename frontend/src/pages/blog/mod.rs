pub mod detail;
pub mod list;
pub mod repository;

pub use detail::BlogDetailPage;
pub use list::BlogListPage;
