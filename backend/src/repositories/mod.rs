pub mod content;
pub mod profile;
pub mod repository;
pub mod user;

pub use content::*;
pub use profile::*;
pub use repository::*;
pub use user::*;
