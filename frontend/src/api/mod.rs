mod auth;
pub mod client;
mod paging;
mod posts;
mod projects;
mod site;
pub mod types;

pub use client::*;
pub use paging::{collect_pages, PAGE_LIMIT};
pub use posts::PostQuery;
pub use projects::ProjectQuery;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
