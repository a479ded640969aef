pub mod app;
pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod state;
pub mod utils;
pub mod validation;

pub use app::build_router;
pub use state::AppState;
