pub mod auth;
pub mod dashboard;
pub mod posts;
pub mod profile;
pub mod projects;
pub mod search;
