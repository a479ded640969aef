pub mod authoring;
pub mod dashboard;
pub mod search;
