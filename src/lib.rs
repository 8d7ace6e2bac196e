pub mod api;
pub mod cli;
pub mod error;
pub mod github;
pub mod https;
pub mod models;
pub mod types;
