pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod insights;
pub mod middleware;
pub mod records;
pub mod server;
