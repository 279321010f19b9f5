//! Query-flag page and todo list row components for Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, Result};
