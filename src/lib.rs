pub mod category;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod form_utils;
pub mod models;
pub mod pagination;
pub mod params;
pub mod services;
pub mod sort_utils;
pub mod view_model;

/// Crate version from Cargo.toml (single source of truth)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
