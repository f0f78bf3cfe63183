pub mod analytics;
pub mod colors;
pub mod filter;
