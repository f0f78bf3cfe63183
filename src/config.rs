use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON store snapshot to derive the dashboard from.
    pub data_path: PathBuf,
    /// Initial view state as a query string, e.g. `type=expense&sort=amount&dir=asc`.
    pub query: String,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/transactions.json"),
            query: String::new(),
            pretty: false,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let pretty = match env::var("FINBOARD_PRETTY") {
            Ok(v) => parse_flag(&v)?,
            Err(_) => defaults.pretty,
        };

        Ok(Self {
            data_path: env::var("FINBOARD_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            query: env::var("FINBOARD_QUERY").unwrap_or(defaults.query),
            pretty,
        })
    }

    /// Positional arguments override the environment: data path, then query.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(path) = args.next() {
            self.data_path = PathBuf::from(path);
        }
        if let Some(query) = args.next() {
            self.query = query;
        }
        self
    }
}

fn parse_flag(value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "FINBOARD_PRETTY must be a boolean flag, got: {}",
            other
        ))),
    }
}
