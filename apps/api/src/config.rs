use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::completion::CategoryTable;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON category table replacing the built-in one.
    pub table_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            table_path: std::env::var_os("COMPLETION_TABLE_PATH").map(PathBuf::from),
        })
    }

    /// Builds the category table, failing startup on an unreadable or invalid file.
    pub fn load_table(&self) -> Result<CategoryTable> {
        match &self.table_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read category table '{}'", path.display())
                })?;
                CategoryTable::from_json(&raw)
                    .with_context(|| format!("Invalid category table '{}'", path.display()))
            }
            None => CategoryTable::builtin().context("Built-in category table is invalid"),
        }
    }
}
