use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for the file-backed styles store.
    pub styles_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let styles_dir = match std::env::var("STYLES_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_styles_dir(),
        };

        Ok(Config {
            styles_dir,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Platform data directory when available, local `./data/styles` otherwise
/// (containers without XDG dirs).
fn default_styles_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("persona").join("styles"))
        .unwrap_or_else(|| PathBuf::from("data/styles"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_dir_is_non_empty() {
        let dir = default_styles_dir();
        assert!(!dir.as_os_str().is_empty());
    }
}
