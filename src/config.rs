//! Configuration management for the URL shortener client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default, so the client works
//! against a local backend without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (handled by the CLI, highest priority)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_SHORT_BASE: &str = "http://short.url/";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `shorturl/.env` under the platform-specific local data directory:
/// - Linux: `~/.local/share/shorturl/.env`
/// - macOS: `~/Library/Application Support/shorturl/.env`
/// - Windows: `%LOCALAPPDATA%/shorturl/.env`
///
/// A missing `.env` file is not an error; variables already present in the
/// environment always win over the file.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or if an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shorturl/.env");
    path
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Returns the base URL of the shortening backend.
///
/// Reads `SHORTURL_API_URL`, e.g. `https://sho.rt`. Trailing slashes are
/// stripped so endpoint paths can be appended directly.
pub fn api_url() -> String {
    var_or("SHORTURL_API_URL", DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Returns the bind address of the reference backend (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the prefix put in front of generated short codes (`SHORTURL_BASE`).
pub fn short_base() -> String {
    var_or("SHORTURL_BASE", DEFAULT_SHORT_BASE)
}
