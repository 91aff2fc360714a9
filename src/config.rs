//! Configuration management for DJ Lazy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Required values return a
//! [`DjError::Config`] when missing instead of panicking, so a bad setup ends
//! the run through the same error path as every other failure.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, io::ErrorKind, path::PathBuf, time::Duration};

use crate::error::{DjError, Result};

pub const CALLBACK_PORT: u16 = 8085;
pub const CALLBACK_PATH: &str = "/spotify-auth";
pub const SCOPES: &str = "playlist-modify-public playlist-modify-private";

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_LISTING_URL: &str = "https://www.allmusic.com/newreleases";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 300;

/// Loads environment variables from `.env` files.
///
/// Looks in the working directory first and then in the platform-specific
/// local data directory under `djlazy/.env`, creating that directory when it
/// does not exist yet. Values already present in the process environment are
/// never overwritten. A missing file is not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/djlazy/.env`
/// - macOS: `~/Library/Application Support/djlazy/.env`
/// - Windows: `%LOCALAPPDATA%/djlazy/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<()> {
    check_loaded(dotenv::dotenv(), ".env in the working directory")?;

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("djlazy/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    check_loaded(dotenv::from_path(&path), &path.display().to_string())
}

/// A missing file is fine; anything else means a file exists but is unusable.
fn check_loaded<T>(loaded: std::result::Result<T, dotenv::Error>, origin: &str) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DjError::Config(format!("cannot load {}: {}", origin, e))),
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(DjError::Config(format!(
            "Missing {name}\nEnsure you have DJ_LAZY_CLIENT_ID and DJ_LAZY_CLIENT_SECRET set as ENV variables"
        ))),
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn seconds(name: &str, default: u64) -> Duration {
    let secs = optional(name)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default);
    Duration::from_secs(secs)
}

/// Returns the Spotify application client ID (`DJ_LAZY_CLIENT_ID`).
pub fn client_id() -> Result<String> {
    required("DJ_LAZY_CLIENT_ID")
}

/// Returns the Spotify application client secret (`DJ_LAZY_CLIENT_SECRET`).
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn client_secret() -> Result<String> {
    required("DJ_LAZY_CLIENT_SECRET")
}

/// Returns a pre-obtained bearer token (`DJ_LAZY_ACCESS_TOKEN`), if any.
///
/// When present the OAuth exchange is skipped entirely.
pub fn access_token() -> Option<String> {
    optional("DJ_LAZY_ACCESS_TOKEN")
}

/// Returns a pre-obtained authorization code (`DJ_LAZY_SPOTIFY_AUTHORIZATION`).
///
/// The code is exchanged for a token without opening the browser. Codes are
/// single-use, so this only helps for one run.
pub fn authorization_code() -> Option<String> {
    optional("DJ_LAZY_SPOTIFY_AUTHORIZATION")
}

/// Returns the Spotify Web API base URL (`DJ_LAZY_API_URL`).
pub fn api_url() -> String {
    optional("DJ_LAZY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the OAuth authorization URL (`DJ_LAZY_AUTH_URL`).
pub fn auth_url() -> String {
    optional("DJ_LAZY_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string())
}

/// Returns the OAuth token exchange URL (`DJ_LAZY_TOKEN_URL`).
pub fn token_url() -> String {
    optional("DJ_LAZY_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the new-releases listing page (`DJ_LAZY_LISTING_URL`).
pub fn listing_url() -> String {
    optional("DJ_LAZY_LISTING_URL").unwrap_or_else(|| DEFAULT_LISTING_URL.to_string())
}

/// Per-request timeout for every outgoing HTTP call (`DJ_LAZY_HTTP_TIMEOUT_SECS`).
pub fn http_timeout() -> Duration {
    seconds("DJ_LAZY_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)
}

/// How long the callback listener waits for the browser (`DJ_LAZY_AUTH_TIMEOUT_SECS`).
pub fn auth_timeout() -> Duration {
    seconds("DJ_LAZY_AUTH_TIMEOUT_SECS", DEFAULT_AUTH_TIMEOUT_SECS)
}

/// Address the callback listener binds to.
pub fn callback_addr() -> String {
    format!("127.0.0.1:{}", CALLBACK_PORT)
}

/// Redirect URI registered with the Spotify application.
pub fn redirect_uri() -> String {
    format!("http://localhost:{}{}", CALLBACK_PORT, CALLBACK_PATH)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn temp_env_file(name: &str, contents: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("djlazy-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn malformed_env_file_is_a_config_error() {
        let path = temp_env_file("malformed", "DJ_LAZY_BROKEN value-without-equals\n");

        let err = check_loaded(dotenv::from_path(&path), "test .env").unwrap_err();

        assert!(matches!(err, DjError::Config(msg) if msg.contains("test .env")));
        assert!(env::var("DJ_LAZY_BROKEN").is_err());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let path = env::temp_dir().join("djlazy-config-missing").join(".env");

        assert!(check_loaded(dotenv::from_path(&path), "missing .env").is_ok());
    }

    #[test]
    fn well_formed_env_file_loads() {
        let path = temp_env_file("valid", "DJ_LAZY_CONFIG_TEST_VALUE=loaded\n");

        check_loaded(dotenv::from_path(&path), "test .env").unwrap();

        assert_eq!(env::var("DJ_LAZY_CONFIG_TEST_VALUE").unwrap(), "loaded");
        fs::remove_file(&path).unwrap();
    }
}
