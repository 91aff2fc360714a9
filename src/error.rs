use reqwest::{Response, StatusCode};
use thiserror::Error;

/// Error types for a playlist run.
///
/// Every stage of a run propagates these unmodified; nothing is retried
/// locally. The first failure ends the run and is printed together with the
/// stage it happened in.
#[derive(Error, Debug)]
pub enum DjError {
    /// Bad or missing credential, or a failed OAuth exchange.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The listing page was unreachable or could not be parsed.
    #[error("Scraping failed: {0}")]
    Scrape(String),

    /// The catalog API answered 429 Too Many Requests.
    ///
    /// `retry_after` holds the `Retry-After` header in seconds, or 0 when the
    /// header was absent.
    #[error("Rate limited by the catalog API, retry after {retry_after} seconds")]
    RateLimit { retry_after: u64 },

    /// Connection failures, timeouts and unexpected HTTP statuses.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Missing or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for DjError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DjError::Transport(format!("request timed out: {}", err))
        } else {
            DjError::Transport(err.to_string())
        }
    }
}

/// A convenient Result type alias for operations that may fail.
pub type Result<T> = std::result::Result<T, DjError>;

/// Maps a non-success catalog response onto the matching error kind.
///
/// 429 becomes [`DjError::RateLimit`], 401 and 403 become [`DjError::Auth`],
/// every other non-2xx status becomes [`DjError::Transport`] with the body
/// text attached.
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);
        return Err(DjError::RateLimit { retry_after });
    }

    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(DjError::Auth(format!("{}: {}", status, body.trim())))
        }
        _ => Err(DjError::Transport(format!("{}: {}", status, body.trim()))),
    }
}
