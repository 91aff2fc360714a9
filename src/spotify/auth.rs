use std::time::Duration;

use reqwest::Url;

use crate::{
    config,
    error::{DjError, Result},
    info,
    server::CallbackServer,
    success,
    types::Token,
    utils, warning,
};

use super::http_client;

/// Application credentials and endpoints needed for the authorization code grant.
#[derive(Debug, Clone)]
pub struct OAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub redirect_uri: String,
    pub scope: String,
}

impl OAuthSettings {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: config::client_id()?,
            client_secret: config::client_secret()?,
            auth_url: config::auth_url(),
            token_url: config::token_url(),
            redirect_uri: config::redirect_uri(),
            scope: config::SCOPES.to_string(),
        })
    }
}

/// Builds the URL the user opens to grant access.
///
/// # Errors
///
/// Fails with [`DjError::Config`] when the configured authorization URL is
/// not a valid URL.
pub fn authorize_url(settings: &OAuthSettings, state: &str) -> Result<String> {
    let url = Url::parse_with_params(
        &settings.auth_url,
        &[
            ("client_id", settings.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", settings.redirect_uri.as_str()),
            ("scope", settings.scope.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| DjError::Config(format!("invalid authorization URL: {}", e)))?;
    Ok(url.into())
}

/// Runs the interactive browser flow and returns the authorization code.
///
/// 1. **State**: Generates a random `state` value tying the redirect to this run
/// 2. **Listener**: Starts the one-shot callback listener
/// 3. **Browser Launch**: Opens the authorization URL in the default browser,
///    or prints it when no browser can be launched
/// 4. **Callback**: Waits for the redirect, bounded by `timeout`
///
/// The listener is shut down as soon as the redirect arrives or the wait
/// times out.
pub async fn authorize_interactively(settings: &OAuthSettings, timeout: Duration) -> Result<String> {
    let state = utils::generate_state();
    let auth_url = authorize_url(settings, &state)?;

    let server = CallbackServer::start(&config::callback_addr(), config::CALLBACK_PATH, state).await?;
    info!("Waiting for the Spotify authorization on {}", server.local_addr());

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let code = server.wait_for_code(timeout).await?;
    success!("Authorization received");
    Ok(code)
}

/// Exchanges an authorization code for an access token.
///
/// Authenticates with the client id and secret via HTTP basic auth, as the
/// authorization code grant requires for confidential clients.
///
/// # Errors
///
/// Any non-success answer from the token endpoint, or a response without an
/// access token, is reported as [`DjError::Auth`]. Network failures are
/// [`DjError::Transport`].
pub async fn exchange_code(settings: &OAuthSettings, code: &str, timeout: Duration) -> Result<Token> {
    let client = http_client(timeout)?;
    let response = client
        .post(&settings.token_url)
        .basic_auth(&settings.client_id, Some(&settings.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", settings.redirect_uri.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DjError::Auth(format!(
            "authorization code exchange failed ({}): {}",
            status,
            body.trim()
        )));
    }

    let token = response
        .json::<Token>()
        .await
        .map_err(|e| DjError::Auth(format!("malformed token response: {}", e)))?;

    if token.access_token.is_empty() {
        return Err(DjError::Auth("token response carried no access token".to_string()));
    }

    Ok(token)
}

/// Resolves the access token for this run.
///
/// Resolution order:
/// 1. `DJ_LAZY_ACCESS_TOKEN` is used as-is
/// 2. `DJ_LAZY_SPOTIFY_AUTHORIZATION` is exchanged without the browser
/// 3. The interactive browser flow
pub async fn resolve_token() -> Result<Token> {
    if let Some(access_token) = config::access_token() {
        info!("Using access token from DJ_LAZY_ACCESS_TOKEN");
        return Ok(Token {
            access_token,
            refresh_token: None,
            scope: config::SCOPES.to_string(),
            expires_in: 0,
        });
    }

    let settings = OAuthSettings::from_env()?;
    let code = match config::authorization_code() {
        Some(code) => {
            info!("Using authorization code from DJ_LAZY_SPOTIFY_AUTHORIZATION");
            code
        }
        None => authorize_interactively(&settings, config::auth_timeout()).await?,
    };

    exchange_code(&settings, &code, config::http_timeout()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> OAuthSettings {
        OAuthSettings {
            client_id: "client-1".to_string(),
            client_secret: "secret".to_string(),
            auth_url: "https://accounts.example.com/authorize".to_string(),
            token_url: "https://accounts.example.com/api/token".to_string(),
            redirect_uri: "http://localhost:8085/spotify-auth".to_string(),
            scope: config::SCOPES.to_string(),
        }
    }

    #[test]
    fn authorize_url_carries_all_parameters() {
        let url = Url::parse(&authorize_url(&settings(), "xyz").unwrap()).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(pairs.contains(&("client_id".to_string(), "client-1".to_string())));
        assert!(pairs.contains(&("response_type".to_string(), "code".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "http://localhost:8085/spotify-auth".to_string()
        )));
        assert!(pairs.contains(&(
            "scope".to_string(),
            "playlist-modify-public playlist-modify-private".to_string()
        )));
        assert!(pairs.contains(&("state".to_string(), "xyz".to_string())));
    }

    #[test]
    fn invalid_authorize_url_is_a_config_error() {
        let mut bad = settings();
        bad.auth_url = "not a url".to_string();
        assert!(matches!(authorize_url(&bad, "xyz"), Err(DjError::Config(_))));
    }
}
