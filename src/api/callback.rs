use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::{Mutex, Notify, oneshot};

use crate::{error::DjError, warning};

/// Outcome of the OAuth redirect: the authorization code or the reason it failed.
pub type CallbackOutcome = Result<String, DjError>;

/// Shared state between the callback handler and the waiting listener.
///
/// The sender is taken by the first request that carries an answer, so the
/// rendezvous resolves exactly once.
pub struct CallbackState {
    pub expected_state: String,
    pub sender: Mutex<Option<oneshot::Sender<CallbackOutcome>>>,
    pub shutdown: Notify,
}

impl CallbackState {
    pub fn new(expected_state: String, sender: oneshot::Sender<CallbackOutcome>) -> Self {
        Self {
            expected_state,
            sender: Mutex::new(Some(sender)),
            shutdown: Notify::new(),
        }
    }
}

const CLOSE_WINDOW: &str = "<h2>Authentication successful.</h2><script>window.close();</script>";

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<CallbackState>>,
) -> Html<&'static str> {
    let (outcome, page) = evaluate(&params, &shared_state.expected_state);

    let Some(sender) = shared_state.sender.lock().await.take() else {
        return Html("<h4>Authorization already received.</h4>");
    };

    if sender.send(outcome).is_err() {
        warning!("Authorization arrived after the run stopped waiting for it");
    }
    shared_state.shutdown.notify_one();

    Html(page)
}

fn evaluate(params: &HashMap<String, String>, expected_state: &str) -> (CallbackOutcome, &'static str) {
    if let Some(err) = params.get("error") {
        return (
            Err(DjError::Auth(format!("authorization denied: {}", err))),
            "<h4>Login failed.</h4>",
        );
    }

    if params.get("state").map(String::as_str) != Some(expected_state) {
        return (
            Err(DjError::Auth("OAuth state mismatch".to_string())),
            "<h4>Login failed.</h4>",
        );
    }

    match params.get("code") {
        Some(code) if !code.is_empty() => (Ok(code.clone()), CLOSE_WINDOW),
        _ => (
            Err(DjError::Auth("callback carried no authorization code".to_string())),
            "<h4>Missing authorization code.</h4>",
        ),
    }
}
