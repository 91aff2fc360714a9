use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{Extension, Router, routing::get};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use crate::{
    api::{self, CallbackState},
    error::{DjError, Result},
};

/// One-shot local listener for the OAuth redirect.
///
/// Serves a single route, resolves on the first request that carries an
/// answer and shuts itself down right after.
pub struct CallbackServer {
    addr: SocketAddr,
    receiver: oneshot::Receiver<api::CallbackOutcome>,
    state: Arc<CallbackState>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl CallbackServer {
    pub async fn start(addr: &str, path: &str, expected_state: String) -> Result<Self> {
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            DjError::Auth(format!("cannot listen for the OAuth callback on {}: {}", addr, e))
        })?;
        let addr = listener.local_addr()?;

        let (sender, receiver) = oneshot::channel();
        let state = Arc::new(CallbackState::new(expected_state, sender));

        let app = Router::new().route(path, get(api::callback).layer(Extension(Arc::clone(&state))));

        let shutdown_state = Arc::clone(&state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown_state.shutdown.notified().await })
                .await
        });

        Ok(Self {
            addr,
            receiver,
            state,
            handle,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Waits for the redirect, then stops the listener.
    pub async fn wait_for_code(self, timeout: Duration) -> Result<String> {
        let outcome = tokio::time::timeout(timeout, self.receiver).await;

        self.state.shutdown.notify_one();
        let _ = self.handle.await;

        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(DjError::Auth("callback listener stopped unexpectedly".to_string())),
            Err(_) => Err(DjError::Auth(format!(
                "no authorization received within {} seconds",
                timeout.as_secs()
            ))),
        }
    }
}
