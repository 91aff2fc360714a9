//! # API Module
//!
//! HTTP handlers for the short-lived local listener that receives the Spotify
//! OAuth redirect.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization-code redirect, validates the
//!   `state` parameter and hands the code to the waiting run. The first
//!   request that carries an answer wins; the listener is then shut down.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use djlazy::api::{callback, CallbackState};
//!
//! let app = Router::new()
//!     .route("/spotify-auth", get(callback).layer(Extension(state)));
//! ```

mod callback;

pub use callback::{CallbackOutcome, CallbackState, callback};
