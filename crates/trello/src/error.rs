//! Adapter-level errors and their mapping onto [`BoardError`].

use rotation::BoardError;
use thiserror::Error;

/// Failures while constructing a [`crate::TrelloClient`].
#[derive(Debug, Error)]
pub enum TrelloError {
    /// A credential or the base URL is empty.
    #[error("Trello {field} must not be empty")]
    MissingSetting {
        /// Name of the empty setting.
        field: &'static str,
    },

    /// The HTTP client could not be built (e.g. TLS backend unavailable).
    #[error("Could not build Trello HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Maps a failed `reqwest` call onto the port error.
pub(crate) fn transport_error(err: reqwest::Error) -> BoardError {
    if err.is_decode() {
        BoardError::Decode {
            message: err.without_url().to_string(),
        }
    } else {
        // Request URLs carry the key and token.
        BoardError::Transport {
            message: err.without_url().to_string(),
        }
    }
}

/// Extracts a human-readable message from an error body.
///
/// Trello answers most failures with plain text (`invalid key`) and some with
/// JSON carrying `message` or `error`.
pub(crate) fn error_description(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error"] {
            if let Some(msg) = json.get(field).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.trim().to_string()
}

/// Builds the [`BoardError::Status`] for a non-success response.
///
/// A body that could not be read is reported as such rather than as empty.
pub(crate) fn status_error<E: std::fmt::Display>(
    status: u16,
    body: Result<String, E>,
) -> BoardError {
    let body = match body {
        Ok(body) => error_description(&body),
        Err(err) => format!("response body could not be read: {err}"),
    };
    BoardError::Status { status, body }
}
