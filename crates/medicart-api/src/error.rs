//! API client errors.

use thiserror::Error;

/// Errors surfaced by the REST client.
///
/// Three cases, matching how the shell reports them: transport failures get
/// a generic alert, server-reported business failures surface their message
/// verbatim, and decode failures indicate a contract mismatch. No retries;
/// any failure aborts the operation and leaves prior state unchanged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Response decode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
