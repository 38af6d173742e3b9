use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failures inside the counter store. `Read` and `Parse` happen while
/// loading, the rest while persisting. The store recovers from all of them
/// and only logs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read counter record '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse counter record: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode counter record: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write counter record '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage rejected the write: {reason}")]
    Rejected { reason: String },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
