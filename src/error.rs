use thiserror::Error;

/// Everything the gateway or controller can fail with.
#[derive(Debug, Error)]
pub enum Error {
    /// Network- or HTTP-level failure talking to the meals API.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("meal {id} not found")]
    NotFound { id: String },

    /// The server answered 2xx but the body is not the shape we expect.
    #[error("malformed response: {detail}")]
    MalformedResponse { detail: String },

    /// Free-text form input that should have been a number.
    #[error("invalid {field}: {value:?} is not a number")]
    Validation { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
