//! Error types for the API client.

/// Errors that can occur when making search requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unexpected response).
    #[error("Request failed")]
    RequestFailed,
    /// The server returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered with `stat: "fail"`. The message is shown to the
    /// user verbatim, so `Display` is the raw API message.
    #[error("{message}")]
    ApiFail { message: String },
}
