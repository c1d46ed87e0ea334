//! Error type for future-returning Echogram operations.

use echogram_client::InvalidStatusCode;
use thiserror::Error;

/// Errors an adapted Echogram operation can fail with.
///
/// `E` is the error type of the underlying client; it is propagated
/// verbatim, never translated or classified.
#[derive(Error, Debug)]
pub enum FutureClientError<E>
where
    E: std::error::Error + Send + 'static,
{
    /// The client's failure callback fired with this error.
    #[error(transparent)]
    Client(E),

    /// The status operation succeeded but reported a code outside the
    /// documented set. The client broke its contract; nothing was coerced.
    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatusCode),

    /// The client dropped both completion callbacks without invoking
    /// either, so no outcome will ever arrive.
    #[error("client finished without invoking a completion callback")]
    Abandoned,
}
