//! Error types for the Echogram client contract.

use thiserror::Error;

/// The client reported an indexing status code outside the documented set.
///
/// The status enumeration is closed; a code this crate does not know about
/// means the client and this contract disagree, which is surfaced as an
/// error rather than coerced into a wrong [`crate::IndexStatus`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unrecognized index status code {code}")]
pub struct InvalidStatusCode {
    /// The raw code the client reported.
    pub code: u64,
}
