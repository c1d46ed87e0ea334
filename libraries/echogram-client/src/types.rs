//! Types exchanged with the Echogram API.

use crate::error::InvalidStatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque handle identifying one in-flight transfer.
///
/// Every operation on [`crate::EchogramClient`] returns one, and passes it
/// back as the first argument of the success or failure callback so a
/// caller juggling several requests can tell the completions apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskToken(u64);

impl TaskToken {
    /// Create a token from a client-assigned transfer id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw transfer id.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Indexing state of a submitted audio resource.
///
/// Reported on the wire as a raw integer code; use [`IndexStatus::from_code`]
/// to construct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexStatus {
    /// The resource is still being indexed.
    InProgress,
    /// Indexing finished; the resource can be searched and transcribed.
    Done,
}

impl IndexStatus {
    /// Convert a raw wire code into a status.
    ///
    /// The set of codes is closed (0 = in progress, 1 = done). Any other
    /// code is a contract violation on the client's side and is returned
    /// as an [`InvalidStatusCode`] error instead of being coerced.
    pub fn from_code(code: u64) -> Result<Self, InvalidStatusCode> {
        match code {
            0 => Ok(Self::InProgress),
            1 => Ok(Self::Done),
            _ => Err(InvalidStatusCode { code }),
        }
    }

    /// The raw wire code for this status.
    pub fn code(self) -> u64 {
        match self {
            Self::InProgress => 0,
            Self::Done => 1,
        }
    }
}

impl TryFrom<u64> for IndexStatus {
    type Error = InvalidStatusCode;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// One search hit within indexed audio content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Start of the matched span, seconds from the beginning of the audio.
    pub start_time: f32,
    /// End of the matched span, seconds from the beginning of the audio.
    pub end_time: f32,
    /// Confidence of the match, 0.0 to 1.0.
    pub confidence: f32,
    /// The matched text, present only when the query asked for snippets.
    pub snippet: Option<String>,
}

/// Transcript of an indexed resource: paragraph start time (whole seconds
/// from the beginning of the audio) mapped to paragraph text.
pub type Transcript = BTreeMap<u64, String>;

/// Progress notification for an in-flight transfer.
///
/// Delivered on the transport's own execution context, not the caller's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferProgress {
    /// Bytes moved so far.
    pub bytes_transferred: u64,
    /// Total bytes, when the transport knows it.
    pub bytes_total: Option<u64>,
    /// Progress as 0.0 to 1.0; 0.0 when the total is unknown.
    pub fraction: f32,
}
