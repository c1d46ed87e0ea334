//! The callback-based Echogram client contract.

use crate::types::{Match, TaskToken, Transcript, TransferProgress};
use url::Url;

/// Handler invoked zero or more times while a transfer is in flight.
///
/// Runs on the transport's own execution context; callers that need to
/// update UI state must dispatch to their own context inside the handler.
pub type ProgressHandler = Box<dyn FnMut(TransferProgress) + Send>;

/// Handler invoked once when an operation finishes successfully.
pub type SuccessHandler<T> = Box<dyn FnOnce(TaskToken, T) + Send>;

/// Handler invoked once when an operation fails.
pub type FailureHandler<E> = Box<dyn FnOnce(TaskToken, E) + Send>;

/// Contract of a transport client for the Echogram audio indexing API.
///
/// Each operation starts a request and returns a [`TaskToken`] for it
/// immediately; the outcome arrives later through exactly one of the
/// success/failure handlers. Implementors own all request construction,
/// authentication, and response parsing. Input values are forwarded to the
/// server as given; this contract performs no validation.
pub trait EchogramClient: Send + Sync {
    /// Error value delivered to failure handlers.
    type Error: std::error::Error + Send + 'static;

    /// Check the account balance.
    ///
    /// On success the handler receives the number of usage hours remaining
    /// as the raw wire number.
    fn start_get_balance(
        &self,
        progress: Option<ProgressHandler>,
        success: SuccessHandler<f64>,
        failure: FailureHandler<Self::Error>,
    ) -> TaskToken;

    /// Submit a remote audio resource for indexing.
    ///
    /// On success the handler receives the content id the server assigned
    /// to the resource; all later operations reference it by that id.
    fn start_index_url(
        &self,
        audio_url: &Url,
        progress: Option<ProgressHandler>,
        success: SuccessHandler<String>,
        failure: FailureHandler<Self::Error>,
    ) -> TaskToken;

    /// Check the indexing status of a submitted resource.
    ///
    /// On success the handler receives the raw status code; see
    /// [`crate::IndexStatus::from_code`] for the documented set.
    fn start_status_of_content(
        &self,
        content_id: &str,
        progress: Option<ProgressHandler>,
        success: SuccessHandler<u64>,
        failure: FailureHandler<Self::Error>,
    ) -> TaskToken;

    /// Search within one indexed resource.
    ///
    /// * `query` - the text to search for.
    /// * `snippet` - whether matches should carry the matched text.
    /// * `nmax` - maximum number of words in a match.
    /// * `confidence_min` - confidence threshold, 0.0 to 1.0, a match must
    ///   meet before it is returned.
    fn start_matches_in_content(
        &self,
        content_id: &str,
        query: &str,
        snippet: bool,
        nmax: Option<u32>,
        confidence_min: Option<f32>,
        progress: Option<ProgressHandler>,
        success: SuccessHandler<Vec<Match>>,
        failure: FailureHandler<Self::Error>,
    ) -> TaskToken;

    /// Search across every indexed resource on the account.
    ///
    /// * `tag` - restrict the search to resources carrying this tag.
    ///
    /// Other parameters behave as in [`Self::start_matches_in_content`].
    fn start_search_all_content(
        &self,
        query: &str,
        tag: Option<&str>,
        nmax: Option<u32>,
        confidence_min: Option<f32>,
        progress: Option<ProgressHandler>,
        success: SuccessHandler<Vec<Match>>,
        failure: FailureHandler<Self::Error>,
    ) -> TaskToken;

    /// Download the transcript of an indexed resource.
    ///
    /// On success the handler receives paragraph text keyed by paragraph
    /// start time.
    fn start_transcript_for_content(
        &self,
        content_id: &str,
        progress: Option<ProgressHandler>,
        success: SuccessHandler<Transcript>,
        failure: FailureHandler<Self::Error>,
    ) -> TaskToken;
}
