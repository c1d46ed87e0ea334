//! Future-returning operations over a callback-based Echogram client.

use crate::error::FutureClientError;
use async_trait::async_trait;
use echogram_client::{
    EchogramClient, FailureHandler, IndexStatus, Match, ProgressHandler, SuccessHandler,
    TaskToken, Transcript,
};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::{debug, warn};
use url::Url;

/// Build a success/failure handler pair wired to a single-settlement
/// channel.
///
/// Whichever handler fires first takes the sender and decides the outcome;
/// later invocations find the slot empty and are ignored, so a defensively
/// coded client that calls both handlers cannot settle the future twice.
fn settlement<T, E>() -> (
    SuccessHandler<T>,
    FailureHandler<E>,
    oneshot::Receiver<Result<T, E>>,
)
where
    T: Send + 'static,
    E: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    let slot = Arc::new(Mutex::new(Some(tx)));

    let success = {
        let slot = Arc::clone(&slot);
        Box::new(move |task: TaskToken, value: T| {
            match slot.lock().ok().and_then(|mut guard| guard.take()) {
                Some(tx) => {
                    // Receiver may have been dropped; nothing to do then.
                    let _ = tx.send(Ok(value));
                }
                None => warn!(?task, "ignoring success callback on a settled operation"),
            }
        }) as SuccessHandler<T>
    };

    let failure = Box::new(move |task: TaskToken, error: E| {
        match slot.lock().ok().and_then(|mut guard| guard.take()) {
            Some(tx) => {
                let _ = tx.send(Err(error));
            }
            None => warn!(?task, "ignoring failure callback on a settled operation"),
        }
    }) as FailureHandler<E>;

    (success, failure, rx)
}

/// Await the settlement channel and fold its states into one result.
async fn settled<T, E>(
    rx: oneshot::Receiver<Result<T, E>>,
) -> Result<T, FutureClientError<E>>
where
    E: std::error::Error + Send + 'static,
{
    match rx.await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(FutureClientError::Client(error)),
        // Both handlers dropped uninvoked: the outcome will never arrive.
        Err(_) => Err(FutureClientError::Abandoned),
    }
}

/// Future-returning variants of the Echogram operations.
///
/// Implemented for every [`EchogramClient`]; bring the trait into scope and
/// call the operations as `async fn`s. Each future is pending until the
/// client invokes one of its completion callbacks, then settles exactly
/// once: resolved with the documented success value or rejected with the
/// client's error, unmodified.
///
/// Progress handlers are forwarded to the client as given and run on the
/// transport's execution context, not the caller's.
#[async_trait]
pub trait ClientFutures: EchogramClient {
    /// Check the account balance.
    ///
    /// Resolves with the number of usage hours remaining.
    async fn get_balance(
        &self,
        progress: Option<ProgressHandler>,
    ) -> Result<f32, FutureClientError<Self::Error>> {
        let (success, failure, rx) = settlement();
        let task = self.start_get_balance(progress, success, failure);
        debug!(task = task.id(), "checking account balance");

        let hours = settled(rx).await?;
        Ok(hours as f32)
    }

    /// Submit a remote audio resource for indexing.
    ///
    /// Resolves with the content id the server assigned to the resource.
    async fn index_url(
        &self,
        audio_url: &Url,
        progress: Option<ProgressHandler>,
    ) -> Result<String, FutureClientError<Self::Error>> {
        let (success, failure, rx) = settlement();
        let task = self.start_index_url(audio_url, progress, success, failure);
        debug!(task = task.id(), url = %audio_url, "submitting audio resource for indexing");

        settled(rx).await
    }

    /// Check the indexing status of a submitted resource.
    ///
    /// Resolves with the [`IndexStatus`] decoded from the raw wire code.
    /// A code outside the documented set rejects with
    /// [`FutureClientError::InvalidStatus`].
    async fn status_of_content(
        &self,
        content_id: &str,
        progress: Option<ProgressHandler>,
    ) -> Result<IndexStatus, FutureClientError<Self::Error>> {
        let (success, failure, rx) = settlement();
        let task = self.start_status_of_content(content_id, progress, success, failure);
        debug!(task = task.id(), content_id, "checking indexing status");

        let code = settled(rx).await?;
        match IndexStatus::from_code(code) {
            Ok(status) => Ok(status),
            Err(e) => {
                warn!(task = task.id(), code, "client reported an undocumented status code");
                Err(e.into())
            }
        }
    }

    /// Search within one indexed resource.
    ///
    /// Resolves with the matches the server found; see
    /// [`EchogramClient::start_matches_in_content`] for parameter meanings.
    async fn matches_in_content(
        &self,
        content_id: &str,
        query: &str,
        snippet: bool,
        nmax: Option<u32>,
        confidence_min: Option<f32>,
        progress: Option<ProgressHandler>,
    ) -> Result<Vec<Match>, FutureClientError<Self::Error>> {
        let (success, failure, rx) = settlement();
        let task = self.start_matches_in_content(
            content_id,
            query,
            snippet,
            nmax,
            confidence_min,
            progress,
            success,
            failure,
        );
        debug!(task = task.id(), content_id, query, "searching content");

        settled(rx).await
    }

    /// Search across every indexed resource on the account.
    ///
    /// Resolves with the matches the server found; see
    /// [`EchogramClient::start_search_all_content`] for parameter meanings.
    async fn search_all_content(
        &self,
        query: &str,
        tag: Option<&str>,
        nmax: Option<u32>,
        confidence_min: Option<f32>,
        progress: Option<ProgressHandler>,
    ) -> Result<Vec<Match>, FutureClientError<Self::Error>> {
        let (success, failure, rx) = settlement();
        let task =
            self.start_search_all_content(query, tag, nmax, confidence_min, progress, success, failure);
        debug!(task = task.id(), query, ?tag, "searching all content");

        settled(rx).await
    }

    /// Download the transcript of an indexed resource.
    ///
    /// Resolves with paragraph text keyed by paragraph start time.
    async fn transcript_for_content(
        &self,
        content_id: &str,
        progress: Option<ProgressHandler>,
    ) -> Result<Transcript, FutureClientError<Self::Error>> {
        let (success, failure, rx) = settlement();
        let task = self.start_transcript_for_content(content_id, progress, success, failure);
        debug!(task = task.id(), content_id, "fetching transcript");

        settled(rx).await
    }
}

impl<C: EchogramClient + ?Sized> ClientFutures for C {}
