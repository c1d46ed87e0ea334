//! Echogram Futures Adapter
//!
//! `async fn` operations over any callback-based
//! [`EchogramClient`](echogram_client::EchogramClient).
//!
//! The Echogram client contract delivers results through success/failure
//! callback pairs. This crate converts each operation into a future that
//! settles exactly once: the success callback resolves it with the
//! documented value, the failure callback rejects it with the client's
//! error, unmodified. Progress handlers are forwarded to the client as
//! given and still run on the transport's execution context.
//!
//! # Features
//!
//! - **Balance**: remaining usage hours as `f32`
//! - **Indexing**: submit a resource, poll its status
//! - **Search**: matches within one resource or across all of them
//! - **Transcript**: paragraph text keyed by start time
//!
//! # Example
//!
//! ```ignore
//! use echogram_futures::ClientFutures;
//! use echogram_client::IndexStatus;
//!
//! # async fn run(client: impl echogram_client::EchogramClient) -> Result<(), Box<dyn std::error::Error>> {
//! let audio_url = url::Url::parse("https://example.com/interview.wav")?;
//! let content_id = client.index_url(&audio_url, None).await?;
//!
//! while client.status_of_content(&content_id, None).await? != IndexStatus::Done {
//!     tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//! }
//!
//! let transcript = client.transcript_for_content(&content_id, None).await?;
//! for (start, paragraph) in &transcript {
//!     println!("[{start}s] {paragraph}");
//! }
//! # Ok(())
//! # }
//! ```

mod adapter;
mod error;

// Re-export main types
pub use adapter::ClientFutures;
pub use error::FutureClientError;

// Re-export the contract crate so callers need only one dependency
pub use echogram_client;
