//! Echogram Client Contract
//!
//! Callback-based contract for the Echogram audio indexing and search API.
//!
//! This crate defines the surface an Echogram transport client exposes:
//! six operations, each started with a success callback, a failure
//! callback, and an optional progress handler. It deliberately contains no
//! transport, authentication, or response parsing; implementors of
//! [`EchogramClient`] provide those.
//!
//! Most callers will not use the callbacks directly. The companion
//! `echogram-futures` crate adapts any [`EchogramClient`] into
//! `async fn` operations.
//!
//! # Example
//!
//! ```ignore
//! use echogram_client::{EchogramClient, IndexStatus};
//!
//! fn poll<C: EchogramClient>(client: &C, content_id: &str) {
//!     client.start_status_of_content(
//!         content_id,
//!         None,
//!         Box::new(|_task, code| {
//!             match IndexStatus::from_code(code) {
//!                 Ok(status) => println!("status: {status:?}"),
//!                 Err(e) => eprintln!("bad status code: {e}"),
//!             }
//!         }),
//!         Box::new(|_task, err| eprintln!("request failed: {err}")),
//!     );
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::{EchogramClient, FailureHandler, ProgressHandler, SuccessHandler};
pub use error::InvalidStatusCode;
pub use types::{IndexStatus, Match, TaskToken, Transcript, TransferProgress};
