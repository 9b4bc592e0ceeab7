//! Remote todo collection client.
//!
//! The list engine talks to the remote side only through the [`Remote`]
//! trait. [`todos::TodosApi`] implements it over HTTP; tests can swap in
//! their own implementation or point `TodosApi` at a mock server.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::api::{Remote, TodosApi, TodosConfig};
//!
//! # async fn run() -> Result<(), taskdeck::api::ApiError> {
//! let api = TodosApi::new(&TodosConfig::default());
//! let tasks = api.fetch_all().await?;
//! println!("{} tasks", tasks.len());
//! # Ok(())
//! # }
//! ```

use crate::libs::task::Task;
use reqwest::StatusCode;
use thiserror::Error;

pub mod todos;

pub use todos::{TodosApi, TodosConfig};

/// Failure of a single remote round-trip.
///
/// Users see one generic message per action; the variants exist so the
/// cause can be logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Create/read/update/delete operations on the remote collection.
///
/// Each call is a single round-trip with no retry.
#[allow(async_fn_in_trait)]
pub trait Remote {
    /// Fetches the whole collection. Fails if the status is not a success.
    async fn fetch_all(&self) -> Result<Vec<Task>, ApiError>;

    /// Creates a task with `title`. The returned id is whatever the server assigned.
    async fn create(&self, title: &str) -> Result<Task, ApiError>;

    /// Replaces the stored task with `task`, sent as the full object.
    /// An empty success response yields `task` back unchanged.
    async fn update(&self, task: &Task) -> Result<Task, ApiError>;

    /// Deletes the task with `id`.
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
