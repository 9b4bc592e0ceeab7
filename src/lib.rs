//! # Taskdeck
//!
//! A command-line task list backed by a remote REST collection.
//!
//! ## Features
//!
//! - **Remote Sync**: Create, read, update and delete tasks against a todo endpoint
//! - **Local Mirror**: The collection is cached on disk so later runs skip the fetch
//! - **Pagination**: Tasks are shown five at a time, newest first
//! - **Editing**: Stage a new title, then save or cancel it
//! - **Interactive Session**: Keep one list alive and act on it step by step
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
