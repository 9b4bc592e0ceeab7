//! Core library modules for the taskdeck application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, logging, messaging
//! - **Task Model**: The todo record and local id assignment
//! - **List Engine**: Pager, list state reducers and the CRUD orchestrator
//! - **Local Mirror**: JSON cache of the full collection
//! - **User Interface**: Notifications and console rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::api::todos::TodosApi;
//! use taskdeck::libs::{cache::Cache, config::Config, todo_list::TodoList};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let list_config = config.list();
//! let remote = TodosApi::new(&config.api());
//! let cache = Cache::new(&list_config.cache_key)?;
//!
//! let mut list = TodoList::new(remote, cache, &list_config);
//! list.load().await?;
//! list.add("Water the plants").await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod data_storage;
pub mod logging;
pub mod messages;
pub mod notification;
pub mod pager;
pub mod state;
pub mod task;
pub mod todo_list;
pub mod view;
