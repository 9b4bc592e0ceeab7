//! CRUD orchestration over the remote collection, the list state and the cache.
//!
//! Every mutation waits for its remote round-trip before touching local
//! state; nothing is applied optimistically. On success the matching
//! [`Action`] is reduced and, when the collection changed, the cache is
//! rewritten. A failed call leaves state as it was, sets the error banner
//! and raises an error notification.
//!
//! ## Load order
//!
//! 1. Saved collection in the cache, if present and non-empty
//! 2. Otherwise `GET /todos`, which also seeds the cache
//!
//! ## Sync scope
//!
//! Delete, toggle and edit change only the visible page under
//! [`SyncScope::Page`]: the collection and the cache keep the old task and it
//! comes back when the page is recomputed. [`SyncScope::Collection`] applies
//! them to the collection and persists the cache.

use super::cache::Cache;
use super::config::ListConfig;
use super::messages::Message;
use super::notification::Notification;
use super::state::{Action, ListState, SyncScope};
use super::task::{self, Task};
use crate::api::{ApiError, Remote};
use chrono::Local;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ListError {
    #[error("{}", Message::TodoTitleEmpty)]
    EmptyTitle,
    #[error("{}", Message::TaskNotOnPage(*.0))]
    NotFound(i64),
    #[error("{}", Message::NotEditing)]
    NotEditing,
    #[error("{message}")]
    Remote {
        message: Message,
        #[source]
        source: ApiError,
    },
}

/// Holds the loading flag for one remote call. The flag is cleared on drop,
/// so a call whose future is cancelled mid-request does not leave it set.
struct Pending<'a> {
    state: &'a mut ListState,
}

impl<'a> Pending<'a> {
    fn start(state: &'a mut ListState, action: Action) -> Self {
        state.reduce(action);
        Self { state }
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        self.state.reduce(Action::RequestFinished);
    }
}

pub struct TodoList<R: Remote> {
    remote: R,
    cache: Cache,
    scope: SyncScope,
    state: ListState,
}

impl<R: Remote> TodoList<R> {
    pub fn new(remote: R, cache: Cache, config: &ListConfig) -> Self {
        Self {
            remote,
            cache,
            scope: config.sync_scope,
            state: ListState::new(config.page_size),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Populates the collection from the cache, falling back to the remote.
    pub async fn load(&mut self) -> Result<(), ListError> {
        let mut pending = Pending::start(&mut self.state, Action::LoadStarted);

        if let Some(saved) = self.cache.load().filter(|saved| !saved.is_empty()) {
            info!(count = saved.len(), "using cached todos");
            pending.state.reduce(Action::Loaded(saved));
            return Ok(());
        }

        let result = self.remote.fetch_all().await;
        drop(pending);

        match result {
            Ok(tasks) => {
                info!(count = tasks.len(), "fetched todos from remote");
                self.state.reduce(Action::Loaded(tasks));
                self.persist();
                Ok(())
            }
            Err(source) => Err(self.fail(Message::TodosFetchFailed, Message::TodosLoadFailed, source)),
        }
    }

    /// Drops the cached collection and loads again from the remote.
    pub async fn refresh(&mut self) -> Result<(), ListError> {
        if let Err(e) = self.cache.clear() {
            warn!(error = %e, "failed to clear cached todos");
        }
        self.load().await
    }

    /// Creates a task remotely and prepends it with a locally assigned id.
    ///
    /// A blank title is rejected before any request is made.
    pub async fn add(&mut self, title: &str) -> Result<Task, ListError> {
        if title.trim().is_empty() {
            return Err(ListError::EmptyTitle);
        }

        let pending = Pending::start(&mut self.state, Action::RequestStarted);
        let result = self.remote.create(title).await;
        drop(pending);

        match result {
            Ok(created) => {
                let task = Task {
                    id: task::next_id(self.state.collection()),
                    ..created
                };
                self.state.reduce(Action::Added(task.clone()));
                self.persist();
                self.notify(Message::TodoAdded);
                Ok(task)
            }
            Err(source) => Err(self.fail(Message::TodoAddFailed, Message::TodoAddFailed, source)),
        }
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), ListError> {
        let pending = Pending::start(&mut self.state, Action::RequestStarted);
        let result = self.remote.delete(id).await;
        drop(pending);

        match result {
            Ok(()) => {
                self.state.reduce(Action::Deleted { id, scope: self.scope });
                self.persist_scoped();
                self.notify(Message::TodoDeleted);
                Ok(())
            }
            Err(source) => Err(self.fail(Message::TodoDeleteFailed, Message::TodoDeleteFailed, source)),
        }
    }

    /// Flips the completion flag of a visible task.
    pub async fn toggle(&mut self, id: i64) -> Result<(), ListError> {
        let mut task = self.state.find(id, self.scope).cloned().ok_or(ListError::NotFound(id))?;
        task.completed = !task.completed;

        let pending = Pending::start(&mut self.state, Action::RequestStarted);
        let result = self.remote.update(&task).await;
        drop(pending);

        match result {
            Ok(_) => {
                self.state.reduce(Action::Toggled { id, scope: self.scope });
                self.persist_scoped();
                self.notify(Message::TodoStatusUpdated);
                Ok(())
            }
            Err(source) => Err(self.fail(Message::TodoUpdateFailed, Message::TodoUpdateFailed, source)),
        }
    }

    /// Stages `title` as the edit text for task `id`. Local only.
    pub fn start_editing(&mut self, id: i64, title: &str) {
        self.state.reduce(Action::StartEditing {
            id,
            title: title.to_string(),
        });
    }

    pub fn set_edit_text(&mut self, text: &str) {
        self.state.reduce(Action::EditText(text.to_string()));
    }

    pub fn cancel_editing(&mut self) {
        self.state.reduce(Action::CancelEditing);
    }

    /// Sends the staged title. Returns `Ok(false)` without a request when the
    /// staged text is blank.
    pub async fn save_edit(&mut self) -> Result<bool, ListError> {
        let editing = self.state.editing().cloned().ok_or(ListError::NotEditing)?;
        if editing.text.trim().is_empty() {
            return Ok(false);
        }

        let mut task = self.state.find(editing.id, self.scope).cloned().ok_or(ListError::NotFound(editing.id))?;
        task.title = editing.text.clone();

        let pending = Pending::start(&mut self.state, Action::RequestStarted);
        let result = self.remote.update(&task).await;
        drop(pending);

        match result {
            Ok(_) => {
                self.state.reduce(Action::Retitled {
                    id: editing.id,
                    title: editing.text,
                    scope: self.scope,
                });
                self.persist_scoped();
                self.notify(Message::TodoUpdated);
                Ok(true)
            }
            Err(source) => Err(self.fail(Message::TodoUpdateFailed, Message::TodoUpdateFailed, source)),
        }
    }

    /// Starts editing `id` and saves `title` in one step.
    pub async fn edit(&mut self, id: i64, title: &str) -> Result<bool, ListError> {
        self.start_editing(id, title);
        let result = self.save_edit().await;
        if !matches!(result, Ok(true)) {
            self.cancel_editing();
        }
        result
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.state.reduce(Action::GoToPage(page));
    }

    pub fn next_page(&mut self) {
        let page = self.state.current_page();
        if page < self.state.page_count() {
            self.go_to_page(page + 1);
        }
    }

    pub fn previous_page(&mut self) {
        let page = self.state.current_page();
        if page > 1 {
            self.go_to_page(page - 1);
        }
    }

    fn fail(&mut self, banner: Message, toast: Message, source: ApiError) -> ListError {
        error!(error = %source, "{}", banner);
        self.state.reduce(Action::Failed(banner.to_string()));
        self.state.reduce(Action::Notify(Notification::error(toast.to_string(), Local::now())));
        ListError::Remote { message: banner, source }
    }

    fn notify(&mut self, message: Message) {
        self.state.reduce(Action::Notify(Notification::success(message.to_string(), Local::now())));
    }

    fn persist_scoped(&self) {
        if self.scope == SyncScope::Collection {
            self.persist();
        }
    }

    /// Mirrors the collection to the cache. Best-effort: failures are logged only.
    fn persist(&self) {
        if let Err(e) = self.cache.save(self.state.collection()) {
            warn!(path = %self.cache.path().display(), error = %e, "failed to save todos");
        }
    }
}
