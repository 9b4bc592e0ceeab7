//! In-memory list state and its reducer.
//!
//! [`ListState`] holds the full collection, the current page slice and the
//! editing, loading, error and notification fields. It changes only through
//! [`ListState::reduce`], which performs no I/O.
//!
//! The page slice is recomputed whenever the collection or the page changes.
//! Under [`SyncScope::Page`] the delete, toggle and retitle actions edit the
//! slice alone, so the change is lost the next time the slice is recomputed.
//! [`SyncScope::Collection`] applies them to the collection instead.

use super::notification::Notification;
use super::pager::{self, DEFAULT_PAGE_SIZE};
use super::task::Task;
use serde::{Deserialize, Serialize};

/// Where delete, toggle and retitle land after a successful remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncScope {
    /// Only the visible page slice changes; the collection and cache keep the old task.
    #[default]
    Page,
    /// The full collection changes and is mirrored to the cache.
    Collection,
}

/// Title edit staged for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editing {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// A fresh load is starting: set the loading flag and clear the error banner.
    LoadStarted,
    Loaded(Vec<Task>),
    RequestStarted,
    RequestFinished,
    GoToPage(usize),
    /// Prepend a created task and return to page 1.
    Added(Task),
    Deleted { id: i64, scope: SyncScope },
    Toggled { id: i64, scope: SyncScope },
    Retitled { id: i64, title: String, scope: SyncScope },
    StartEditing { id: i64, title: String },
    EditText(String),
    CancelEditing,
    Failed(String),
    Notify(Notification),
}

#[derive(Debug, Clone)]
pub struct ListState {
    all_todos: Vec<Task>,
    todos: Vec<Task>,
    current_page: usize,
    page_size: usize,
    editing: Option<Editing>,
    is_loading: bool,
    error: Option<String>,
    notification: Option<Notification>,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            all_todos: Vec::new(),
            todos: Vec::new(),
            current_page: 1,
            page_size,
            editing: None,
            is_loading: false,
            error: None,
            notification: None,
        }
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::LoadStarted => {
                self.is_loading = true;
                self.error = None;
            }
            Action::Loaded(tasks) => {
                self.all_todos = tasks;
                self.recompute();
            }
            Action::RequestStarted => self.is_loading = true,
            Action::RequestFinished => self.is_loading = false,
            Action::GoToPage(page) => {
                self.current_page = page;
                self.recompute();
            }
            Action::Added(task) => {
                self.all_todos.insert(0, task);
                self.current_page = 1;
                self.recompute();
            }
            Action::Deleted { id, scope } => match scope {
                SyncScope::Page => self.todos.retain(|task| task.id != id),
                SyncScope::Collection => {
                    self.all_todos.retain(|task| task.id != id);
                    self.recompute();
                }
            },
            Action::Toggled { id, scope } => self.update_task(id, scope, |task| task.completed = !task.completed),
            Action::Retitled { id, title, scope } => {
                self.update_task(id, scope, |task| task.title = title.clone());
                self.editing = None;
            }
            Action::StartEditing { id, title } => self.editing = Some(Editing { id, text: title }),
            Action::EditText(text) => {
                if let Some(editing) = self.editing.as_mut() {
                    editing.text = text;
                }
            }
            Action::CancelEditing => self.editing = None,
            Action::Failed(message) => self.error = Some(message),
            Action::Notify(notification) => self.notification = Some(notification),
        }
    }

    fn update_task(&mut self, id: i64, scope: SyncScope, apply: impl Fn(&mut Task)) {
        let target = match scope {
            SyncScope::Page => &mut self.todos,
            SyncScope::Collection => &mut self.all_todos,
        };
        target.iter_mut().filter(|task| task.id == id).for_each(&apply);

        if scope == SyncScope::Collection {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.todos = pager::page_slice(&self.all_todos, self.page_size, self.current_page).to_vec();
    }

    /// Full collection in display order.
    pub fn collection(&self) -> &[Task] {
        &self.all_todos
    }

    /// Tasks visible on the current page.
    pub fn page_items(&self) -> &[Task] {
        &self.todos
    }

    /// Looks a task up in the slice or the collection, matching `scope`.
    pub fn find(&self, id: i64, scope: SyncScope) -> Option<&Task> {
        let source = match scope {
            SyncScope::Page => &self.todos,
            SyncScope::Collection => &self.all_todos,
        };
        source.iter().find(|task| task.id == id)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        pager::page_count(self.all_todos.len(), self.page_size)
    }

    pub fn editing(&self) -> Option<&Editing> {
        self.editing.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn tasks(count: i64) -> Vec<Task> {
        (1..=count).map(|id| Task::new(id, &format!("Task {}", id), 1)).collect()
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|task| task.id).collect()
    }

    fn loaded(count: i64) -> ListState {
        let mut state = ListState::default();
        state.reduce(Action::Loaded(tasks(count)));
        state
    }

    #[test]
    fn loaded_shows_first_page() {
        let state = loaded(12);
        assert_eq!(ids(state.page_items()), vec![1, 2, 3, 4, 5]);
        assert_eq!(state.page_count(), 3);
    }

    #[test]
    fn go_to_page_recomputes_slice() {
        let mut state = loaded(12);
        state.reduce(Action::GoToPage(3));
        assert_eq!(ids(state.page_items()), vec![11, 12]);

        state.reduce(Action::GoToPage(9));
        assert!(state.page_items().is_empty());
    }

    #[test]
    fn added_prepends_and_resets_page() {
        let mut state = loaded(12);
        state.reduce(Action::GoToPage(2));
        state.reduce(Action::Added(Task::new(13, "New", 1)));

        assert_eq!(state.current_page(), 1);
        assert_eq!(state.collection().len(), 13);
        assert_eq!(state.collection()[0].id, 13);
        assert_eq!(ids(state.page_items()), vec![13, 1, 2, 3, 4]);
    }

    #[test]
    fn page_scoped_delete_only_touches_slice() {
        let mut state = ListState::default();
        state.reduce(Action::Loaded(vec![Task::new(1, "A", 1), Task::new(2, "B", 1)]));
        state.reduce(Action::Deleted { id: 1, scope: SyncScope::Page });

        assert_eq!(ids(state.page_items()), vec![2]);
        assert_eq!(ids(state.collection()), vec![1, 2]);

        state.reduce(Action::GoToPage(2));
        state.reduce(Action::GoToPage(1));
        assert_eq!(ids(state.page_items()), vec![1, 2]);
    }

    #[test]
    fn collection_scoped_delete_survives_paging() {
        let mut state = loaded(7);
        state.reduce(Action::Deleted { id: 2, scope: SyncScope::Collection });

        assert_eq!(ids(state.page_items()), vec![1, 3, 4, 5, 6]);
        state.reduce(Action::GoToPage(2));
        state.reduce(Action::GoToPage(1));
        assert_eq!(ids(state.page_items()), vec![1, 3, 4, 5, 6]);
    }

    #[test]
    fn page_scoped_toggle_is_lost_on_recompute() {
        let mut state = loaded(3);
        state.reduce(Action::Toggled { id: 2, scope: SyncScope::Page });
        assert!(state.page_items()[1].completed);
        assert!(!state.collection()[1].completed);

        state.reduce(Action::GoToPage(1));
        assert!(!state.page_items()[1].completed);
    }

    #[test]
    fn collection_scoped_toggle_sticks() {
        let mut state = loaded(3);
        state.reduce(Action::Toggled { id: 2, scope: SyncScope::Collection });
        assert!(state.collection()[1].completed);
        assert!(state.page_items()[1].completed);
    }

    #[test]
    fn editing_lifecycle() {
        let mut state = loaded(3);
        state.reduce(Action::StartEditing { id: 2, title: "Task 2".into() });
        state.reduce(Action::EditText("Renamed".into()));
        assert_eq!(state.editing(), Some(&Editing { id: 2, text: "Renamed".into() }));

        state.reduce(Action::CancelEditing);
        assert!(state.editing().is_none());

        state.reduce(Action::StartEditing { id: 2, title: "Task 2".into() });
        state.reduce(Action::Retitled {
            id: 2,
            title: "Renamed".into(),
            scope: SyncScope::Page,
        });
        assert!(state.editing().is_none());
        assert_eq!(state.page_items()[1].title, "Renamed");
        assert_eq!(state.collection()[1].title, "Task 2");
    }

    #[test]
    fn edit_text_without_editing_is_ignored() {
        let mut state = loaded(1);
        state.reduce(Action::EditText("stray".into()));
        assert!(state.editing().is_none());
    }

    #[test]
    fn load_started_clears_error() {
        let mut state = ListState::default();
        state.reduce(Action::Failed("Failed to add todo".into()));
        state.reduce(Action::RequestStarted);
        assert_eq!(state.error(), Some("Failed to add todo"));

        state.reduce(Action::LoadStarted);
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn notify_replaces_previous() {
        let mut state = ListState::default();
        state.reduce(Action::Notify(Notification::success("one", Local::now())));
        state.reduce(Action::Notify(Notification::error("two", Local::now())));
        assert_eq!(state.notification().map(|n| n.message.as_str()), Some("two"));
    }
}
