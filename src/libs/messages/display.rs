//! Display implementation for taskdeck messages.
//!
//! All user-facing text lives here so wording stays consistent between the
//! one-shot commands, the interactive session and the notification banner.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TodoAdded => "Todo added successfully!".to_string(),
            Message::TodoDeleted => "Todo deleted successfully!".to_string(),
            Message::TodoStatusUpdated => "Todo status updated!".to_string(),
            Message::TodoUpdated => "Todo updated successfully!".to_string(),
            Message::TodosLoadFailed => "Failed to load todos".to_string(),
            Message::TodosFetchFailed => "Failed to fetch todos".to_string(),
            Message::TodoAddFailed => "Failed to add todo".to_string(),
            Message::TodoDeleteFailed => "Failed to delete todo".to_string(),
            Message::TodoUpdateFailed => "Failed to update todo".to_string(),
            Message::TodoTitleEmpty => "Task title cannot be empty.".to_string(),
            Message::NoTasksFound => "No tasks found. Add a new one!".to_string(),
            Message::TodosRestoredFromRemote(count) => format!("Fetched {} tasks from the remote collection.", count),
            Message::CacheCleared => "Local copy cleared.".to_string(),

            // === LIST MESSAGES ===
            Message::ListHeader => "Task Manager".to_string(),
            Message::PageFooter { page, pages, total } => format!("Page {} of {} ({} tasks)", page, pages, total),
            Message::TaskNotOnPage(id) => format!("Task with ID {} is not on this page.", id),
            Message::NotEditing => "No task is being edited.".to_string(),
            Message::EditingTask(title) => format!("Editing: {}", title),
            Message::ErrorBanner(error) => error.to_string(),

            // === SESSION MESSAGES ===
            Message::PromptSessionAction => "What next?".to_string(),
            Message::SessionAdd => "Add a task".to_string(),
            Message::SessionToggle => "Toggle completion".to_string(),
            Message::SessionEdit => "Edit a title".to_string(),
            Message::SessionSaveEdit => "Save edit".to_string(),
            Message::SessionCancelEdit => "Cancel edit".to_string(),
            Message::SessionDelete => "Delete a task".to_string(),
            Message::SessionNextPage => "Next page".to_string(),
            Message::SessionPreviousPage => "Previous page".to_string(),
            Message::SessionRefresh => "Refresh from remote".to_string(),
            Message::SessionQuit => "Quit".to_string(),
            Message::PromptNewTitle => "Add a new task...".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptEditTitle => "New title".to_string(),
            Message::NoTasksOnPage => "There are no tasks on this page.".to_string(),
            Message::SessionEnded => "Bye!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleApi => "Todos API settings".to_string(),
            Message::ConfigModuleList => "List settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiBaseUrl => "Enter the todos API base URL".to_string(),
            Message::PromptApiUserId => "Enter the user id for new tasks".to_string(),
            Message::PromptPageSize => "Tasks per page".to_string(),
            Message::PageSizeMustBePositive => "Page size must be at least 1".to_string(),
            Message::PromptSyncScope => "Where should delete, toggle and edit apply?".to_string(),
            Message::SyncScopePage => "Visible page only (changes are not saved locally)".to_string(),
            Message::SyncScopeCollection => "Whole collection (changes are saved locally)".to_string(),
            Message::PromptCacheKey => "Cache slot name".to_string(),
        };
        write!(f, "{}", text)
    }
}
