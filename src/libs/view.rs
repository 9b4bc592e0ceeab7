use super::messages::Message;
use super::state::ListState;
use super::task::Task;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the notification, the error banner, the current page and its footer.
    pub fn list(state: &ListState) -> Result<()> {
        msg_print!(Message::ListHeader, true);

        if let Some(notification) = state.notification().filter(|n| n.is_visible(Local::now())) {
            if notification.is_error() {
                msg_error!(notification.message);
            } else {
                msg_success!(notification.message);
            }
        }

        if let Some(error) = state.error() {
            msg_error!(Message::ErrorBanner(error.to_string()));
        }

        if state.page_items().is_empty() && !state.is_loading() {
            msg_info!(Message::NoTasksFound);
        } else {
            Self::tasks(state.page_items(), state.editing().map(|editing| editing.id))?;
        }

        msg_print!(Message::PageFooter {
            page: state.current_page(),
            pages: state.page_count(),
            total: state.collection().len(),
        });

        if let Some(editing) = state.editing() {
            msg_print!(Message::EditingTask(editing.text.clone()));
        }

        Ok(())
    }

    pub fn tasks(tasks: &[Task], editing_id: Option<i64>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE"]);
        for task in tasks {
            let marker = if task.completed { "[x]" } else { "[ ]" };
            let title = match editing_id {
                Some(id) if id == task.id => format!("✎ {}", task.title),
                _ => task.title.clone(),
            };
            table.add_row(row![task.id, marker, title]);
        }
        table.printstd();

        Ok(())
    }

    /// One line per task, used as selection items in the interactive session.
    pub fn task_label(task: &Task) -> String {
        format!("{} {} {}", if task.completed { "[x]" } else { "[ ]" }, task.id, task.title)
    }
}
