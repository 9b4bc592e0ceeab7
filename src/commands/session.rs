//! Interactive session over a single in-memory list.
//!
//! Unlike the one-shot commands, the list state survives between actions, so
//! page-scoped changes stay visible until the page is recomputed and editing
//! can be started, revised, saved or cancelled as separate steps.

use super::open_list;
use crate::{
    api::TodosApi,
    libs::{
        messages::Message,
        state::ListState,
        todo_list::{ListError, TodoList},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionAction {
    Add,
    Toggle,
    Edit,
    SaveEdit,
    CancelEdit,
    Delete,
    NextPage,
    PreviousPage,
    Refresh,
    Quit,
}

impl SessionAction {
    fn message(self) -> Message {
        match self {
            SessionAction::Add => Message::SessionAdd,
            SessionAction::Toggle => Message::SessionToggle,
            SessionAction::Edit => Message::SessionEdit,
            SessionAction::SaveEdit => Message::SessionSaveEdit,
            SessionAction::CancelEdit => Message::SessionCancelEdit,
            SessionAction::Delete => Message::SessionDelete,
            SessionAction::NextPage => Message::SessionNextPage,
            SessionAction::PreviousPage => Message::SessionPreviousPage,
            SessionAction::Refresh => Message::SessionRefresh,
            SessionAction::Quit => Message::SessionQuit,
        }
    }
}

/// Actions that make sense for the current state, in menu order.
fn available_actions(state: &ListState) -> Vec<SessionAction> {
    let mut actions = Vec::new();

    if state.editing().is_some() {
        actions.push(SessionAction::SaveEdit);
        actions.push(SessionAction::CancelEdit);
    }
    actions.push(SessionAction::Add);
    if !state.page_items().is_empty() {
        actions.extend([SessionAction::Toggle, SessionAction::Edit, SessionAction::Delete]);
    }
    if state.current_page() < state.page_count() {
        actions.push(SessionAction::NextPage);
    }
    if state.current_page() > 1 {
        actions.push(SessionAction::PreviousPage);
    }
    actions.push(SessionAction::Refresh);
    actions.push(SessionAction::Quit);

    actions
}

pub async fn cmd() -> Result<()> {
    let mut list = open_list()?;
    let _ = list.load().await;

    loop {
        View::list(list.state())?;

        let actions = available_actions(list.state());
        let labels: Vec<String> = actions.iter().map(|action| action.message().to_string()).collect();
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSessionAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        let result = match actions[choice] {
            SessionAction::Add => {
                let title: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptNewTitle.to_string())
                    .allow_empty(true)
                    .interact_text()?;
                list.add(&title).await.map(|_| ())
            }
            SessionAction::Toggle => match select_task(&list)? {
                Some(id) => list.toggle(id).await,
                None => Ok(()),
            },
            SessionAction::Edit => {
                if let Some(id) = select_task(&list)? {
                    start_editing(&mut list, id)?;
                }
                Ok(())
            }
            SessionAction::SaveEdit => match list.save_edit().await {
                Ok(false) => Err(ListError::EmptyTitle),
                Ok(true) => Ok(()),
                Err(e) => Err(e),
            },
            SessionAction::CancelEdit => {
                list.cancel_editing();
                Ok(())
            }
            SessionAction::Delete => match select_task(&list)? {
                Some(id) => list.delete(id).await,
                None => Ok(()),
            },
            SessionAction::NextPage => {
                list.next_page();
                Ok(())
            }
            SessionAction::PreviousPage => {
                list.previous_page();
                Ok(())
            }
            SessionAction::Refresh => list.refresh().await,
            SessionAction::Quit => break,
        };

        match result {
            Ok(()) | Err(ListError::Remote { .. }) => {}
            Err(e @ ListError::EmptyTitle) => msg_warning!(e),
            Err(e) => msg_error!(e),
        }
    }

    msg_print!(Message::SessionEnded);
    Ok(())
}

fn select_task(list: &TodoList<TodosApi>) -> Result<Option<i64>> {
    let tasks = list.state().page_items();
    if tasks.is_empty() {
        msg_info!(Message::NoTasksOnPage);
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(View::task_label).collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|index| tasks[index].id))
}

fn start_editing(list: &mut TodoList<TodosApi>, id: i64) -> Result<()> {
    let Some(task) = list.state().page_items().iter().find(|task| task.id == id).cloned() else {
        return Ok(());
    };
    list.start_editing(id, &task.title);

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEditTitle.to_string())
        .default(task.title)
        .allow_empty(true)
        .interact_text()?;
    list.set_edit_text(&text);

    Ok(())
}
