use super::open_list;
use crate::{
    api::TodosApi,
    libs::{
        todo_list::{ListError, TodoList},
        view::View,
    },
    msg_error, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true, help = "Title of the new task")]
    title: String,
}

#[derive(Debug, Args)]
pub struct TaskIdArgs {
    #[arg(required = true, help = "Task id")]
    id: i64,
    #[arg(short, long, default_value_t = 1, help = "Page the task is on")]
    page: usize,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(required = true, help = "Task id")]
    id: i64,
    #[arg(required = true, help = "New title")]
    title: String,
    #[arg(short, long, default_value_t = 1, help = "Page the task is on")]
    page: usize,
}

pub async fn add(args: AddArgs) -> Result<()> {
    let Some(mut list) = loaded(1).await? else {
        return Ok(());
    };
    report(list.add(&args.title).await.map(|_| ()));
    View::list(list.state())
}

pub async fn toggle(args: TaskIdArgs) -> Result<()> {
    let Some(mut list) = loaded(args.page).await? else {
        return Ok(());
    };
    report(list.toggle(args.id).await);
    View::list(list.state())
}

pub async fn edit(args: EditArgs) -> Result<()> {
    let Some(mut list) = loaded(args.page).await? else {
        return Ok(());
    };
    match list.edit(args.id, &args.title).await {
        Ok(true) => {}
        Ok(false) => msg_warning!(ListError::EmptyTitle),
        Err(e) => report(Err(e)),
    }
    View::list(list.state())
}

pub async fn delete(args: TaskIdArgs) -> Result<()> {
    let Some(mut list) = loaded(args.page).await? else {
        return Ok(());
    };
    report(list.delete(args.id).await);
    View::list(list.state())
}

/// Opens and loads the list on `page`. A failed load is rendered and yields `None`.
async fn loaded(page: usize) -> Result<Option<TodoList<TodosApi>>> {
    let mut list = open_list()?;
    if list.load().await.is_err() {
        View::list(list.state())?;
        return Ok(None);
    }
    list.go_to_page(page);
    Ok(Some(list))
}

/// Remote failures show up through the banner and notification; only the
/// local rejections need a line of their own.
fn report(result: Result<(), ListError>) {
    match result {
        Ok(()) | Err(ListError::Remote { .. }) => {}
        Err(e @ ListError::EmptyTitle) => msg_warning!(e),
        Err(e) => msg_error!(e),
    }
}
