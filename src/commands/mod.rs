pub mod init;
pub mod list;
pub mod refresh;
pub mod session;
pub mod task;

use crate::api::TodosApi;
use crate::libs::{cache::Cache, config::Config, todo_list::TodoList};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Show a page of tasks")]
    List(list::ListArgs),
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(task::AddArgs),
    #[command(about = "Toggle completion of a task", arg_required_else_help = true)]
    Toggle(task::TaskIdArgs),
    #[command(about = "Change the title of a task", arg_required_else_help = true)]
    Edit(task::EditArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(task::TaskIdArgs),
    #[command(about = "Discard the local copy and fetch the remote collection again")]
    Refresh,
    #[command(about = "Work with the list interactively")]
    Session,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => task::add(args).await,
            Commands::Toggle(args) => task::toggle(args).await,
            Commands::Edit(args) => task::edit(args).await,
            Commands::Delete(args) => task::delete(args).await,
            Commands::Refresh => refresh::cmd().await,
            Commands::Session => session::cmd().await,
        }
    }
}

/// Builds a list from the stored configuration without loading it.
pub(crate) fn open_list() -> Result<TodoList<TodosApi>> {
    let config = Config::read()?;
    let list_config = config.list();
    let remote = TodosApi::new(&config.api());
    let cache = Cache::new(&list_config.cache_key)?;

    Ok(TodoList::new(remote, cache, &list_config))
}
