use super::open_list;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, default_value_t = 1, help = "Page to show, starting at 1")]
    page: usize,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let mut list = open_list()?;
    // A failed load is already reflected in the banner and notification
    let _ = list.load().await;
    list.go_to_page(args.page);

    View::list(list.state())
}
