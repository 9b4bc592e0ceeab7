use super::open_list;
use crate::{
    libs::{messages::Message, view::View},
    msg_info,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let mut list = open_list()?;

    if list.refresh().await.is_ok() {
        msg_info!(Message::CacheCleared);
        msg_info!(Message::TodosRestoredFromRemote(list.state().collection().len()));
    }

    View::list(list.state())
}
