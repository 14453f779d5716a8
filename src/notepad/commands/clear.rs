use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    log::debug!("clearing {} notes", store.len());
    store.clear();
    Ok(CmdResult::default().with_message(CmdMessage::success(
        "All notes were successfully deleted",
    )))
}
