use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotepadError, Result};
use crate::store::DataStore;

use super::helpers::{check_bounds, live_index, parse_position};

pub fn run<S: DataStore>(store: &mut S, args: &[String]) -> Result<CmdResult> {
    let Some(position) = parse_position(args)? else {
        if store.is_empty() {
            return Err(NotepadError::NothingTo("delete"));
        }
        return Err(NotepadError::MissingPositionArgument);
    };

    check_bounds(store, position)?;
    let index = live_index(store, position, "delete")?;

    let removed = store.remove(index)?;
    log::debug!("note {} deleted: {:?}", position, removed.text);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "The note at position {} was successfully deleted",
        position
    ))))
}
