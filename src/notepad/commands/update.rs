use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotepadError, Result};
use crate::model::Note;
use crate::store::DataStore;

use super::helpers::{check_bounds, live_index, parse_position};

pub fn run<S: DataStore>(store: &mut S, args: &[String]) -> Result<CmdResult> {
    let position = parse_position(args)?;

    if args.len() == 1 {
        return Err(NotepadError::MissingNoteArgument);
    }
    if store.is_empty() {
        return Err(NotepadError::NothingTo("update"));
    }
    let Some(position) = position else {
        return Err(NotepadError::MissingPositionArgument);
    };

    check_bounds(store, position)?;
    let index = live_index(store, position, "update")?;

    let previous = store.replace(index, Note::from_words(&args[1..]))?;
    log::debug!("note {} updated, was {:?}", position, previous.text);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "The note at position {} was successfully updated",
        position
    ))))
}
