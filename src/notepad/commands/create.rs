use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotepadError, Result};
use crate::model::Note;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, args: &[String]) -> Result<CmdResult> {
    if args.is_empty() {
        return Err(NotepadError::MissingNoteArgument);
    }
    if store.is_full() {
        log::debug!("create rejected, {} of {} notes used", store.len(), store.capacity());
        return Err(NotepadError::NotepadFull);
    }

    store.push(Note::from_words(args))?;
    log::debug!("note created at position {}", store.len());

    Ok(CmdResult::default().with_message(CmdMessage::success(
        "The note was successfully created.",
    )))
}
