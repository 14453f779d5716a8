use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DisplayNote;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    if store.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Notepad is empty")));
    }

    let listed = store
        .notes()
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            position: i + 1,
            note: note.clone(),
        })
        .collect();

    Ok(CmdResult::default().with_listed_notes(listed))
}
