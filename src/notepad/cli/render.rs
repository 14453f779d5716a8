use colored::Colorize;
use notepad::api::{CmdMessage, CmdResult, MessageLevel};
use notepad::error::NotepadError;
use notepad::model::DisplayNote;

fn prefix(level: MessageLevel, styled: bool) -> String {
    let tag = match level {
        MessageLevel::Info => "[Info]",
        MessageLevel::Success => "[OK]",
        MessageLevel::Error => "[Error]",
    };
    if !styled {
        return tag.to_string();
    }
    match level {
        MessageLevel::Info => tag.cyan().to_string(),
        MessageLevel::Success => tag.green().to_string(),
        MessageLevel::Error => tag.red().to_string(),
    }
}

pub(super) fn render_message(message: &CmdMessage, styled: bool) -> String {
    format!("{} {}", prefix(message.level, styled), message.content)
}

pub(super) fn render_error(error: &NotepadError, styled: bool) -> String {
    render_message(&CmdMessage::error(error.to_string()), styled)
}

pub(super) fn render_note(dn: &DisplayNote, styled: bool) -> String {
    format!(
        "{} {}: {}",
        prefix(MessageLevel::Info, styled),
        dn.position,
        dn.note
    )
}

/// Listed notes first, then messages, one line each.
pub(super) fn render_result(result: &CmdResult, styled: bool) -> Vec<String> {
    result
        .listed_notes
        .iter()
        .map(|dn| render_note(dn, styled))
        .chain(result.messages.iter().map(|m| render_message(m, styled)))
        .collect()
}
