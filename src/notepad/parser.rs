//! Turns one raw input line into a [`Command`].
//!
//! Parsing is deliberately shallow: the line is split on whitespace, the first
//! word becomes the command name and the rest its arguments. Whether the name is
//! a known verb, or whether a position is numeric, is decided at execution time.

use crate::error::{NotepadError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

pub fn parse(input: &str) -> Result<Command> {
    let mut parts = input.split_whitespace().map(str::to_string);

    let name = parts.next().ok_or(NotepadError::MissingNoteArgument)?;
    let args: Vec<String> = parts.collect();

    if name == "create" && args.is_empty() {
        return Err(NotepadError::MissingNoteArgument);
    }

    Ok(Command::new(name, args))
}
