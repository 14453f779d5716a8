use crate::error::{NotepadError, Result};
use crate::model::DisplayNote;
use std::fmt;
use std::str::FromStr;

pub mod clear;
pub mod create;
pub mod delete;
pub mod exit;
pub mod helpers;
pub mod list;
pub mod update;

/// The fixed set of commands the notepad understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    List,
    Update,
    Delete,
    Clear,
    Exit,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::List => "list",
            Verb::Update => "update",
            Verb::Delete => "delete",
            Verb::Clear => "clear",
            Verb::Exit => "exit",
        }
    }
}

impl FromStr for Verb {
    type Err = NotepadError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "create" => Ok(Verb::Create),
            "list" => Ok(Verb::List),
            "update" => Ok(Verb::Update),
            "delete" => Ok(Verb::Delete),
            "clear" => Ok(Verb::Clear),
            "exit" => Ok(Verb::Exit),
            other => Err(NotepadError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the session should keep reading commands after this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
    pub flow: Flow,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn stop(mut self) -> Self {
        self.flow = Flow::Stop;
        self
    }
}
