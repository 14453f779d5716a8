use thiserror::Error;

/// Coarse grouping of failures: reading input, parsing a line, or running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Parse,
    Execution,
}

#[derive(Error, Debug)]
pub enum NotepadError {
    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(std::io::Error),

    #[error("Input stream closed")]
    EndOfInput,

    #[error("Missing note argument")]
    MissingNoteArgument,

    #[error("Missing position argument")]
    MissingPositionArgument,

    #[error("Unknown command")]
    UnknownCommand(String),

    #[error("Notepad is full.")]
    NotepadFull,

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Position {position} is out of the boundaries [1, {max}]")]
    OutOfBounds { position: i64, max: usize },

    #[error("There is nothing to {0}")]
    NothingTo(&'static str),

    #[error("No note at index {0}")]
    NoteNotFound(usize),

    #[error("Invalid number of notes: {0}")]
    InvalidCapacity(String),
}

impl NotepadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotepadError::Input(_) | NotepadError::Output(_) | NotepadError::EndOfInput => {
                ErrorKind::Input
            }
            NotepadError::MissingNoteArgument => ErrorKind::Parse,
            _ => ErrorKind::Execution,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotepadError>;
