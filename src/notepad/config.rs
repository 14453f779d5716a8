use crate::error::{NotepadError, Result};
use std::fmt;
use std::str::FromStr;

/// Maximum number of notes a session may hold. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(usize);

impl Capacity {
    pub fn new(max_notes: usize) -> Result<Self> {
        if max_notes == 0 {
            return Err(NotepadError::InvalidCapacity(max_notes.to_string()));
        }
        Ok(Self(max_notes))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for Capacity {
    type Err = NotepadError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || NotepadError::InvalidCapacity(trimmed.to_string());
        if trimmed.starts_with('-') {
            return Err(invalid());
        }
        let n: usize = trimmed.parse().map_err(|_| invalid())?;
        Self::new(n).map_err(|_| invalid())
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session configuration, fixed at startup and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotepadConfig {
    pub capacity: Capacity,
}

impl NotepadConfig {
    pub fn new(capacity: Capacity) -> Self {
        Self { capacity }
    }
}
