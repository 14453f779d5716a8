use super::DataStore;
use crate::config::Capacity;
use crate::error::{NotepadError, Result};
use crate::model::Note;

/// In-memory storage. Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    capacity: Capacity,
}

impl InMemoryStore {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            notes: Vec::new(),
            capacity,
        }
    }
}

impl DataStore for InMemoryStore {
    fn capacity(&self) -> Capacity {
        self.capacity
    }

    fn notes(&self) -> &[Note] {
        &self.notes
    }

    fn push(&mut self, note: Note) -> Result<()> {
        if self.is_full() {
            return Err(NotepadError::NotepadFull);
        }
        self.notes.push(note);
        Ok(())
    }

    fn replace(&mut self, index: usize, note: Note) -> Result<Note> {
        let slot = self
            .notes
            .get_mut(index)
            .ok_or(NotepadError::NoteNotFound(index))?;
        Ok(std::mem::replace(slot, note))
    }

    fn remove(&mut self, index: usize) -> Result<Note> {
        if index >= self.notes.len() {
            return Err(NotepadError::NoteNotFound(index));
        }
        Ok(self.notes.remove(index))
    }

    fn clear(&mut self) {
        self.notes.clear();
    }
}

// --- Test Fixtures ---
