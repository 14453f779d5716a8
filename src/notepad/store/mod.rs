//! # Storage Layer
//!
//! This module defines the storage abstraction for the notepad. The [`DataStore`]
//! trait keeps the command layer independent of how notes are held.
//!
//! ## Model
//!
//! A store is an ordered sequence of [`Note`]s with a fixed [`Capacity`]:
//! - Positions are 0-based here. Translating from the 1-based positions users
//!   type is the command layer's job.
//! - `len() <= capacity()` holds at all times; [`DataStore::push`] refuses to
//!   grow past it.
//! - Removing a note shifts every later note one position to the left.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Nothing is persisted.

use crate::config::Capacity;
use crate::error::Result;
use crate::model::Note;

pub mod memory;

/// Abstract interface for note storage.
pub trait DataStore {
    /// Configured maximum number of notes
    fn capacity(&self) -> Capacity;

    /// All notes, in insertion order
    fn notes(&self) -> &[Note];

    /// Append a note, failing when the store is full
    fn push(&mut self, note: Note) -> Result<()>;

    /// Replace the note at a 0-based index, returning the previous note
    fn replace(&mut self, index: usize, note: Note) -> Result<Note>;

    /// Remove the note at a 0-based index, compacting the ones after it
    fn remove(&mut self, index: usize) -> Result<Note>;

    /// Drop every note
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.notes().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity().get()
    }
}
