//! # API Facade
//!
//! The executor of the notepad: a thin facade that owns the note store and
//! dispatches parsed commands to the handlers in `commands/*.rs`.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** a [`Command`] to its handler by resolving its name to a [`Verb`]
//! - **Owns** the store exclusively; nothing else mutates it
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! Unknown command names surface as [`NotepadError::UnknownCommand`]. Every
//! handler failure is an ordinary `Err`, so the caller decides how to report it.
//! The `exit` command does not end the process: its result carries
//! [`Flow::Stop`](crate::commands::Flow::Stop) and the caller ends its loop.
//!
//! ## Generic Over DataStore
//!
//! `NotepadApi<S: DataStore>` is generic over the storage backend so tests can
//! supply pre-filled fixtures.

use crate::commands::{self, Verb};
use crate::config::NotepadConfig;
use crate::error::Result;
use crate::parser::Command;
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;

pub struct NotepadApi<S: DataStore> {
    store: S,
}

impl NotepadApi<InMemoryStore> {
    /// Builds an API over a fresh in-memory store sized by `config`.
    pub fn from_config(config: NotepadConfig) -> Self {
        Self::new(InMemoryStore::new(config.capacity))
    }
}

impl<S: DataStore> NotepadApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(&mut self, command: &Command) -> Result<commands::CmdResult> {
        let verb: Verb = command.name.parse()?;
        log::debug!("executing {} with {} args", verb, command.args.len());

        match verb {
            Verb::Create => self.create_note(&command.args),
            Verb::List => self.list_notes(),
            Verb::Update => self.update_note(&command.args),
            Verb::Delete => self.delete_note(&command.args),
            Verb::Clear => self.clear_notes(),
            Verb::Exit => self.exit(),
        }
    }

    pub fn create_note(&mut self, args: &[String]) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, args)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_note(&mut self, args: &[String]) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, args)
    }

    pub fn delete_note(&mut self, args: &[String]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, args)
    }

    pub fn clear_notes(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn exit(&self) -> Result<commands::CmdResult> {
        commands::exit::run()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, Flow, MessageLevel};
