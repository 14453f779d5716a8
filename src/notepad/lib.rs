//! # Notepad Architecture
//!
//! Notepad is a small interactive note-taking tool: a session fixes a maximum
//! number of notes, then reads one command per line and applies it to an
//! in-memory list. Nothing is persisted.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Receives lines, renders [OK]/[Error]/[Info] output       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs) + API Layer (api.rs)                    │
//! │  - Splits a line into a command name and arguments          │
//! │  - Resolves the name to a Verb and dispatches               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and business logic per verb                   │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, bounded InMemoryStore                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions
//!
//! Users address notes by 1-based position; the store is 0-based. Deleting a
//! note shifts every later note one position down, so positions are not stable
//! identifiers.
//!
//! ## Ending a Session
//!
//! From `api.rs` inward nothing calls `std::process::exit`. The `exit` command
//! returns a result whose [`commands::Flow`] is `Stop`, and the CLI loop ends
//! on that signal.
//!
//! ## Module Overview
//!
//! - [`api`]: The executor facade, entry point for all operations
//! - [`commands`]: Handlers for each verb, result and message types
//! - [`parser`]: Line to [`parser::Command`] splitting
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Note`, `DisplayNote`)
//! - [`config`]: Session capacity
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;
