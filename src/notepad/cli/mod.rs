//! # CLI Layer
//!
//! The terminal client for the notepad library. This is the only place that:
//! - Reads stdin and writes stdout/stderr
//! - Initializes logging
//! - Decides the process exit status
//!
//! ## Structure
//!
//! - `setup`: clap argument definitions
//! - `commands`: `run()`, wiring arguments, capacity and the session together
//! - `receiver`: line input over any `BufRead`
//! - `session`: the prompt/receive/parse/execute loop
//! - `render`: `[OK]`/`[Error]`/`[Info]` line formatting

mod commands;
mod receiver;
mod render;
mod session;
mod setup;

pub use commands::run;
