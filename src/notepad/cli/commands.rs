use super::receiver::InputReceiver;
use super::session::{prompt_capacity, Session};
use super::setup::Cli;
use clap::Parser;
use notepad::api::NotepadApi;
use notepad::config::NotepadConfig;
use notepad::error::Result;
use notepad::store::DataStore;
use std::io::{self, IsTerminal};

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    let mut out = stdout.lock();
    let mut receiver = InputReceiver::new(io::stdin().lock());

    let capacity = match cli.max_notes {
        Some(capacity) => capacity,
        None => prompt_capacity(&mut receiver, &mut out)?,
    };
    log::info!("notepad started with room for {} notes", capacity);

    let api = NotepadApi::from_config(NotepadConfig::new(capacity));
    let mut session = Session::new(receiver, api, out).styled(styled);
    let outcome = session.run();
    log::debug!(
        "discarding {} notes on shutdown",
        session.api().store().len()
    );
    outcome
}
