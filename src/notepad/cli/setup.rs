use clap::Parser;
use notepad::config::Capacity;

#[derive(Parser, Debug)]
#[command(name = "notepad", bin_name = "notepad", version)]
#[command(about = "Interactive in-memory notepad", long_about = None)]
pub struct Cli {
    /// Maximum number of notes (prompted for when omitted)
    #[arg(short = 'n', long, value_name = "N", help_heading = "Options")]
    pub max_notes: Option<Capacity>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}
