use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Bye!"))
        .stop())
}
