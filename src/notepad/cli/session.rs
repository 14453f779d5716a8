//! The interactive loop: prompt, receive, parse, execute, render.
//!
//! A failure at any stage is rendered as an `[Error]` line and the loop goes on.
//! Only two things end it: a command result carrying [`Flow::Stop`] (clean end),
//! or the input stream closing (reported to the caller as an error).

use super::receiver::Receiver;
use super::render::{render_error, render_result};
use notepad::api::{Flow, NotepadApi};
use notepad::config::Capacity;
use notepad::error::{ErrorKind, NotepadError, Result};
use notepad::parser;
use notepad::store::DataStore;
use std::io::Write;

pub const CAPACITY_PROMPT: &str = "Enter the maximum number of notes:";
pub const COMMAND_PROMPT: &str = "Enter a command and data:";

/// Asks for the capacity until a positive integer is entered.
pub fn prompt_capacity<R: Receiver, W: Write>(receiver: &mut R, out: &mut W) -> Result<Capacity> {
    loop {
        writeln!(out, "{}", CAPACITY_PROMPT).map_err(NotepadError::Output)?;
        out.flush().map_err(NotepadError::Output)?;

        match receiver.receive() {
            Ok(line) => match line.parse::<Capacity>() {
                Ok(capacity) => return Ok(capacity),
                Err(e) => log::debug!("{}", e),
            },
            Err(NotepadError::EndOfInput) => return Err(NotepadError::EndOfInput),
            Err(e) => log::warn!("{}", e),
        }
    }
}

pub struct Session<R: Receiver, W: Write, S: DataStore> {
    receiver: R,
    api: NotepadApi<S>,
    out: W,
    styled: bool,
}

impl<R: Receiver, W: Write, S: DataStore> Session<R, W, S> {
    pub fn new(receiver: R, api: NotepadApi<S>, out: W) -> Self {
        Self {
            receiver,
            api,
            out,
            styled: false,
        }
    }

    /// Colors status prefixes; meant for terminal output.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.out, "{}", COMMAND_PROMPT).map_err(NotepadError::Output)?;
            self.out.flush().map_err(NotepadError::Output)?;

            if self.step()? == Flow::Stop {
                log::debug!("session stopped");
                return Ok(());
            }
        }
    }

    /// Handles one line of input. Only a closed input stream or a failed
    /// write escapes as `Err`.
    pub fn step(&mut self) -> Result<Flow> {
        let line = match self.receiver.receive() {
            Ok(line) => line,
            Err(NotepadError::EndOfInput) => return Err(NotepadError::EndOfInput),
            Err(e) => {
                self.print_error(&e)?;
                return Ok(Flow::Continue);
            }
        };

        let command = match parser::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                self.print_error(&e)?;
                return Ok(Flow::Continue);
            }
        };

        match self.api.execute(&command) {
            Ok(result) => {
                for rendered in render_result(&result, self.styled) {
                    writeln!(self.out, "{}", rendered).map_err(NotepadError::Output)?;
                }
                Ok(result.flow)
            }
            Err(e) => {
                log::debug!("{} rejected", command.name);
                self.print_error(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn api(&self) -> &NotepadApi<S> {
        &self.api
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn print_error(&mut self, error: &NotepadError) -> Result<()> {
        match error.kind() {
            ErrorKind::Input => log::warn!("input failure: {}", error),
            ErrorKind::Parse => log::debug!("parse failure: {}", error),
            ErrorKind::Execution => log::debug!("execution failure: {:?}", error),
        }
        writeln!(self.out, "{}", render_error(error, self.styled)).map_err(NotepadError::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::receiver::InputReceiver;
    use notepad::store::memory::InMemoryStore;
    use std::io::Cursor;

    type TestSession = Session<InputReceiver<Cursor<Vec<u8>>>, Vec<u8>, InMemoryStore>;

    fn session(max_notes: usize, input: &str) -> TestSession {
        session_from_bytes(max_notes, input.as_bytes().to_vec())
    }

    fn session_from_bytes(max_notes: usize, input: Vec<u8>) -> TestSession {
        let capacity = Capacity::new(max_notes).unwrap();
        let api = NotepadApi::new(InMemoryStore::new(capacity));
        Session::new(InputReceiver::new(Cursor::new(input)), api, Vec::new())
    }

    fn output_lines(session: TestSession) -> Vec<String> {
        let out = String::from_utf8(session.into_output()).unwrap();
        out.split(COMMAND_PROMPT)
            .flat_map(|chunk| chunk.lines().map(str::to_string).collect::<Vec<_>>())
            .filter(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn capacity_example_session() {
        let mut s = session(
            2,
            "create hello\ncreate world\ncreate nope\nlist\nexit\n",
        );
        s.run().unwrap();
        assert_eq!(
            output_lines(s),
            vec![
                "[OK] The note was successfully created.",
                "[OK] The note was successfully created.",
                "[Error] Notepad is full.",
                "[Info] 1: hello",
                "[Info] 2: world",
                "[Info] Bye!",
            ]
        );
    }

    #[test]
    fn errors_do_not_end_the_loop() {
        let mut s = session(
            3,
            "\ncreate\nfrobnicate\ndelete 1\nupdate abc text\nexit\nlist\n",
        );
        s.run().unwrap();
        assert_eq!(
            output_lines(s),
            vec![
                "[Error] Missing note argument",
                "[Error] Missing note argument",
                "[Error] Unknown command",
                "[Error] There is nothing to delete",
                "[Error] Invalid position: abc text",
                "[Info] Bye!",
            ]
        );
    }

    #[test]
    fn unreadable_line_is_reported_and_loop_continues() {
        let mut input = b"create a\ncreate b\nupdate 2 bee\ndelete -5\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"update 1\ndelete\nupdate\nlist\nexit\n");

        let mut s = session_from_bytes(2, input);
        s.run().unwrap();
        assert_eq!(
            output_lines(s),
            vec![
                "[OK] The note was successfully created.",
                "[OK] The note was successfully created.",
                "[OK] The note at position 2 was successfully updated",
                "[Error] Position -5 is out of the boundaries [1, 2]",
                "[Error] Failed to read input: stream did not contain valid UTF-8",
                "[Error] Missing note argument",
                "[Error] Missing position argument",
                "[Error] Missing position argument",
                "[Info] 1: a",
                "[Info] 2: bee",
                "[Info] Bye!",
            ]
        );
    }

    #[test]
    fn exit_stops_before_remaining_input() {
        let mut s = session(1, "exit\ncreate never\n");
        s.run().unwrap();
        assert!(s.api().store().is_empty());
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut s = session(1, "create one\n");
        assert!(matches!(s.run(), Err(NotepadError::EndOfInput)));
        assert_eq!(s.api().store().len(), 1);
    }

    #[test]
    fn prompts_before_every_read() {
        let mut s = session(1, "list\nexit\n");
        s.run().unwrap();
        let out = String::from_utf8(s.into_output()).unwrap();
        assert_eq!(out.matches(COMMAND_PROMPT).count(), 2);
        assert!(out.starts_with(COMMAND_PROMPT));
    }

    #[test]
    fn update_and_delete_flow() {
        let mut s = session(
            3,
            "create a\ncreate b\ncreate c\nupdate 2 bee\ndelete 1\nlist\nclear\nlist\nexit\n",
        );
        s.run().unwrap();
        assert_eq!(
            output_lines(s),
            vec![
                "[OK] The note was successfully created.",
                "[OK] The note was successfully created.",
                "[OK] The note was successfully created.",
                "[OK] The note at position 2 was successfully updated",
                "[OK] The note at position 1 was successfully deleted",
                "[Info] 1: bee",
                "[Info] 2: c",
                "[OK] All notes were successfully deleted",
                "[Info] Notepad is empty",
                "[Info] Bye!",
            ]
        );
    }

    #[test]
    fn prompt_capacity_retries_until_positive() {
        let mut receiver = InputReceiver::new(Cursor::new("zero\n0\n-1\n4\n".to_string()));
        let mut out = Vec::new();
        let capacity = prompt_capacity(&mut receiver, &mut out).unwrap();
        assert_eq!(capacity.get(), 4);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(CAPACITY_PROMPT).count(), 4);
    }

    #[test]
    fn prompt_capacity_fails_on_closed_input() {
        let mut receiver = InputReceiver::new(Cursor::new("nope\n".to_string()));
        let mut out = Vec::new();
        assert!(matches!(
            prompt_capacity(&mut receiver, &mut out),
            Err(NotepadError::EndOfInput)
        ));
    }
}
