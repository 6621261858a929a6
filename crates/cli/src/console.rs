//! Line-oriented terminal seam.

use std::io::{self, BufRead, Write};

/// A prompt-and-read console over any reader/writer pair.
///
/// Production uses locked stdin/stdout; tests use a `Cursor` of scripted
/// input and a `Vec<u8>` capturing output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a message without a trailing newline, flush, and read one line.
    ///
    /// The line comes back without its terminator. A closed input stream is
    /// an error: an interactive program cannot retry past EOF.
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Print a full line.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prompt and interpret the answer as yes iff it is `y` (trimmed,
    /// case-insensitive).
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.prompt(message)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Hand back the writer, e.g. to inspect captured output in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_strips_the_line_terminator() {
        let mut c = console("hello\nworld\r\n");
        assert_eq!(c.prompt("> ").unwrap(), "hello");
        assert_eq!(c.prompt("> ").unwrap(), "world");
    }

    #[test]
    fn prompt_errors_on_exhausted_input() {
        let mut c = console("");
        let err = c.prompt("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn confirm_accepts_y_in_any_case_with_whitespace() {
        let mut c = console("y\n Y \nn\nyes\n");
        assert!(c.confirm("? ").unwrap());
        assert!(c.confirm("? ").unwrap());
        assert!(!c.confirm("? ").unwrap());
        assert!(!c.confirm("? ").unwrap());
    }

    #[test]
    fn prompt_writes_the_message_without_newline() {
        let mut c = console("x\n");
        c.prompt("pick: ").unwrap();
        c.say("done").unwrap();
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "pick: done\n");
    }
}
