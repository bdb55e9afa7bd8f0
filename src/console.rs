//! # Console Adapter
//!
//! Line-based `Prompter` for plain terminals and pipes. Each prompt prints a
//! `== Title ==` header, the body, and a `> ` marker, then reads one line.
//! End of input is cancellation.
//!
//! Generic over the reader and writer so tests can drive it from memory.

use std::io::{self, BufRead, Write};

use log::warn;

use crate::core::prompt::Prompter;

pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, title: &str, body: &str) -> io::Result<()> {
        writeln!(self.output, "== {title} ==")?;
        let body = body.trim_end_matches('\n');
        if !body.is_empty() {
            writeln!(self.output, "{body}")?;
        }
        Ok(())
    }

    /// One line without its terminator. `None` at end of input or on a read error.
    fn read_line(&mut self) -> Option<String> {
        if let Err(e) = write!(self.output, "> ").and_then(|_| self.output.flush()) {
            warn!("Console write failed: {}", e);
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!("Console read failed: {}", e);
                None
            }
        }
    }

    fn write_notice(&mut self, title: &str, body: &str) {
        let result = self.show(title, body).and_then(|_| writeln!(self.output));
        if let Err(e) = result {
            warn!("Console write failed: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn prompt_text(&mut self, title: &str, body: &str) -> Option<String> {
        if let Err(e) = self.show(title, body) {
            warn!("Console write failed: {}", e);
        }
        self.read_line()
    }

    fn prompt_confirm(&mut self, title: &str, body: &str) -> bool {
        let question = format!("{body} [y/n]");
        loop {
            if let Err(e) = self.show(title, &question) {
                warn!("Console write failed: {}", e);
            }
            let Some(answer) = self.read_line() else {
                return false;
            };
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => {}
            }
        }
    }

    fn notify_info(&mut self, title: &str, body: &str) {
        self.write_notice(title, body);
    }

    fn notify_error(&mut self, title: &str, body: &str) {
        self.write_notice(title, &format!("error: {body}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_text_reads_one_line() {
        let mut p = prompter("hello world\r\nnext\n");
        assert_eq!(p.prompt_text("Title", "Body"), Some("hello world".to_string()));
        assert_eq!(output(p), "== Title ==\nBody\n> ");
    }

    #[test]
    fn test_empty_line_is_not_cancel() {
        let mut p = prompter("\n");
        assert_eq!(p.prompt_text("T", "B"), Some(String::new()));
        assert_eq!(p.prompt_text("T", "B"), None);
    }

    #[test]
    fn test_confirm_reasks_until_yes_or_no() {
        let mut p = prompter("maybe\nYES\n");
        assert!(p.prompt_confirm("Confirm Delete", "Sure?"));
        let out = output(p);
        assert_eq!(out.matches("Sure? [y/n]").count(), 2);
    }

    #[test]
    fn test_confirm_eof_is_no() {
        let mut p = prompter("");
        assert!(!p.prompt_confirm("Confirm Delete", "Sure?"));
    }

    #[test]
    fn test_notices() {
        let mut p = prompter("");
        p.notify_info("User Added", "Ann Lee has been added to the user list.");
        p.notify_error("ERROR", "YOU MUST SELECT FROM THE MENU");
        assert_eq!(
            output(p),
            "== User Added ==\nAnn Lee has been added to the user list.\n\n\
             == ERROR ==\nerror: YOU MUST SELECT FROM THE MENU\n\n"
        );
    }

    #[test]
    fn test_prompt_int_over_console() {
        let mut p = prompter("abc\n200\n42\n");
        assert_eq!(p.prompt_int("Age", "Enter age:", 1, 125), Some(42));
        let out = output(p);
        assert!(out.contains("error: Please enter a whole number."));
        assert!(out.contains("error: Value must be between 1 and 125."));
    }
}
