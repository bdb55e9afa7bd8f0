//! # Prompt Capability
//!
//! The controller never touches a terminal. It talks to a `Prompter`, the
//! small set of modal interactions every front end provides:
//!
//! ```text
//! Controller ──► Prompter ──┬── tui::TuiPrompter        (ratatui dialogs)
//!                           ├── console::ConsolePrompter (line-based)
//!                           └── test_support::ScriptedPrompter
//! ```
//!
//! `None` from a prompt means the operator cancelled. That is distinct from an
//! invalid answer, which front ends never see: the provided `prompt_int` and
//! `prompt_float` methods parse and range-check on top of `prompt_text`,
//! showing an error notice and asking again until the answer is acceptable.

use std::fmt::Display;
use std::str::FromStr;

pub const INPUT_ERROR_TITLE: &str = "Input Error";

pub trait Prompter {
    /// Ask for a line of free text. `None` if cancelled.
    fn prompt_text(&mut self, title: &str, body: &str) -> Option<String>;

    /// Ask a yes/no question. Cancelling answers no.
    fn prompt_confirm(&mut self, title: &str, body: &str) -> bool;

    fn notify_info(&mut self, title: &str, body: &str);

    fn notify_error(&mut self, title: &str, body: &str);

    /// Ask for a whole number in `[min, max]`, re-asking until valid or cancelled.
    fn prompt_int(&mut self, title: &str, body: &str, min: i64, max: i64) -> Option<i64> {
        prompt_in_range(self, title, body, min, max, "Please enter a whole number.")
    }

    /// Ask for a decimal number in `[min, max]`, re-asking until valid or cancelled.
    fn prompt_float(&mut self, title: &str, body: &str, min: f64, max: f64) -> Option<f64> {
        prompt_in_range(self, title, body, min, max, "Please enter a number.")
    }
}

fn prompt_in_range<P, T>(
    prompter: &mut P,
    title: &str,
    body: &str,
    min: T,
    max: T,
    not_a_number: &str,
) -> Option<T>
where
    P: Prompter + ?Sized,
    T: FromStr + PartialOrd + Display + Copy,
{
    loop {
        let answer = prompter.prompt_text(title, body)?;
        let Ok(value) = answer.trim().parse::<T>() else {
            prompter.notify_error(INPUT_ERROR_TITLE, not_a_number);
            continue;
        };
        // Written as a negated range check so NaN is rejected too
        if !(value >= min && value <= max) {
            prompter.notify_error(
                INPUT_ERROR_TITLE,
                &format!("Value must be between {min} and {max}."),
            );
            continue;
        }
        return Some(value);
    }
}
