//! # TUI Adapter
//!
//! The ratatui-specific layer. Implements `Prompter` by drawing each prompt
//! or notice as a centered modal dialog and blocking until the operator
//! answers it.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The console adapter implements the same `Prompter` without either.
//!
//! ## Redraw Strategy
//!
//! A dialog is redrawn after every event it receives (and on resize). There
//! is no animation, so between keystrokes the loop just waits on crossterm.
//!
//! A terminal I/O failure inside a dialog is logged and treated as the
//! operator cancelling, so the controller always gets an answer and the
//! session still reaches its save on quit.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::{self, stdout};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::controller::Controller;
use crate::core::prompt::Prompter;
use crate::tui::component::EventHandler;
use crate::tui::components::{DialogEvent, DialogKind, DialogState};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
    }
}

/// `Prompter` backed by full-screen ratatui dialogs.
pub struct TuiPrompter {
    terminal: DefaultTerminal,
    status_message: String,
    _terminal_mode_guard: TerminalModeGuard,
}

impl TuiPrompter {
    pub fn new(status_message: String) -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        let guard = match TerminalModeGuard::new() {
            Ok(guard) => guard,
            Err(e) => {
                ratatui::restore();
                return Err(e);
            }
        };
        Ok(Self {
            terminal,
            status_message,
            _terminal_mode_guard: guard,
        })
    }

    /// Show one dialog until it closes. Terminal errors count as cancel.
    fn run_dialog(&mut self, kind: DialogKind, title: &str, body: &str) -> DialogEvent {
        match self.try_run_dialog(kind, title, body) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Dialog {:?} failed, treating as cancel: {}", title, e);
                DialogEvent::Cancelled
            }
        }
    }

    fn try_run_dialog(
        &mut self,
        kind: DialogKind,
        title: &str,
        body: &str,
    ) -> io::Result<DialogEvent> {
        let mut state = DialogState::new(kind, title, body);
        loop {
            self.terminal
                .draw(|f| ui::draw_ui(f, &self.status_message, &mut state))?;
            let event = event::next_event()?;
            if let Some(outcome) = state.handle_event(&event) {
                return Ok(outcome);
            }
        }
    }
}

impl Prompter for TuiPrompter {
    fn prompt_text(&mut self, title: &str, body: &str) -> Option<String> {
        match self.run_dialog(DialogKind::Text, title, body) {
            DialogEvent::Text(text) => Some(text),
            _ => None,
        }
    }

    fn prompt_confirm(&mut self, title: &str, body: &str) -> bool {
        matches!(
            self.run_dialog(DialogKind::Confirm, title, body),
            DialogEvent::Confirm(true)
        )
    }

    fn notify_info(&mut self, title: &str, body: &str) {
        self.run_dialog(DialogKind::Info, title, body);
    }

    fn notify_error(&mut self, title: &str, body: &str) {
        self.run_dialog(DialogKind::Error, title, body);
    }
}

/// Load, run the menu loop, and restore the terminal.
pub fn run(controller: &mut Controller) -> io::Result<()> {
    let status = controller.store_path().display().to_string();
    let mut prompter = TuiPrompter::new(status)?;
    controller.load(&mut prompter);
    controller.run(&mut prompter);
    Ok(())
}
