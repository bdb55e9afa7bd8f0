//! # TitleBar Component
//!
//! Top status bar shown behind every dialog.
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! 1. **With status**: `"Roster | user_data.txt"`
//! 2. **Default**: `"Roster"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub const APP_TITLE: &str = "Roster";

pub struct TitleBar<'a> {
    /// Status text (e.g. the data file in use)
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(status_message: &'a str) -> Self {
        Self { status_message }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            APP_TITLE.to_string()
        } else {
            format!("{} | {}", APP_TITLE, self.status_message)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
