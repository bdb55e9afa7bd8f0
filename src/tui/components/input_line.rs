//! # InputLine Component
//!
//! Single-line text field used by prompt dialogs.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste (first pasted line only)
//! - Handle editing (backspace, delete, cursor movement)
//! - Scroll horizontally so the cursor stays visible
//!
//! Cursor position is a byte offset into `buffer`, always on a char boundary.
//! Screen placement uses display width, so wide characters line up.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputLine
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed; carries the whole buffer
    Submit(String),
    ContentChanged,
}

#[derive(Debug, Default)]
pub struct InputLine {
    pub buffer: String,
    /// Byte offset of the cursor (0..=buffer.len())
    pos: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.pos
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.pos, text);
        self.pos += text.len();
    }

    /// Columns between the start of the buffer and the cursor, saturating at `u16::MAX`.
    fn cursor_column(&self) -> u16 {
        u16::try_from(self.buffer[..self.pos].width()).unwrap_or(u16::MAX)
    }

    /// Horizontal scroll that keeps the cursor inside a field `width` columns wide.
    fn scroll_for(&self, width: u16) -> u16 {
        self.cursor_column().saturating_sub(width.saturating_sub(1))
    }
}

impl Component for InputLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let scroll = self.scroll_for(area.width);
        let field = Paragraph::new(self.buffer.as_str())
            .style(Style::default().fg(Color::Green))
            .scroll((0, scroll));
        frame.render_widget(field, area);

        let x = area.x + (self.cursor_column() - scroll);
        frame.set_cursor_position((x, area.y));
    }
}

impl EventHandler for InputLine {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let first_line = text.lines().next().unwrap_or("");
                if first_line.is_empty() {
                    return None;
                }
                self.insert_str(first_line);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => (self.pos > 0).then(|| {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.pos < self.buffer.len()).then(|| {
                self.pos = next_char_boundary(&self.buffer, self.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.pos != 0).then(|| {
                self.pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.pos != self.buffer.len()).then(|| {
                self.pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                let text = std::mem::take(&mut self.buffer);
                self.pos = 0;
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}
