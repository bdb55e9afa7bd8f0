//! # Dialog Component
//!
//! Centered modal overlay for every prompt and notice the controller issues.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DialogState` lives for the duration of one prompt
//! - `Dialog` is created each frame with borrowed state
//!
//! ```text
//! ┌ Title ─────────────────────────────┐
//! │ body text, wrapped                 │
//! │                                    │
//! │ > input / [ Yes ]  No  / (nothing) │
//! └──────── Enter Submit  Esc Cancel ──┘
//! ```
//!
//! A body taller than the screen scrolls with ↑/↓/PgUp/PgDn, and the bottom
//! border carries a `▼ more` / `▲ more` marker while text is out of view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_line::{InputEvent, InputLine};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Text,
    Confirm,
    Info,
    Error,
}

/// Events emitted by a dialog when it closes.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    Text(String),
    Confirm(bool),
    Acknowledged,
    Cancelled,
}

/// Persistent state for one open dialog.
pub struct DialogState {
    pub kind: DialogKind,
    pub title: String,
    pub body: String,
    pub input: InputLine,
    /// Highlighted confirm choice (true = Yes)
    pub yes_selected: bool,
    /// First body line shown
    pub scroll: u16,
    /// Largest useful `scroll`, from the last render
    max_scroll: u16,
    /// Body rows visible at the last render (for page-sized steps)
    viewport_height: u16,
}

impl DialogState {
    pub fn new(kind: DialogKind, title: &str, body: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            body: body.trim_end_matches('\n').to_string(),
            input: InputLine::new(),
            yes_selected: true,
            scroll: 0,
            max_scroll: 0,
            viewport_height: 0,
        }
    }

    /// Handle a scroll key. `false` if `event` is not one.
    fn scroll_body(&mut self, event: &TuiEvent) -> bool {
        let page = self.viewport_height.saturating_sub(1).max(1);
        self.scroll = match event {
            TuiEvent::ScrollUp => self.scroll.saturating_sub(1),
            TuiEvent::ScrollDown => self.scroll.saturating_add(1),
            TuiEvent::ScrollPageUp => self.scroll.saturating_sub(page),
            TuiEvent::ScrollPageDown => self.scroll.saturating_add(page),
            _ => return false,
        }
        .min(self.max_scroll);
        true
    }

    /// Marker for the bottom border while part of the body is hidden.
    fn more_marker(&self) -> Option<&'static str> {
        if self.scroll < self.max_scroll {
            Some(" ▼ more ")
        } else if self.scroll > 0 {
            Some(" ▲ more ")
        } else {
            None
        }
    }

    fn help_text(&self) -> &'static str {
        match self.kind {
            DialogKind::Text => " Enter Submit  Esc Cancel ",
            DialogKind::Confirm => " ←/→ Choose  Enter Submit  Esc No ",
            DialogKind::Info | DialogKind::Error => " Enter OK ",
        }
    }

    fn border_color(&self) -> Color {
        match self.kind {
            DialogKind::Error => Color::Red,
            DialogKind::Confirm => Color::Yellow,
            DialogKind::Text | DialogKind::Info => Color::Cyan,
        }
    }
}

impl EventHandler for DialogState {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogEvent> {
        if matches!(event, TuiEvent::ForceQuit) {
            return Some(match self.kind {
                DialogKind::Confirm => DialogEvent::Confirm(false),
                DialogKind::Text => DialogEvent::Cancelled,
                DialogKind::Info | DialogKind::Error => DialogEvent::Acknowledged,
            });
        }
        if self.scroll_body(event) {
            return None;
        }

        match self.kind {
            DialogKind::Text => match event {
                TuiEvent::Escape => Some(DialogEvent::Cancelled),
                _ => match self.input.handle_event(event)? {
                    InputEvent::Submit(text) => Some(DialogEvent::Text(text)),
                    InputEvent::ContentChanged => None,
                },
            },
            DialogKind::Confirm => match event {
                TuiEvent::InputChar('y' | 'Y') => Some(DialogEvent::Confirm(true)),
                TuiEvent::InputChar('n' | 'N') | TuiEvent::Escape => {
                    Some(DialogEvent::Confirm(false))
                }
                TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::Tab => {
                    self.yes_selected = !self.yes_selected;
                    None
                }
                TuiEvent::Submit => Some(DialogEvent::Confirm(self.yes_selected)),
                _ => None,
            },
            DialogKind::Info | DialogKind::Error => match event {
                TuiEvent::Submit | TuiEvent::Escape | TuiEvent::InputChar(' ') => {
                    Some(DialogEvent::Acknowledged)
                }
                _ => None,
            },
        }
    }
}

/// Transient render wrapper for a dialog overlay.
pub struct Dialog<'a> {
    state: &'a mut DialogState,
}

impl<'a> Dialog<'a> {
    pub fn new(state: &'a mut DialogState) -> Self {
        Self { state }
    }
}

impl Component for Dialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = ((u32::from(area.width) * 7 / 10) as u16).clamp(area.width.min(30), area.width);
        let inner_width = width.saturating_sub(4).max(1);

        let body = Paragraph::new(self.state.body.as_str()).wrap(Wrap { trim: false });
        let body_height = u16::try_from(body.line_count(inner_width)).unwrap_or(u16::MAX);
        let control_height = match self.state.kind {
            DialogKind::Text | DialogKind::Confirm => 2,
            DialogKind::Info | DialogKind::Error => 0,
        };
        // Borders plus body plus the control row
        let height = body_height
            .saturating_add(control_height + 2)
            .min(area.height);
        let overlay = centered_rect(width, height, area);

        let viewport_height = height.saturating_sub(control_height + 2);
        self.state.viewport_height = viewport_height;
        self.state.max_scroll = body_height.saturating_sub(viewport_height);
        self.state.scroll = self.state.scroll.min(self.state.max_scroll);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let border_style = Style::default().fg(self.state.border_color());
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.state.title))
            .title_style(border_style.add_modifier(Modifier::BOLD))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(self.state.help_text()).centered())
            .padding(Padding::horizontal(1));
        if let Some(marker) = self.state.more_marker() {
            block = block.title_bottom(Line::styled(marker, border_style).right_aligned());
        }
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [body_area, control_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(control_height),
        ])
        .areas(inner);
        frame.render_widget(body.scroll((self.state.scroll, 0)), body_area);

        match self.state.kind {
            DialogKind::Text => {
                let [_, row] =
                    Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                        .areas(control_area);
                let [marker, field] =
                    Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(row);
                frame.render_widget(Span::styled("> ", border_style), marker);
                self.state.input.render(frame, field);
            }
            DialogKind::Confirm => {
                let [_, row] =
                    Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                        .areas(control_area);
                let chosen = Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED);
                let plain = Style::default().fg(Color::Gray);
                let (yes, no) = if self.state.yes_selected {
                    (chosen, plain)
                } else {
                    (plain, chosen)
                };
                let buttons = Line::from(vec![
                    Span::styled(" [Y]es ", yes),
                    Span::raw("   "),
                    Span::styled(" [N]o ", no),
                ])
                .centered();
                frame.render_widget(buttons, row);
            }
            DialogKind::Info | DialogKind::Error => {}
        }
    }
}

/// A `width` x `height` rect centered in `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(state: &mut DialogState) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Dialog::new(state).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_text_dialog_submit_and_cancel() {
        let mut state = DialogState::new(DialogKind::Text, "Age", "Enter age:");
        state.handle_event(&TuiEvent::InputChar('4'));
        state.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Text("42".to_string()))
        );

        let mut state = DialogState::new(DialogKind::Text, "Age", "Enter age:");
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(DialogEvent::Cancelled)
        );
    }

    #[test]
    fn test_confirm_keys() {
        let mut state = DialogState::new(DialogKind::Confirm, "Confirm Delete", "Sure?");
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('Y')),
            Some(DialogEvent::Confirm(true))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(DialogEvent::Confirm(false))
        );
        assert_eq!(state.handle_event(&TuiEvent::CursorRight), None);
        assert!(!state.yes_selected);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Confirm(false))
        );
    }

    #[test]
    fn test_force_quit_cancels_every_kind() {
        let cases = [
            (DialogKind::Text, DialogEvent::Cancelled),
            (DialogKind::Confirm, DialogEvent::Confirm(false)),
            (DialogKind::Info, DialogEvent::Acknowledged),
            (DialogKind::Error, DialogEvent::Acknowledged),
        ];
        for (kind, expected) in cases {
            let mut state = DialogState::new(kind, "T", "B");
            assert_eq!(state.handle_event(&TuiEvent::ForceQuit), Some(expected));
        }
    }

    #[test]
    fn test_notice_ignores_typing() {
        let mut state = DialogState::new(DialogKind::Info, "User Added", "Done");
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Acknowledged)
        );
    }

    #[test]
    fn test_render_menu_dialog() {
        let mut state = DialogState::new(
            DialogKind::Text,
            "Main Menu",
            "[A] Add user\n[V] View users\n[S] Search users\n[D] Delete user\n[Q] Quit\n",
        );
        let text = screen_text(&mut state);
        assert!(text.contains("Main Menu"));
        assert!(text.contains("[D] Delete user"));
        assert!(text.contains("Enter Submit"));
    }

    #[test]
    fn test_render_confirm_dialog() {
        let mut state = DialogState::new(
            DialogKind::Confirm,
            "Confirm Delete",
            "Are you sure you want to delete Ann Lee?",
        );
        let text = screen_text(&mut state);
        assert!(text.contains("Confirm Delete"));
        assert!(text.contains("[Y]es"));
        assert!(text.contains("[N]o"));
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let backend = TestBackend::new(8, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = DialogState::new(DialogKind::Error, "ERROR", "YOU MUST SELECT FROM THE MENU");
        terminal
            .draw(|f| Dialog::new(&mut state).render(f, f.area()))
            .unwrap();
    }

    fn numbered_lines(count: usize) -> String {
        (1..=count).map(|i| format!("line {i:02}\n")).collect()
    }

    #[test]
    fn test_scroll_keys_do_nothing_when_body_fits() {
        let mut state = DialogState::new(DialogKind::Info, "No Users", "Short");
        screen_text(&mut state);
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);
        assert_eq!(state.handle_event(&TuiEvent::ScrollPageDown), None);
        assert_eq!(state.scroll, 0);
        assert_eq!(state.more_marker(), None);
    }

    #[test]
    fn test_long_body_scrolls_and_marks_hidden_text() {
        // 60x20 screen: 18 body rows for a notice
        let mut state = DialogState::new(DialogKind::Info, "Search Results", &numbered_lines(30));
        let text = screen_text(&mut state);
        assert!(text.contains("line 18"));
        assert!(!text.contains("line 19"));
        assert!(text.contains("▼ more"));

        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll, 1);
        state.handle_event(&TuiEvent::ScrollPageDown);
        state.handle_event(&TuiEvent::ScrollPageDown);
        assert_eq!(state.scroll, 12);

        let text = screen_text(&mut state);
        assert!(!text.contains("line 12"));
        assert!(text.contains("line 13"));
        assert!(text.contains("line 30"));
        assert!(text.contains("▲ more"));
        assert!(!text.contains("▼ more"));

        state.handle_event(&TuiEvent::ScrollPageUp);
        assert_eq!(state.scroll, 0);
        assert_eq!(state.handle_event(&TuiEvent::ScrollUp), None);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_scrolling_leaves_typed_answer_alone() {
        let mut state = DialogState::new(DialogKind::Text, "USER LIST - PAGE 1/3", &numbered_lines(25));
        screen_text(&mut state);
        state.handle_event(&TuiEvent::InputChar('n'));
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll, 1);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Text("n".to_string()))
        );
    }
}
