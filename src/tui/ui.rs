use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::tui::component::Component;
use crate::tui::components::{Dialog, DialogState, TitleBar};

/// Title bar, dimmed backdrop, and the open dialog on top.
pub fn draw_ui(frame: &mut Frame, status_message: &str, dialog: &mut DialogState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    TitleBar::new(status_message).render(frame, title_area);

    let backdrop = Block::bordered()
        .border_style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
    frame.render_widget(backdrop, main_area);

    Dialog::new(dialog).render(frame, main_area);
}
