use super::Frame;
use crate::state::{FormField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label and key hints for whatever currently owns the keyboard.
///
fn footer_hints(state: &State) -> (&'static str, &'static str) {
    if state.get_form().date_picker_open {
        (
            "DATE:",
            " ←→: day, ↑↓: week, PgUp/PgDn: month, </>: year, Enter: confirm, Esc: cancel",
        )
    } else if state.get_gender_selector().is_open() {
        ("GENDER:", " ↑↓: navigate, Enter: select, Esc: cancel")
    } else {
        match state.current_focus() {
            FormField::Email | FormField::Name => (
                "EDIT:",
                " Type to edit, Tab/↑↓: navigate, Enter: next, Ctrl+L: log, Esc: quit",
            ),
            FormField::DateOfBirth => (
                "FORM:",
                " Enter: pick date, Tab/↑↓: navigate, Ctrl+L: log, Esc: quit",
            ),
            FormField::Gender => (
                "FORM:",
                " Enter: choose gender, Tab/↑↓: navigate, Ctrl+L: log, Esc: quit",
            ),
            FormField::Submit => (
                "FORM:",
                " Enter: submit, Tab/↑↓: navigate, Ctrl+L: log, Esc: quit",
            ),
        }
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (mode, hints) = footer_hints(state);
    let controls = Line::from(vec![
        Span::styled(mode, styling::highlighted_item_style(theme)),
        Span::styled(hints, styling::muted_text_style(theme)),
    ]);

    let version = Line::from(Span::styled(
        concat!("v", env!("CARGO_PKG_VERSION"), " "),
        styling::muted_text_style(theme),
    ));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(8)])
        .split(size);
    frame.render_widget(Paragraph::new(controls).alignment(Alignment::Left), chunks[0]);
    frame.render_widget(Paragraph::new(version).alignment(Alignment::Right), chunks[1]);
}
