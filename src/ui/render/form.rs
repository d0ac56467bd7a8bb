use super::gender_dropdown;
use super::Frame;
use crate::state::{FormField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Height of the title plus every control.
///
const FORM_HEIGHT: u16 = 19;

/// Render the form controls centered in the area. Returns the rect of the
/// gender row so the dropdown can be anchored below it.
///
pub fn form(frame: &mut Frame, size: Rect, state: &State) -> Rect {
    let width = (size.width as u32 * 9 / 10) as u16;
    let height = FORM_HEIGHT.min(size.height);
    let area = Rect {
        x: size.x + (size.width - width) / 2,
        y: size.y + (size.height - height) / 2,
        width,
        height,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Email
            Constraint::Length(3), // Name
            Constraint::Length(3), // Date of birth
            Constraint::Length(3), // Gender
            Constraint::Length(1), // Spacing
            Constraint::Length(3), // Submit
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Welcome",
        styling::banner_style(state.get_theme()),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(title, rows[0]);

    let text_fields = [FormField::Email, FormField::Name, FormField::DateOfBirth];
    for (field, row_area) in text_fields.iter().zip(&rows[1..4]) {
        if let Some(row) = state.input_row(*field) {
            frame.render_widget(row, *row_area);
        }
    }

    gender_dropdown::render_gender_field(frame, rows[4], state);
    render_submit_button(frame, rows[6], state);

    rows[4]
}

fn render_submit_button(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = state.current_focus() == FormField::Submit;
    let button = Paragraph::new("Submit")
        .alignment(Alignment::Center)
        .style(styling::button_style(theme, focused))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styling::block_border_style(theme, focused)),
        );
    frame.render_widget(button, size);
}
