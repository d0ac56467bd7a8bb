mod date_picker;
mod footer;
mod form;
mod gender_dropdown;
mod log;
mod toast;

use super::Frame;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the log panel when it is visible.
///
const LOG_PANEL_HEIGHT: u16 = 8;

/// Render the whole screen according to state. Overlays are drawn last so
/// they sit on top of the form.
///
pub fn render(frame: &mut Frame, state: &State) {
    let size = frame.size();

    let log_height = if state.is_log_visible() {
        LOG_PANEL_HEIGHT.min(size.height / 2)
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),             // Form
            Constraint::Length(log_height), // Log
            Constraint::Length(1),          // Footer
        ])
        .split(size);

    let gender_area = form::form(frame, chunks[0], state);
    if state.is_log_visible() {
        log::log(frame, chunks[1], state);
    }
    footer::footer(frame, chunks[2], state);

    if state.get_gender_selector().is_open() {
        gender_dropdown::render_gender_dropdown(frame, gender_area, state);
    }
    if state.get_form().date_picker_open {
        date_picker::date_picker(frame, chunks[0], state);
    }
    if let Some(toast) = state.get_toast() {
        toast::render_toast(frame, chunks[0], toast, state.get_theme());
    }
}

/// Return a rect of at most the given size centered inside the area.
///
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormField;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 30);
        assert_eq!(centered_rect(20, 10, area), Rect::new(30, 10, 20, 10));
        assert_eq!(centered_rect(100, 40, area), area);
    }

    #[test]
    fn test_render_form_screen() {
        let state = State::default();
        let text = draw(&state);
        assert!(text.contains("Welcome"));
        assert!(text.contains("Email"));
        assert!(text.contains("Name"));
        assert!(text.contains("Date Of Birth"));
        assert!(text.contains("Select Gender"));
        assert!(text.contains("Submit"));
    }

    #[test]
    fn test_render_toast_after_submit() {
        let mut state = State::default();
        state.submit();
        let text = draw(&state);
        assert!(text.contains("Please fill the valid email"));
    }

    #[test]
    fn test_render_date_picker() {
        let mut state = State::default();
        state.open_date_picker_at(chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let text = draw(&state);
        assert!(text.contains("January 2020"));
        assert!(text.contains("Mo Tu We Th Fr Sa Su"));
    }

    #[test]
    fn test_render_gender_dropdown() {
        let mut state = State::default();
        state.set_focus(FormField::Gender).activate();
        let text = draw(&state);
        assert!(text.contains("Male"));
        assert!(text.contains("Female"));
    }

    #[test]
    fn test_render_log_panel() {
        let mut state = State::default();
        state.toggle_log();
        let text = draw(&state);
        assert!(text.contains("Log"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let mut state = State::default();
        state.submit();
        state.open_date_picker_at(chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();
    }
}
