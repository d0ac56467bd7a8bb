use super::{centered_rect, Frame};
use crate::state::{State, DATE_COLUMNS};
use crate::ui::widgets::styling;
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const PICKER_WIDTH: u16 = 26;
const PICKER_HEIGHT: u16 = 14;
const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Render the calendar overlay centered in the area.
///
pub fn date_picker(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let picker = state.get_date_picker();
    let cursor = picker.cursor();
    let area = centered_rect(PICKER_WIDTH, PICKER_HEIGHT, size);

    let mut lines = vec![
        Line::from(Span::styled(
            cursor.format("%B %Y").to_string(),
            styling::active_block_title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            WEEKDAY_HEADER,
            styling::muted_text_style(theme),
        )),
    ];
    for week in picker.weeks() {
        let mut spans = Vec::with_capacity(DATE_COLUMNS * 2);
        for (column, day) in week.iter().enumerate() {
            if column > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(day_span(*day, cursor, state));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: ok  Esc: cancel",
        styling::muted_text_style(theme),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Date Of Birth")
        .border_style(styling::block_border_style(theme, true));
    let calendar = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(calendar, area);
}

fn day_span(day: Option<NaiveDate>, cursor: NaiveDate, state: &State) -> Span<'static> {
    let theme = state.get_theme();
    match day {
        Some(date) if date == cursor => Span::styled(
            format!("{:>2}", date.day()),
            styling::highlighted_item_style(theme),
        ),
        Some(date) => Span::styled(
            format!("{:>2}", date.day()),
            styling::normal_text_style(theme),
        ),
        None => Span::raw("  "),
    }
}
