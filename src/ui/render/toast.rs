use super::Frame;
use crate::state::{Severity, Toast, ToastPosition};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

const TOAST_HEIGHT: u16 = 3;
const MAX_TOAST_WIDTH: u16 = 80;

/// Render a toast notification over the area at the toast's position.
///
/// A floating toast is sized to its message and kept off the screen edge;
/// otherwise it spans the full width and sits flush against the edge.
///
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
    let toast_area = toast_area(area, toast);
    if toast_area.width == 0 || toast_area.height == 0 {
        return;
    }

    let icon = match toast.severity {
        Severity::Error => "✗ ",
        Severity::Success => "✓ ",
    };
    let style = styling::severity_style(theme, toast.severity);
    let line = Line::from(vec![
        Span::styled(icon, style),
        Span::styled(toast.text.as_str(), styling::normal_text_style(theme)),
    ]);
    let block = Block::default().borders(Borders::ALL).border_style(style);
    let paragraph = Paragraph::new(line)
        .block(block)
        .style(styling::surface_style(theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, toast_area);
    frame.render_widget(paragraph, toast_area);
}

fn toast_area(area: Rect, toast: &Toast) -> Rect {
    let height = TOAST_HEIGHT.min(area.height);
    let (width, margin) = if toast.floating {
        let text_width = toast.text.width() as u16 + 6;
        (text_width.min(MAX_TOAST_WIDTH).min(area.width), 1)
    } else {
        (area.width, 0)
    };
    let free = area.height - height;
    let offset = match toast.position {
        ToastPosition::Top => margin.min(free),
        ToastPosition::Center => free / 2,
        ToastPosition::Bottom => free.saturating_sub(margin),
    };
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + offset,
        width,
        height,
    }
}
