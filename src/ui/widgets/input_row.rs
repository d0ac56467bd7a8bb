//! Labeled single-line text box.
//!
//! The row holds no state of its own. The caller passes the current value in
//! and stores whatever value `handle` hands back. A disabled row ignores
//! typing, and a pressable row reports Enter as a press so the caller can
//! react (the date of birth row opens the date picker this way).

use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// Caret drawn after the value of a focused, editable row.
///
const CARET: &str = "▏";

/// Input delivered to a row.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputAction {
    Insert(char),
    Backspace,
    Press,
}

/// Result of delivering an input to a row.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum InputOutcome {
    Changed(String),
    Pressed,
    Ignored,
}

/// A labeled text box with an optional trailing icon.
///
pub struct InputRow<'a> {
    label: &'a str,
    value: Cow<'a, str>,
    trailing_icon: Option<&'a str>,
    pressable: bool,
    disabled: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> InputRow<'a> {
    pub fn new(label: &'a str, value: impl Into<Cow<'a, str>>, theme: &'a Theme) -> Self {
        InputRow {
            label,
            value: value.into(),
            trailing_icon: None,
            pressable: false,
            disabled: false,
            focused: false,
            theme,
        }
    }

    pub fn trailing_icon(mut self, icon: &'a str) -> Self {
        self.trailing_icon = Some(icon);
        self
    }

    /// Report Enter as a press instead of ignoring it.
    ///
    pub fn pressable(mut self, pressable: bool) -> Self {
        self.pressable = pressable;
        self
    }

    /// Suppress text entry.
    ///
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Apply an input to the current value. Returns the new value for the
    /// caller to store, a press, or nothing.
    ///
    pub fn handle(&self, action: InputAction) -> InputOutcome {
        match action {
            InputAction::Press if self.pressable => InputOutcome::Pressed,
            InputAction::Press => InputOutcome::Ignored,
            _ if self.disabled => InputOutcome::Ignored,
            InputAction::Insert(c) => {
                let mut value = self.value.to_string();
                value.push(c);
                InputOutcome::Changed(value)
            }
            InputAction::Backspace => {
                if self.value.is_empty() {
                    return InputOutcome::Ignored;
                }
                let mut value = self.value.to_string();
                value.pop();
                InputOutcome::Changed(value)
            }
        }
    }

    fn value_line(&self) -> Line<'a> {
        if self.value.is_empty() && !(self.focused && !self.disabled) {
            return Line::from(Span::styled(
                self.label,
                styling::muted_text_style(self.theme),
            ));
        }
        let mut spans = vec![Span::styled(
            self.value.clone(),
            styling::normal_text_style(self.theme),
        )];
        if self.focused && !self.disabled {
            spans.push(Span::styled(CARET, styling::normal_text_style(self.theme)));
        }
        Line::from(spans)
    }
}

impl Widget for InputRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.focused {
            Span::styled(self.label, styling::active_block_title_style())
        } else {
            Span::raw(self.label)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(styling::block_border_style(self.theme, self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let icon_width = self
            .trailing_icon
            .map(|icon| icon.width() as u16 + 1)
            .unwrap_or(0);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(icon_width)])
            .split(inner);

        Paragraph::new(self.value_line()).render(chunks[0], buf);
        if let Some(icon) = self.trailing_icon {
            Paragraph::new(Span::styled(icon, styling::muted_text_style(self.theme)))
                .alignment(Alignment::Right)
                .render(chunks[1], buf);
        }
    }
}
