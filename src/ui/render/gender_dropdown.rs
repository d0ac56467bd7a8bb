use super::Frame;
use crate::state::{FormField, Gender, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Text shown on the gender row until an option is chosen.
///
pub const GENDER_PLACEHOLDER: &str = "Select Gender";

const DROPDOWN_ICON: &str = "▾";

/// Render the gender row showing the chosen option or the placeholder.
///
pub fn render_gender_field(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = state.current_focus() == FormField::Gender;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Gender")
        .border_style(styling::block_border_style(theme, focused));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    let text = match state.get_form().gender {
        Some(gender) => Span::styled(gender.label(), styling::normal_text_style(theme)),
        None => Span::styled(GENDER_PLACEHOLDER, styling::muted_text_style(theme)),
    };
    frame.render_widget(Paragraph::new(text), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(DROPDOWN_ICON, styling::muted_text_style(theme))),
        chunks[1],
    );
}

/// Render the open dropdown list just below the gender row.
///
pub fn render_gender_dropdown(frame: &mut Frame, anchor: Rect, state: &State) {
    let theme = state.get_theme();
    let screen = frame.size();
    let height = Gender::ALL.len() as u16 + 2;
    let below = Rect {
        x: anchor.x,
        y: anchor.bottom(),
        width: anchor.width,
        height,
    };
    // Open upwards when there is no room below the row.
    let placed = if below.bottom() <= screen.bottom() {
        below
    } else {
        Rect {
            y: anchor.y.saturating_sub(height),
            ..below
        }
    };
    let area = placed.intersection(screen);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let items: Vec<ListItem> = Gender::ALL
        .iter()
        .map(|gender| {
            ListItem::new(Line::from(Span::styled(
                gender.label(),
                styling::normal_text_style(theme),
            )))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Select Gender (j/k to navigate, Enter to select)")
        .border_style(styling::block_border_style(theme, true));

    let mut list_state = ListState::default();
    list_state.select(Some(state.get_gender_selector().highlighted()));

    let list = List::new(items)
        .block(block)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlighted_item_style(theme));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
