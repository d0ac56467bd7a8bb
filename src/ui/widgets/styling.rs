use crate::state::Severity;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for a block, highlighted when it has focus.
///
pub fn block_border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.border_active.to_color())
    } else {
        Style::default().fg(theme.border_normal.to_color())
    }
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for highlighted list items.
///
pub fn highlighted_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for placeholder and hint text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the submit button.
///
pub fn button_style(theme: &Theme, focused: bool) -> Style {
    let style = Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.primary.to_color());
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

/// Return the background style for floating overlays.
///
pub fn surface_style(theme: &Theme) -> Style {
    Style::default().bg(theme.surface.to_color())
}

/// Return the accent style for a toast of the given severity.
///
pub fn severity_style(theme: &Theme, severity: Severity) -> Style {
    let color = match severity {
        Severity::Error => theme.error,
        Severity::Success => theme.success,
    };
    Style::default()
        .fg(color.to_color())
        .add_modifier(Modifier::BOLD)
}
