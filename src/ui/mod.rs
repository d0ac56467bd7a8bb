//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout and overlays
//! - Theme management
//! - Widget components (input row, styling)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
pub mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
