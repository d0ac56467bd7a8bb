//! Application state management module.
//!
//! This module contains the state of the form screen, including:
//! - Main `State` struct that owns everything the screen shows
//! - Form values (`FormState`) and focus order (`FormField`)
//! - The gender dropdown, date picker and toast notifier

mod date_picker;
mod form;
mod gender;
mod navigation;
mod toast;

pub use date_picker::{DateChoice, DateChooser, DatePicker, DATE_COLUMNS};
pub use form::{FormState, Gender, DATE_DISPLAY_FORMAT};
pub use gender::GenderSelector;
pub use navigation::FormField;
pub use toast::{
    Notifier, Severity, Toast, ToastNotifier, ToastPosition, DEFAULT_TOAST_DURATION_MS,
};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
