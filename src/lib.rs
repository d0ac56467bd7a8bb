//! Terminal sign-up form.
//!
//! A single screen that collects an email, a name, a date of birth and a
//! gender, validates them on submit and reports the outcome as a toast.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
pub mod utils;
pub mod validation;
