//! Event handling module.
//!
//! This module turns terminal input into state changes on the form screen.

pub mod terminal;
