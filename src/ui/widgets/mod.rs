//! Reusable UI widget components.
//!
//! This module contains the input row widget and shared styling helpers.

pub mod input_row;
pub mod styling;
