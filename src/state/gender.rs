//! Gender dropdown state.

use super::form::Gender;

/// Dropdown over the fixed gender options. Has no selection of its own: a
/// choice is handed back to the caller, which stores it in the form.
///
#[derive(Debug, Default, Clone)]
pub struct GenderSelector {
    open: bool,
    highlighted: usize,
}

impl GenderSelector {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the index of the highlighted option.
    ///
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open the dropdown with the highlight on the current choice, or on the
    /// first option if nothing has been chosen.
    ///
    pub fn open(&mut self, current: Option<Gender>) -> &mut Self {
        self.open = true;
        self.highlighted = current
            .and_then(|gender| Gender::ALL.iter().position(|g| *g == gender))
            .unwrap_or(0);
        self
    }

    /// Close the dropdown without choosing.
    ///
    pub fn close(&mut self) -> &mut Self {
        self.open = false;
        self
    }

    pub fn next(&mut self) -> &mut Self {
        self.highlighted = (self.highlighted + 1) % Gender::ALL.len();
        self
    }

    pub fn prev(&mut self) -> &mut Self {
        let len = Gender::ALL.len();
        self.highlighted = (self.highlighted + len - 1) % len;
        self
    }

    /// Close the dropdown and return the highlighted option. Returns None if
    /// the dropdown was not open.
    ///
    pub fn select(&mut self) -> Option<Gender> {
        if !self.open {
            return None;
        }
        self.open = false;
        Gender::ALL.get(self.highlighted).copied()
    }
}
