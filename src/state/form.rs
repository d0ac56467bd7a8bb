//! Form field state types.
//!
//! This module contains the values entered on the form screen and the fixed
//! gender options offered by the dropdown.

use chrono::NaiveDate;

/// Display format for a chosen date of birth, e.g. `01 Jan 2020`.
///
pub const DATE_DISPLAY_FORMAT: &str = "%d %b %Y";

/// Specifying the gender options offered by the dropdown.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All options in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Return the label shown for this option.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Houses every value entered on the form screen.
///
/// Each field is changed only by its own control. Nothing is derived from
/// another field and submitting never clears anything.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub date_picker_open: bool,
}

impl FormState {
    /// Return the date of birth formatted for display, or an empty string if
    /// none has been chosen yet.
    ///
    pub fn date_of_birth_text(&self) -> String {
        self.date_of_birth
            .map(|date| date.format(DATE_DISPLAY_FORMAT).to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_state_starts_empty() {
        let form = FormState::default();
        assert!(form.email.is_empty());
        assert!(form.name.is_empty());
        assert_eq!(form.gender, None);
        assert_eq!(form.date_of_birth, None);
        assert!(!form.date_picker_open);
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::Male.label(), "Male");
        assert_eq!(Gender::Female.label(), "Female");
        assert_eq!(Gender::ALL, [Gender::Male, Gender::Female]);
    }

    #[test]
    fn test_date_of_birth_text() {
        let mut form = FormState::default();
        assert_eq!(form.date_of_birth_text(), "");

        form.date_of_birth = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert_eq!(form.date_of_birth_text(), "01 Jan 2020");
    }
}
