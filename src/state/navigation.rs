//! Navigation-related state types.
//!
//! This module contains the focus order of the controls on the form screen.

/// Specifying the focusable controls, in screen order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Email,
    Name,
    DateOfBirth,
    Gender,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Email,
        FormField::Name,
        FormField::DateOfBirth,
        FormField::Gender,
        FormField::Submit,
    ];

    fn index(&self) -> usize {
        match self {
            FormField::Email => 0,
            FormField::Name => 1,
            FormField::DateOfBirth => 2,
            FormField::Gender => 3,
            FormField::Submit => 4,
        }
    }

    /// Return the next control, wrapping after Submit.
    ///
    pub fn next(&self) -> FormField {
        FormField::ALL[(self.index() + 1) % FormField::ALL.len()]
    }

    /// Return the previous control, wrapping before Email.
    ///
    pub fn prev(&self) -> FormField {
        let len = FormField::ALL.len();
        FormField::ALL[(self.index() + len - 1) % len]
    }
}
