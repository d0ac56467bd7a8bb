//! Form validation and submission.
//!
//! Submitting runs an ordered list of rules against a snapshot of the form.
//! The first failing rule decides the error toast; when every rule passes a
//! success toast is shown instead. Exactly one toast is requested per submit
//! and the form itself is never modified.

use crate::state::{FormState, Notifier, Toast, ToastPosition};
use crate::utils::email::is_valid_email;
use log::*;

/// Message shown when every rule passes.
///
pub const SUCCESS_MESSAGE: &str = "Thank You";

/// User-input failures, one per rule. The display text is the message shown
/// to the user.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill the valid email")]
    Email,

    #[error("Please fill the valid name")]
    Name,

    #[error("Please fill the date of birth")]
    DateOfBirth,

    #[error("Please select the gender")]
    Gender,
}

/// A predicate over the form paired with the error it raises.
///
pub struct ValidationRule {
    pub passes: fn(&FormState) -> bool,
    pub error: ValidationError,
}

/// Rules in evaluation order.
///
pub const RULES: [ValidationRule; 4] = [
    ValidationRule {
        passes: has_valid_email,
        error: ValidationError::Email,
    },
    ValidationRule {
        passes: has_name,
        error: ValidationError::Name,
    },
    ValidationRule {
        passes: has_date_of_birth,
        error: ValidationError::DateOfBirth,
    },
    ValidationRule {
        passes: has_gender,
        error: ValidationError::Gender,
    },
];

fn has_valid_email(form: &FormState) -> bool {
    is_valid_email(&form.email)
}

fn has_name(form: &FormState) -> bool {
    !form.name.is_empty()
}

fn has_date_of_birth(form: &FormState) -> bool {
    form.date_of_birth.is_some()
}

fn has_gender(form: &FormState) -> bool {
    form.gender.is_some()
}

/// Return the error of the first failing rule. Later rules are not
/// evaluated.
///
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    match RULES.iter().find(|rule| !(rule.passes)(form)) {
        Some(rule) => Err(rule.error),
        None => Ok(()),
    }
}

/// Validate the form and request exactly one toast describing the outcome.
///
pub fn submit<N: Notifier + ?Sized>(
    form: &FormState,
    notifier: &mut N,
    position: ToastPosition,
) {
    let toast = match validate(form) {
        Ok(()) => {
            debug!("Form submission accepted");
            Toast::success(SUCCESS_MESSAGE, position)
        }
        Err(error) => {
            debug!("Form submission rejected: {:?}", error);
            Toast::error(error.to_string(), position)
        }
    };
    notifier.show(toast);
}
