use crate::logger::LogBuffer;
use crate::ui::widgets::input_row::{InputAction, InputOutcome, InputRow};
use crate::ui::Theme;
use crate::validation;
use chrono::NaiveDate;
use log::*;
use std::time::{Duration, Instant};

use super::date_picker::{DateChoice, DateChooser, DatePicker};
use super::form::FormState;
use super::gender::GenderSelector;
use super::navigation::FormField;
use super::toast::{Notifier, Toast, ToastNotifier, ToastPosition};

/// Trailing icon of the date of birth row.
///
pub const CALENDAR_ICON: &str = "▦";

/// Houses data representative of the form screen.
///
pub struct State {
    form: FormState,
    focus: FormField,
    date_picker: DatePicker,
    gender_selector: GenderSelector,
    notifier: ToastNotifier,
    toast_position: ToastPosition,
    log_buffer: LogBuffer,
    log_visible: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            form: FormState::default(),
            focus: FormField::Email,
            date_picker: DatePicker::default(),
            gender_selector: GenderSelector::default(),
            notifier: ToastNotifier::default(),
            toast_position: ToastPosition::default(),
            log_buffer: LogBuffer::new(),
            log_visible: false,
            theme: Theme::default(),
        }
    }
}

impl State {
    pub fn new(
        theme: Theme,
        toast_position: ToastPosition,
        toast_duration: Duration,
        log_buffer: LogBuffer,
    ) -> Self {
        State {
            notifier: ToastNotifier::new(toast_duration),
            toast_position,
            log_buffer,
            theme,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the entered form values.
    ///
    pub fn get_form(&self) -> &FormState {
        &self.form
    }

    /// Returns the focused control.
    ///
    pub fn current_focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) -> &mut Self {
        self.focus = field;
        self
    }

    pub fn focus_next(&mut self) -> &mut Self {
        self.focus = self.focus.next();
        self
    }

    pub fn focus_prev(&mut self) -> &mut Self {
        self.focus = self.focus.prev();
        self
    }

    /// Return true if the date picker or the gender dropdown is covering
    /// the form.
    ///
    pub fn has_overlay(&self) -> bool {
        self.form.date_picker_open || self.gender_selector.is_open()
    }

    /// Build the input row for a text field. Returns None for controls that
    /// are not input rows.
    ///
    pub fn input_row(&self, field: FormField) -> Option<InputRow<'_>> {
        let row = match field {
            FormField::Email => InputRow::new("Email", self.form.email.as_str(), &self.theme),
            FormField::Name => InputRow::new("Name", self.form.name.as_str(), &self.theme),
            FormField::DateOfBirth => {
                InputRow::new("Date Of Birth", self.form.date_of_birth_text(), &self.theme)
                    .trailing_icon(CALENDAR_ICON)
                    .disabled(true)
                    .pressable(true)
            }
            FormField::Gender | FormField::Submit => return None,
        };
        Some(row.focused(self.focus == field))
    }

    /// Deliver an input to the focused row and apply the outcome: a changed
    /// value is stored in its field, a press runs the row's press handler.
    ///
    pub fn input(&mut self, action: InputAction) -> InputOutcome {
        let field = self.focus;
        let outcome = match self.input_row(field) {
            Some(row) => row.handle(action),
            None => InputOutcome::Ignored,
        };
        match &outcome {
            InputOutcome::Changed(value) => match field {
                FormField::Email => self.form.email = value.clone(),
                FormField::Name => self.form.name = value.clone(),
                _ => {}
            },
            InputOutcome::Pressed => {
                if field == FormField::DateOfBirth {
                    self.open_date_picker();
                }
            }
            InputOutcome::Ignored => {}
        }
        outcome
    }

    /// Act on Enter for the focused control.
    ///
    pub fn activate(&mut self) -> &mut Self {
        match self.focus {
            FormField::Gender => {
                self.open_gender_selector();
            }
            FormField::Submit => {
                self.submit();
            }
            FormField::Email | FormField::Name | FormField::DateOfBirth => {
                if self.input(InputAction::Press) == InputOutcome::Ignored {
                    self.focus_next();
                }
            }
        }
        self
    }

    pub fn get_date_picker(&self) -> &DatePicker {
        &self.date_picker
    }

    pub fn get_date_picker_mut(&mut self) -> &mut DatePicker {
        &mut self.date_picker
    }

    /// Show the date picker starting on today's date.
    ///
    pub fn open_date_picker(&mut self) -> &mut Self {
        let today = chrono::Local::now().date_naive();
        self.open_date_picker_at(today)
    }

    /// Show the date picker starting on the given date.
    ///
    pub fn open_date_picker_at(&mut self, initial: NaiveDate) -> &mut Self {
        debug!("Opening date picker at {}", initial);
        self.date_picker.open(initial);
        self.form.date_picker_open = true;
        self
    }

    /// Apply the outcome reported by the date picker and close it. A
    /// cancellation leaves the date of birth as it was.
    ///
    pub fn apply_date_choice(&mut self, choice: DateChoice) -> &mut Self {
        if !self.form.date_picker_open {
            return self;
        }
        if let DateChoice::Confirmed(date) = choice {
            self.form.date_of_birth = Some(date);
        }
        self.form.date_picker_open = false;
        self
    }

    pub fn confirm_date(&mut self) -> &mut Self {
        let choice = self.date_picker.confirm();
        self.apply_date_choice(choice)
    }

    pub fn cancel_date(&mut self) -> &mut Self {
        let choice = self.date_picker.cancel();
        self.apply_date_choice(choice)
    }

    pub fn get_gender_selector(&self) -> &GenderSelector {
        &self.gender_selector
    }

    pub fn get_gender_selector_mut(&mut self) -> &mut GenderSelector {
        &mut self.gender_selector
    }

    pub fn open_gender_selector(&mut self) -> &mut Self {
        self.gender_selector.open(self.form.gender);
        self
    }

    /// Store the highlighted gender and close the dropdown.
    ///
    pub fn select_gender(&mut self) -> &mut Self {
        if let Some(gender) = self.gender_selector.select() {
            self.form.gender = Some(gender);
        }
        self
    }

    pub fn close_gender_selector(&mut self) -> &mut Self {
        self.gender_selector.close();
        self
    }

    /// Validate the current form and show the resulting toast.
    ///
    pub fn submit(&mut self) -> &mut Self {
        validation::submit(&self.form, &mut self.notifier, self.toast_position);
        self
    }

    /// Returns the toast currently on screen.
    ///
    pub fn get_toast(&self) -> Option<&Toast> {
        self.notifier.current()
    }

    pub fn hide_toast(&mut self) -> &mut Self {
        self.notifier.hide();
        self
    }

    /// Advance timers. Returns true if something changed on screen.
    ///
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifier.tick(now)
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    /// Return the most recent log entries, oldest first.
    ///
    pub fn get_log_entries(&self, count: usize) -> Vec<String> {
        self.log_buffer.recent(count)
    }
}
