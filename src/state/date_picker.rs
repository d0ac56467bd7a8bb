//! Date picker modal state.
//!
//! The modal never closes itself. Its visibility is the caller's
//! `FormState::date_picker_open` flag and the caller closes it after
//! applying either outcome.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Number of columns in the month grid (Monday first).
///
pub const DATE_COLUMNS: usize = 7;

/// Outcome reported by a date chooser.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DateChoice {
    Confirmed(NaiveDate),
    Cancelled,
}

/// Something that lets the user pick a calendar date.
///
pub trait DateChooser {
    /// Prepare the chooser with the date it should start on.
    fn open(&mut self, initial: NaiveDate);

    /// Report the date currently chosen.
    fn confirm(&self) -> DateChoice;

    /// Report that no date was chosen.
    fn cancel(&self) -> DateChoice;
}

/// Calendar cursor navigated with the keyboard.
///
#[derive(Debug, Clone, Default)]
pub struct DatePicker {
    cursor: NaiveDate,
}

impl DatePicker {
    /// Returns the highlighted date.
    ///
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Move the cursor by a number of days. Stays put at the calendar edges.
    ///
    pub fn move_days(&mut self, days: i64) -> &mut Self {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
        self
    }

    /// Move the cursor by a number of months, clamping the day to the end of
    /// the target month.
    ///
    pub fn move_months(&mut self, months: i32) -> &mut Self {
        let moved = if months >= 0 {
            self.cursor.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.cursor.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
        self
    }

    pub fn move_years(&mut self, years: i32) -> &mut Self {
        self.move_months(years.saturating_mul(12))
    }

    /// Return the weeks of the cursor's month, Monday first. Days outside the
    /// month are `None`.
    ///
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; DATE_COLUMNS]> {
        let mut weeks = vec![];
        let first = match self.cursor.with_day(1) {
            Some(first) => first,
            None => return weeks,
        };
        let mut week = [None; DATE_COLUMNS];
        let mut column = first.weekday().num_days_from_monday() as usize;
        let mut day = Some(first);
        while let Some(date) = day.filter(|d| d.month() == first.month()) {
            week[column] = Some(date);
            column += 1;
            if column == DATE_COLUMNS {
                weeks.push(week);
                week = [None; DATE_COLUMNS];
                column = 0;
            }
            day = date.succ_opt();
        }
        if column > 0 {
            weeks.push(week);
        }
        weeks
    }
}

impl DateChooser for DatePicker {
    fn open(&mut self, initial: NaiveDate) {
        self.cursor = initial;
    }

    fn confirm(&self) -> DateChoice {
        DateChoice::Confirmed(self.cursor)
    }

    fn cancel(&self) -> DateChoice {
        DateChoice::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn picker_at(initial: NaiveDate) -> DatePicker {
        let mut picker = DatePicker::default();
        picker.open(initial);
        picker
    }

    #[test]
    fn test_open_sets_cursor() {
        let picker = picker_at(date(2020, 1, 1));
        assert_eq!(picker.cursor(), date(2020, 1, 1));
    }

    #[test]
    fn test_confirm_reports_cursor() {
        let mut picker = picker_at(date(2020, 1, 1));
        picker.move_days(1);
        assert_eq!(picker.confirm(), DateChoice::Confirmed(date(2020, 1, 2)));
    }

    #[test]
    fn test_cancel_reports_nothing() {
        let picker = picker_at(date(2020, 1, 1));
        assert_eq!(picker.cancel(), DateChoice::Cancelled);
    }

    #[test]
    fn test_move_days_crosses_month() {
        let mut picker = picker_at(date(2020, 1, 31));
        picker.move_days(1);
        assert_eq!(picker.cursor(), date(2020, 2, 1));
        picker.move_days(-7);
        assert_eq!(picker.cursor(), date(2020, 1, 25));
    }

    #[test]
    fn test_move_months_clamps_day() {
        let mut picker = picker_at(date(2020, 1, 31));
        picker.move_months(1);
        assert_eq!(picker.cursor(), date(2020, 2, 29));

        let mut picker = picker_at(date(2021, 3, 31));
        picker.move_months(-1);
        assert_eq!(picker.cursor(), date(2021, 2, 28));
    }

    #[test]
    fn test_move_years_from_leap_day() {
        let mut picker = picker_at(date(2020, 2, 29));
        picker.move_years(1);
        assert_eq!(picker.cursor(), date(2021, 2, 28));
        picker.move_years(-2);
        assert_eq!(picker.cursor(), date(2019, 2, 28));
    }

    #[test]
    fn test_weeks_layout() {
        // June 2020 starts on a Monday and has 30 days.
        let picker = picker_at(date(2020, 6, 15));
        let weeks = picker.weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], Some(date(2020, 6, 1)));
        assert_eq!(weeks[4][1], Some(date(2020, 6, 30)));
        assert_eq!(weeks[4][2], None);
    }

    #[test]
    fn test_weeks_leading_blanks() {
        // January 2020 starts on a Wednesday.
        let picker = picker_at(date(2020, 1, 1));
        let weeks = picker.weeks();
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][1], None);
        assert_eq!(weeks[0][2], Some(date(2020, 1, 1)));
        let days: usize = weeks
            .iter()
            .map(|week| week.iter().filter(|d| d.is_some()).count())
            .sum();
        assert_eq!(days, 31);
    }
}
