use crate::error::{AppError, AppResult};
use crate::state::State;
use crate::ui::widgets::input_row::InputAction;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration, time::Instant};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread. The
    /// thread stops when polling fails or the handler is dropped.
    ///
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        let event = self
            .rx
            .recv()
            .map_err(|_| AppError::Terminal("Terminal input thread stopped".to_string()))?;
        match event {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.tick(Instant::now());
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
/// Overlays take the keyboard while open: the date picker first, then the
/// gender dropdown, then the form itself.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.toggle_log();
        return true;
    }

    if state.get_form().date_picker_open {
        handle_date_picker_key(state, key);
    } else if state.get_gender_selector().is_open() {
        handle_gender_key(state, key);
    } else {
        return handle_form_key(state, key);
    }
    true
}

fn handle_date_picker_key(state: &mut State, key: KeyEvent) {
    let picker = state.get_date_picker_mut();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            picker.move_days(-1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            picker.move_days(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            picker.move_days(-7);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            picker.move_days(7);
        }
        KeyCode::PageUp => {
            picker.move_months(-1);
        }
        KeyCode::PageDown => {
            picker.move_months(1);
        }
        KeyCode::Char('<') => {
            picker.move_years(-1);
        }
        KeyCode::Char('>') => {
            picker.move_years(1);
        }
        KeyCode::Enter => {
            debug!("Processing date confirm event '{:?}'...", key);
            state.confirm_date();
        }
        KeyCode::Esc => {
            debug!("Processing date cancel event '{:?}'...", key);
            state.cancel_date();
        }
        _ => {}
    }
}

fn handle_gender_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.get_gender_selector_mut().prev();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.get_gender_selector_mut().next();
        }
        KeyCode::Enter => {
            state.select_gender();
        }
        KeyCode::Esc => {
            state.close_gender_selector();
        }
        _ => {}
    }
}

fn handle_form_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            if state.get_toast().is_some() {
                state.hide_toast();
            } else {
                debug!("Processing exit terminal event '{:?}'...", key);
                return false;
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_prev();
        }
        KeyCode::Enter => {
            state.activate();
        }
        KeyCode::Backspace => {
            state.input(InputAction::Backspace);
        }
        KeyCode::Char(c) if is_text_input(key.modifiers) => {
            state.input(InputAction::Insert(c));
        }
        _ => {}
    }
    true
}

/// Return true if a character typed with these modifiers is text. AltGr
/// arrives as Control+Alt on Windows.
///
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let mut modifiers = modifiers;
    modifiers.remove(KeyModifiers::SHIFT);
    modifiers.is_empty() || modifiers == KeyModifiers::CONTROL | KeyModifiers::ALT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormField, Gender};
    use chrono::NaiveDate;

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_exits() {
        let mut state = State::default();
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_esc_hides_toast_before_exiting() {
        let mut state = State::default();
        state.submit();
        assert!(press(&mut state, KeyCode::Esc));
        assert!(state.get_toast().is_none());
        assert!(!press(&mut state, KeyCode::Esc));
    }

    #[test]
    fn test_ctrl_l_toggles_log() {
        let mut state = State::default();
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
        );
        assert!(state.is_log_visible());
        assert!(state.get_form().email.is_empty());
    }

    #[test]
    fn test_tab_and_backtab_move_focus() {
        let mut state = State::default();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.current_focus(), FormField::Name);
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.current_focus(), FormField::Submit);
    }

    #[test]
    fn test_shifted_chars_are_typed() {
        let mut state = State::default();
        press(&mut state, KeyCode::Tab);
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT),
        );
        type_text(&mut state, "ane");
        assert_eq!(state.get_form().name, "Jane");
    }

    #[test]
    fn test_altgr_chars_are_typed() {
        let mut state = State::default();
        type_text(&mut state, "jane");
        handle_key(
            &mut state,
            KeyEvent::new(
                KeyCode::Char('@'),
                KeyModifiers::CONTROL | KeyModifiers::ALT,
            ),
        );
        assert_eq!(state.get_form().email, "jane@");
    }

    #[test]
    fn test_control_and_alt_chords_are_not_typed() {
        let mut state = State::default();
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
        );
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT));
        assert!(state.get_form().email.is_empty());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = State::default();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(handle_key(&mut state, key));
        assert!(state.get_form().email.is_empty());
    }

    #[test]
    fn test_date_picker_keys() {
        let mut state = State::default();
        state.open_date_picker_at(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::PageDown);
        press(&mut state, KeyCode::Char('<'));
        // Letters navigate instead of reaching the email field.
        press(&mut state, KeyCode::Char('l'));
        assert!(state.get_form().email.is_empty());
        press(&mut state, KeyCode::Enter);
        assert_eq!(
            state.get_form().date_of_birth,
            NaiveDate::from_ymd_opt(2019, 2, 10)
        );
        assert!(!state.get_form().date_picker_open);
    }

    #[test]
    fn test_date_picker_esc_cancels_without_exiting() {
        let mut state = State::default();
        state.open_date_picker_at(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert!(press(&mut state, KeyCode::Esc));
        assert!(!state.get_form().date_picker_open);
        assert_eq!(state.get_form().date_of_birth, None);
    }

    #[test]
    fn test_gender_dropdown_keys() {
        let mut state = State::default();
        state.set_focus(FormField::Gender);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.get_form().gender, Some(Gender::Female));

        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Up);
        assert!(press(&mut state, KeyCode::Esc));
        assert_eq!(state.get_form().gender, Some(Gender::Female));
    }

    #[test]
    fn test_keyboard_submission_flow() {
        let mut state = State::default();
        type_text(&mut state, "a@b.com");
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "Jane");
        press(&mut state, KeyCode::Enter);
        // Date of birth row: Enter opens the picker, Enter confirms today.
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.current_focus(), FormField::Submit);
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.get_toast().unwrap().text, "Thank You");
        assert_eq!(state.get_form().gender, Some(Gender::Male));
        assert!(state.get_form().date_of_birth.is_some());
    }
}
