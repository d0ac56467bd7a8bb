//! Toast notifications.
//!
//! This module defines the `Notifier` capability used by the submit flow and
//! the `ToastNotifier` that backs it on screen. At most one toast is visible;
//! a new request replaces the current one and restarts its timer.

use serde::Deserialize;
use std::time::{Duration, Instant};

/// Default time a toast stays on screen.
///
pub const DEFAULT_TOAST_DURATION_MS: u64 = 1850;

/// Specifying how a toast is styled.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Severity {
    Error,
    Success,
}

/// Specifying where on screen a toast appears.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPosition {
    Top,
    Center,
    #[default]
    Bottom,
}

/// A transient on-screen message.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Toast {
    pub text: String,
    pub severity: Severity,
    pub position: ToastPosition,
    pub floating: bool,
}

impl Toast {
    pub fn error(text: impl Into<String>, position: ToastPosition) -> Self {
        Toast {
            text: text.into(),
            severity: Severity::Error,
            position,
            floating: true,
        }
    }

    pub fn success(text: impl Into<String>, position: ToastPosition) -> Self {
        Toast {
            text: text.into(),
            severity: Severity::Success,
            position,
            floating: true,
        }
    }
}

/// Something that can display and dismiss toasts.
///
pub trait Notifier {
    /// Display the toast, superseding any toast already shown.
    fn show(&mut self, toast: Toast);

    /// Dismiss the visible toast, if any.
    fn hide(&mut self);
}

/// Single-slot notifier with a timed auto-hide.
///
#[derive(Debug)]
pub struct ToastNotifier {
    active: Option<(Toast, Instant)>,
    duration: Duration,
}

impl Default for ToastNotifier {
    fn default() -> Self {
        ToastNotifier::new(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }
}

impl ToastNotifier {
    pub fn new(duration: Duration) -> Self {
        ToastNotifier {
            active: None,
            duration,
        }
    }

    /// Returns the toast currently on screen.
    ///
    pub fn current(&self) -> Option<&Toast> {
        self.active.as_ref().map(|(toast, _)| toast)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show a toast as if it were requested at the given instant.
    ///
    pub fn show_at(&mut self, toast: Toast, now: Instant) {
        self.active = Some((toast, now));
    }

    /// Hide the visible toast once its duration has elapsed. Returns true if
    /// a toast was hidden.
    ///
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = match &self.active {
            Some((_, shown_at)) => now.saturating_duration_since(*shown_at) >= self.duration,
            None => false,
        };
        if expired {
            self.active = None;
        }
        expired
    }
}

impl Notifier for ToastNotifier {
    fn show(&mut self, toast: Toast) {
        self.show_at(toast, Instant::now());
    }

    fn hide(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> ToastNotifier {
        ToastNotifier::new(Duration::from_millis(1000))
    }

    #[test]
    fn test_show_sets_current() {
        let mut notifier = notifier();
        assert!(notifier.current().is_none());
        notifier.show(Toast::error("Bad", ToastPosition::Bottom));
        let toast = notifier.current().unwrap();
        assert_eq!(toast.text, "Bad");
        assert_eq!(toast.severity, Severity::Error);
        assert!(toast.floating);
    }

    #[test]
    fn test_second_show_replaces_first() {
        let mut notifier = notifier();
        notifier.show(Toast::error("First", ToastPosition::Bottom));
        notifier.show(Toast::success("Second", ToastPosition::Top));
        let toast = notifier.current().unwrap();
        assert_eq!(toast.text, "Second");
        assert_eq!(toast.severity, Severity::Success);
        assert_eq!(toast.position, ToastPosition::Top);

        // Nothing was queued behind the replacement.
        notifier.hide();
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_replacement_restarts_timer() {
        let mut notifier = notifier();
        let start = Instant::now();
        notifier.show_at(Toast::error("First", ToastPosition::Bottom), start);
        notifier.show_at(
            Toast::error("Second", ToastPosition::Bottom),
            start + Duration::from_millis(800),
        );
        assert!(!notifier.tick(start + Duration::from_millis(1200)));
        assert_eq!(notifier.current().unwrap().text, "Second");
        assert!(notifier.tick(start + Duration::from_millis(1800)));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_tick_hides_after_duration() {
        let mut notifier = notifier();
        let start = Instant::now();
        notifier.show_at(Toast::success("Thank You", ToastPosition::Bottom), start);
        assert!(!notifier.tick(start + Duration::from_millis(999)));
        assert!(notifier.current().is_some());
        assert!(notifier.tick(start + Duration::from_millis(1000)));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_tick_without_toast() {
        let mut notifier = notifier();
        assert!(!notifier.tick(Instant::now()));
    }

    #[test]
    fn test_manual_hide() {
        let mut notifier = notifier();
        notifier.show(Toast::error("Bad", ToastPosition::Center));
        notifier.hide();
        assert!(notifier.current().is_none());
        notifier.hide();
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_default_duration() {
        let notifier = ToastNotifier::default();
        assert_eq!(
            notifier.duration(),
            Duration::from_millis(DEFAULT_TOAST_DURATION_MS)
        );
    }

    #[test]
    fn test_toast_position_default_is_bottom() {
        assert_eq!(ToastPosition::default(), ToastPosition::Bottom);
    }
}
