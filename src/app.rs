use crate::config::Config;
use crate::error::AppResult;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::State;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> AppResult<()> {
        let log_buffer = LogBuffer::new();
        CustomLogger::new(log_buffer.clone(), config.log_level_filter()?).init()?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            debug!("Using configuration file path '{}'", path.display());
        }
        let mut app = App {
            state: State::new(
                config.theme()?,
                config.toast_position,
                config.toast_duration(),
                log_buffer,
            ),
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut terminal = setup_terminal()?;
        let result = self.run(&mut terminal);
        let restored = restore_terminal(&mut terminal);
        result.and(restored)
    }

    fn run(&mut self, terminal: &mut AppTerminal) -> AppResult<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                return Ok(());
            }
        }
    }
}

fn setup_terminal() -> AppResult<AppTerminal> {
    enable_raw_mode()?;
    undo_on_error(enter_alternate_screen(), || {
        execute!(io::stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()
    })
}

fn enter_alternate_screen() -> AppResult<AppTerminal> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Run `undo` if the step failed. The step's error is returned; a failure
/// while undoing is only logged.
///
fn undo_on_error<T>(
    step: AppResult<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> AppResult<T> {
    if step.is_err() {
        if let Err(e) = undo() {
            error!("Failed to restore terminal: {}", e);
        }
    }
    step
}

fn restore_terminal(terminal: &mut AppTerminal) -> AppResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
