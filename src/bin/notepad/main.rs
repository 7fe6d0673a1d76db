mod dialogs;
mod handlers;
mod ui;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use dialogs::TerminalDialogs;
use handlers::{KeyRoute, route_key};
use notepad::constants::{APP_NAME, POLL_INTERVAL, VERSION};
use notepad::editor::Notepad;
use notepad::logging;
use notepad::menu::MenuBar;
use notepad::theme::Theme;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    error::Error,
    io::{self, Stdout, stdout},
};
use ui::ui;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_global(&logging::default_log_path());
    tracing::info!("{} {} starting", APP_NAME, VERSION);

    enable_raw_mode()?;
    let mut terminal = undo_on_failure(setup_terminal(), || {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    })?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("terminal failure: {}", e);
    }
    result
}

/// Run `restore` before handing back a failed setup step.
fn undo_on_failure<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if let Err(e) = &result {
        tracing::error!("terminal setup failed: {}", e);
        restore();
    }
    result
}

/// Raw mode is already on; the caller undoes it if this fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<(), Box<dyn Error>> {
    let theme = Theme::default();
    let mut notepad = Notepad::new().with_system_clipboard();
    let mut menu = MenuBar::new();
    let mut shown_title = String::new();

    while notepad.is_running() {
        let title = notepad.title();
        if title != shown_title {
            execute!(terminal.backend_mut(), SetTitle(&title))?;
            shown_title = title;
        }

        let backdrop = terminal
            .draw(|f| ui(f, &mut notepad, &menu, &theme))?
            .buffer
            .clone();

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let mut dialogs = TerminalDialogs::new(&mut *terminal, backdrop, &theme);
        match route_key(&mut menu, &key) {
            KeyRoute::Handled => {}
            KeyRoute::Run(command) => notepad.execute(command, &mut dialogs),
            KeyRoute::Editor => notepad.handle_key(key, &mut dialogs),
        }
    }

    tracing::info!("exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = undo_on_failure(
            Err(io::Error::other("no tty")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = undo_on_failure(Ok(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
