//! Terminal setup and the main UI loop

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Write;

use super::app_component::AppComponent;
use super::core::{Component, EventHandler, EventType};
use crate::config::Config;
use crate::logger::Logger;

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config, logger);
    log::info!("App: started");

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    let cleanup = restore_terminal(terminal.backend_mut(), config.ui.mouse_enabled);
    res.and(cleanup)
}

/// Undo the terminal setup of [`run_app`].
///
/// Every step runs even when an earlier one fails; the first error is returned.
fn restore_terminal<W: Write>(out: &mut W, mouse_enabled: bool) -> Result<()> {
    let raw_mode = disable_raw_mode();
    let screen = if mouse_enabled {
        execute!(out, LeaveAlternateScreen, DisableMouseCapture)
    } else {
        execute!(out, LeaveAlternateScreen)
    };
    let cursor = execute!(out, Show);

    for (step, result) in [("raw mode", &raw_mode), ("alternate screen", &screen), ("cursor", &cursor)] {
        if let Err(e) = result {
            log::error!("App: failed to restore {}: {}", step, e);
        }
    }
    raw_mode.and(screen).and(cursor)?;
    Ok(())
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut AppComponent) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        app.drain_background_actions();

        if app.needs_render() && events.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            events.mark_rendered();
        }

        match events.next_event().await? {
            EventType::Key(key) => {
                let action = app.handle_key_events(key);
                app.update(action);
            }
            EventType::Resize(_, _) => app.request_render(),
            EventType::Tick | EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Writer whose first write fails
    #[derive(Default)]
    struct FlakyWriter {
        written: Vec<u8>,
        failed: bool,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::other("terminal gone"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_terminal_writes_every_step() {
        let mut out = Vec::new();
        assert!(restore_terminal(&mut out, true).is_ok());

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("?1000l"));
        assert!(written.ends_with("\x1b[?25h"));
    }

    #[test]
    fn test_restore_terminal_continues_after_a_failed_step() {
        let mut out = FlakyWriter::default();
        assert!(restore_terminal(&mut out, false).is_err());

        // The cursor is still shown even though leaving the alternate screen failed
        let written = String::from_utf8(out.written).unwrap();
        assert!(written.contains("\x1b[?25h"));
    }
}
