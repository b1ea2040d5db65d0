//! TUI runner - main loop and terminal integration.
//!
//! This module owns the terminal for the duration of the session. Between
//! frames it applies any insight settlements that arrived, so books flip
//! from "Analyzing..." to their insight without user input.

use crate::{App, AppMode, Event, EventHandler, TuiError, TuiErrorKind};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lumina_error::LuminaResult;
use lumina_interface::InsightDriver;
use lumina_library::Library;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Run the TUI over a library until the user quits.
///
/// The library should already be initialized so the shelf is populated
/// on the first frame. The terminal is restored before returning.
pub async fn run_tui<D: InsightDriver + 'static>(
    library: &mut Library<D>,
    tick_rate_ms: u64,
) -> LuminaResult<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;

    // Create app state
    let mut app = App::new();
    let events = EventHandler::new(tick_rate_ms);

    // Main loop
    while !app.should_quit {
        let settled = library.drain_settlements().await;
        if settled > 0 {
            app.status_message = format!(
                "{} insight{} ready",
                settled,
                if settled == 1 { "" } else { "s" }
            );
        }
        app.clamp_selection(library.shelf().len());

        terminal
            .draw(|f| crate::ui::draw(f, &app, library))
            .map_err(|e| {
                TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e)))
            })?;

        if let Ok(Some(event)) = events.next() {
            handle_event(&mut app, library, event).await;
        }
    }

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;

    Ok(())
}

/// Handle a single event.
async fn handle_event<D: InsightDriver + 'static>(
    app: &mut App,
    library: &mut Library<D>,
    event: Event,
) {
    use crossterm::event::{KeyCode, KeyModifiers};

    match event {
        Event::Key(key) => match app.mode {
            AppMode::Browse => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(library.shelf().len()),
                KeyCode::Char('a') => app.enter_insert(),
                KeyCode::Enter => app.enter_detail(library.shelf().len()),
                KeyCode::Char('d') => {
                    let selected = library
                        .shelf()
                        .books()
                        .get(app.selected_index)
                        .map(|book| *book.id());
                    if let Some(id) = selected {
                        if let Some(book) = library.delete_book(id).await {
                            app.status_message = format!("Removed {}", book.title());
                        }
                        app.clamp_selection(library.shelf().len());
                    }
                }
                _ => {}
            },
            AppMode::Insert => match key.code {
                // Ctrl+C must come before the bare Char arm or it gets typed
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
                KeyCode::Esc => app.return_to_browse(),
                KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
                KeyCode::Backspace => library.pop_draft(app.focus),
                // Blank input and in-flight submissions are refused without
                // a message; the form simply stays put
                KeyCode::Enter => {
                    if library.submit_draft().await.is_some() {
                        app.selected_index = 0;
                        app.return_to_browse();
                        app.status_message = String::from("Book added, generating insight");
                    }
                }
                KeyCode::Char(c) => library.push_draft(app.focus, c),
                _ => {}
            },
            AppMode::Detail => match key.code {
                KeyCode::Char('q') => app.quit(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
                KeyCode::Esc | KeyCode::Backspace => app.return_to_browse(),
                _ => {}
            },
        },
        Event::Tick => {}
    }
}
