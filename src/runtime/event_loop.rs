use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::{App, Tab};
use crate::config;
use crate::error::Result;
use crate::ui;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main terminal event loop: renders the view, then waits for a key and applies it.
/// Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<()> {
    loop {
        let view = view::render(app, &settings.ui);
        terminal.draw(|f| ui::draw(f, &view))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    info!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

/// Apply one key press to `app`. Returns `true` when the app should quit.
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    // The overlay captures input: only transport, close and quit reach it.
    if app.full_player_open {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_play(),
            KeyCode::Esc | KeyCode::Char('f') => app.close_full_player(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('1') => app.switch_tab(Tab::Library),
        KeyCode::Char('2') => app.switch_tab(Tab::Queue),
        KeyCode::Char('3') => app.switch_tab(Tab::Playlists),
        KeyCode::Char('4') => app.switch_tab(Tab::Settings),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Enter => {
            if let Err(e) = app.activate() {
                warn!(error = %e, "activation failed");
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_play(),
        KeyCode::Char('f') => app.open_full_player(),
        KeyCode::Char('/') => app.toggle_search_bar(),
        KeyCode::Esc => {
            if app.search_visible {
                app.toggle_search_bar();
            }
        }
        _ => {}
    }

    false
}
