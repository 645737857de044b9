use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::error::Result;

mod event_loop;
mod logging;
mod settings;
mod terminal;


pub fn run() -> Result<()> {
    let settings = settings::load_settings();
    let _log_guard = match logging::init(&settings.log) {
        Ok(guard) => Some(guard),
        Err(e) => {
            // Logging is best-effort; the player works without it.
            eprintln!("encore: {e}");
            None
        }
    };

    let mut app = App::with_settings(&settings);
    info!(tab = ?app.active_tab, song = app.current.title, "starting");

    let guard = terminal::TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    guard.restore()?;

    run_result
}
