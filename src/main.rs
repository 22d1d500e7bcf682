// sortviz: animated sorting algorithms in the terminal

use std::io;
use std::process::ExitCode;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{error, warn};

use sortviz::config::DEFAULT_CONFIG;
use sortviz::error::VisualizerError;
use sortviz::logging;
use sortviz::ui::App;

fn main() -> ExitCode {
    logging::init_from_env();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "visualizer failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), VisualizerError> {
    let config = DEFAULT_CONFIG;
    config.validate()?;

    install_panic_hook();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }
    let backend = CrosstermBackend::new(stdout);

    let res = Terminal::new(backend)
        .map_err(VisualizerError::from)
        .and_then(|mut terminal| {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let mut app = App::new(config, area, StdRng::from_entropy())?;
            let res = app.run(&mut terminal);
            let _ = terminal.show_cursor();
            res
        });

    // Restore terminal
    restore_terminal();

    res
}

/// Leave raw mode and the alternate screen, ignoring failures
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(%err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(%err, "failed to leave alternate screen");
    }
}

/// Restore the terminal before the default hook prints the panic message
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        error!(%info, "panic");
        default_hook(info);
    }));
}
