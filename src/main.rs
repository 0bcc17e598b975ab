mod app;
mod cli;
mod errors;
mod input;
mod logging;
mod models;
mod report;
mod theme;
mod ui;
mod utils;

use std::io::{self, stdout};
use std::process::ExitCode;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use app::App;
use cli::CliConfig;

fn main() -> ExitCode {
    let config = match cli::parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init_tracing(config.log_file.as_deref(), config.headless) {
        eprintln!("Warning: could not open log file: {}", e);
    }

    if config.headless {
        return ExitCode::from(cli::run_headless(&config));
    }

    match run_form(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Set up the terminal, run the form and always restore the terminal
fn run_form(config: &CliConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    if let Err(e) = stdout().execute(EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .and_then(|mut terminal| run(&mut terminal, App::new(config)));

    // Restore terminal
    let restored = disable_raw_mode().and(stdout().execute(LeaveAlternateScreen).map(|_| ()));

    result.and(restored)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> io::Result<()> {
    tracing::debug!("form started");

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Handle input
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    tracing::debug!("form closed");
    Ok(())
}
