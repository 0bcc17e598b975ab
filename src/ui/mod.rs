//! UI module for drift-ratio-checker
//!
//! Rendering functions for the input form, the report and table panels,
//! the export prompt and the bottom bars. Everything is drawn from `App`
//! on each frame; rendering never mutates state.

mod form;
mod results;
mod status;

use ratatui::prelude::*;

use crate::app::App;
use crate::models::Mode;

pub use form::render_form;
pub use results::render_results;
pub use status::{render_export_prompt, render_key_hints, render_status_line};

/// Draw the whole screen
pub fn draw(frame: &mut Frame, app: &App) {
    let exporting = app.mode == Mode::Export;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),                          // Input form
            Constraint::Min(5),                             // Report + table
            Constraint::Length(if exporting { 3 } else { 0 }), // Export prompt
            Constraint::Length(1),                          // Status message
            Constraint::Length(1),                          // Key hints
        ])
        .split(frame.area());

    render_form(frame, layout[0], app);
    render_results(frame, layout[1], &app.state);
    if exporting {
        render_export_prompt(frame, layout[2], &app.export_path);
    }
    render_status_line(frame, layout[3], app.status.as_ref());
    render_key_hints(frame, layout[4], app.mode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliConfig;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with(levels: &str, seismic: &str, wind: &str) -> App {
        App::new(&CliConfig {
            levels: Some(levels.to_string()),
            seismic: Some(seismic.to_string()),
            wind: Some(wind.to_string()),
            ..CliConfig::default()
        })
    }

    #[test]
    fn test_draw_empty_form() {
        let app = App::new(&CliConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Levels:"));
        assert!(screen.contains("Seismic Drift Ratios:"));
        assert!(screen.contains("Wind Drift Ratios:"));
        assert!(screen.contains("press Enter to check"));
        assert!(screen.contains("Ctrl+S: Export"));
    }

    #[test]
    fn test_draw_after_check_shows_report_and_table() {
        let mut app = app_with("1,2", "0.012,0.008", "0.015,0.025");
        app.run_check();
        let screen = render(&app);
        assert!(screen.contains("Level 1:"));
        assert!(screen.contains("Level 2:"));
        assert!(screen.contains("Levels (2)"));
        assert!(screen.contains("0.012"));
        assert!(screen.contains("0.025"));
        assert!(screen.contains("Checked 2 level(s): 2 exceed limits"));
    }

    #[test]
    fn test_draw_parse_error() {
        let mut app = app_with("1", "abc", "0.01");
        app.run_check();
        let screen = render(&app);
        assert!(screen.contains("Error: Invalid input."));
        assert!(screen.contains("Levels (0)"));
        assert!(!screen.contains("Level 1:"));
    }

    #[test]
    fn test_draw_export_prompt() {
        let mut app = app_with("1", "0.001", "0.001");
        app.run_check();
        app.open_export();
        let screen = render(&app);
        assert!(screen.contains("Export Report To"));
        assert!(screen.contains("drift_report.txt"));
        assert!(screen.contains("Esc: Cancel"));
    }
}
