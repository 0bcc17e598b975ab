//! Non-interactive mode: evaluate the CLI-supplied lists once and exit.

use std::io::{self, Write};

use crate::app::ReportState;
use crate::report::{export_report, results_to_json, INVALID_INPUT_MESSAGE};
use crate::utils::with_default_extension;

use super::prompts::prompt_overwrite;
use super::CliConfig;

/// Exit statuses
const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;

/// Run one check, print the outcome and optionally export it.
///
/// Returns the process exit status.
pub fn run_headless(config: &CliConfig) -> u8 {
    let state = ReportState::check(
        config.levels.as_deref().unwrap_or_default(),
        config.seismic.as_deref().unwrap_or_default(),
        config.wind.as_deref().unwrap_or_default(),
        config.length_policy,
    );

    if let Some(err) = &state.error {
        eprintln!("{}", INVALID_INPUT_MESSAGE);
        eprintln!("  {}", err);
        return EXIT_INVALID_INPUT;
    }
    if let Some(note) = state.length_note() {
        eprintln!("Warning: {}", note);
    }

    match write_output(&state, config.json, &mut io::stdout().lock()) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_FAILURE;
        }
    }

    if let Some(output) = &config.output {
        let path = with_default_extension(output);
        if path.exists() && !config.skip_prompts {
            match prompt_overwrite(&path) {
                Ok(true) => {}
                Ok(false) => {
                    eprintln!("Export skipped.");
                    return EXIT_SUCCESS;
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return EXIT_FAILURE;
                }
            }
        }
        if let Err(e) = export_report(&state.report, &path) {
            eprintln!("Error: {}", e);
            return EXIT_FAILURE;
        }
        eprintln!("Report saved to {}", path.display());
    }

    EXIT_SUCCESS
}

/// Write the report text, or the results as JSON, to `out`
fn write_output<W: Write>(state: &ReportState, json: bool, out: &mut W) -> io::Result<()> {
    if json {
        let json = results_to_json(&state.results).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
    } else {
        out.write_all(state.report.as_bytes())?;
    }
    out.flush()
}
