//! Application state and core logic for the drift ratio checker.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive form, and `ReportState`, the value produced by each check.
//! A check never mutates the previous report; it builds a new `ReportState`
//! that replaces the old one wholesale.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cli::CliConfig;
use crate::errors::ParseError;
use crate::input::{apply_edit_key, TextInput};
use crate::models::{
    evaluate, exceedance_count, parse_inputs_with_policy, ColumnLengths, EvaluationResult,
    InputField, LengthPolicy, Mode, StatusLevel,
};
use crate::report::{export_report, format_report};
use crate::utils::{resolve_export_path, DEFAULT_EXPORT_FILE};

/// Outcome of the most recent check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    pub results: Vec<EvaluationResult>,
    pub report: String,
    pub export_enabled: bool,
    pub error: Option<ParseError>,
    // Set when uneven lists were paired up to the shortest one
    pub uneven_lengths: Option<ColumnLengths>,
}

impl ReportState {
    /// Parse, evaluate and format the three fields.
    ///
    /// On a parse error the returned state carries no results and export is
    /// disabled.
    pub fn check(levels: &str, seismic: &str, wind: &str, policy: LengthPolicy) -> Self {
        match parse_inputs_with_policy(levels, seismic, wind, policy) {
            Ok(parsed) => {
                let results = evaluate(&parsed.stories);
                let report = format_report(&results);
                tracing::info!(
                    levels = results.len(),
                    exceeding = exceedance_count(&results),
                    "drift ratios checked"
                );
                Self {
                    results,
                    report,
                    export_enabled: true,
                    error: None,
                    uneven_lengths: parsed.lengths.is_uneven().then_some(parsed.lengths),
                }
            }
            Err(err) => {
                tracing::info!(error = %err, "input rejected");
                Self {
                    error: Some(err),
                    ..Self::default()
                }
            }
        }
    }

    /// Note for the user when entries were dropped while pairing
    pub fn length_note(&self) -> Option<String> {
        self.uneven_lengths
            .map(|lengths| format!("{}: extra entries ignored", lengths))
    }
}

/// Message shown in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Application state
pub struct App {
    pub mode: Mode,
    pub focus: InputField,
    pub levels: TextInput,
    pub seismic: TextInput,
    pub wind: TextInput,
    // Destination path typed into the export prompt
    pub export_path: TextInput,
    // Path the user was warned about; a second confirm overwrites it
    pub overwrite_pending: Option<PathBuf>,
    pub length_policy: LengthPolicy,
    pub state: ReportState,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &CliConfig) -> Self {
        let prefill = |text: &Option<String>| TextInput::new(text.clone().unwrap_or_default());

        Self {
            mode: Mode::Form,
            focus: InputField::Levels,
            levels: prefill(&config.levels),
            seismic: prefill(&config.seismic),
            wind: prefill(&config.wind),
            export_path: TextInput::new(DEFAULT_EXPORT_FILE),
            overwrite_pending: None,
            length_policy: config.length_policy,
            state: ReportState::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn field(&self, field: InputField) -> &TextInput {
        match field {
            InputField::Levels => &self.levels,
            InputField::Seismic => &self.seismic,
            InputField::Wind => &self.wind,
        }
    }

    pub fn field_mut(&mut self, field: InputField) -> &mut TextInput {
        match field {
            InputField::Levels => &mut self.levels,
            InputField::Seismic => &mut self.seismic,
            InputField::Wind => &mut self.wind,
        }
    }

    fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(level, text));
    }

    /// Run a check over the current field contents and replace the state
    pub fn run_check(&mut self) {
        self.state = ReportState::check(
            self.levels.value(),
            self.seismic.value(),
            self.wind.value(),
            self.length_policy,
        );

        if self.state.error.is_some() {
            self.set_status(StatusLevel::Error, "Invalid input");
            return;
        }

        let total = self.state.results.len();
        let exceeding = exceedance_count(&self.state.results);
        let summary = if exceeding == 0 {
            format!("Checked {} level(s): all within limits", total)
        } else {
            format!("Checked {} level(s): {} exceed limits", total, exceeding)
        };

        match self.state.length_note() {
            Some(note) => self.set_status(StatusLevel::Warning, format!("{}. {}", note, summary)),
            None if exceeding == 0 => self.set_status(StatusLevel::Success, summary),
            None => self.set_status(StatusLevel::Warning, summary),
        }
    }

    /// Open the export prompt if a successful check has happened
    pub fn open_export(&mut self) {
        if !self.state.export_enabled {
            self.set_status(
                StatusLevel::Warning,
                "Export is available after a successful check",
            );
            return;
        }
        self.overwrite_pending = None;
        self.mode = Mode::Export;
    }

    pub fn cancel_export(&mut self) {
        self.overwrite_pending = None;
        self.mode = Mode::Form;
        self.set_status(StatusLevel::Info, "Export cancelled");
    }

    /// Write the current report to the path in the export prompt.
    ///
    /// An existing file is only replaced after a second confirm on the same
    /// path. Failures are reported in the status line and leave the report
    /// untouched.
    pub fn confirm_export(&mut self) {
        if !self.state.export_enabled {
            self.mode = Mode::Form;
            return;
        }

        let Some(path) = resolve_export_path(self.export_path.value()) else {
            self.set_status(StatusLevel::Warning, "Enter a file name to export to");
            return;
        };

        if path.exists() && self.overwrite_pending.as_ref() != Some(&path) {
            self.set_status(
                StatusLevel::Warning,
                format!("{} exists, press Enter again to overwrite", path.display()),
            );
            self.overwrite_pending = Some(path);
            return;
        }

        self.overwrite_pending = None;
        self.mode = Mode::Form;
        match export_report(&self.state.report, &path) {
            Ok(()) => {
                self.set_status(
                    StatusLevel::Success,
                    format!("Report saved to {}", path.display()),
                );
            }
            Err(err) => {
                self.set_status(StatusLevel::Error, format!("Export failed: {}", err));
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Form => self.handle_form_key(key),
            Mode::Export => self.handle_export_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => self.run_check(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.open_export()
            }
            code => {
                let focus = self.focus;
                apply_edit_key(self.field_mut(focus), code, key.modifiers);
            }
        }
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_export(),
            KeyCode::Enter => self.confirm_export(),
            code => {
                if apply_edit_key(&mut self.export_path, code, key.modifiers) {
                    // Editing the path invalidates an earlier overwrite warning
                    self.overwrite_pending = None;
                }
            }
        }
    }
}
