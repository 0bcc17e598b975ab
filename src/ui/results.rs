//! Report text and results table rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::app::ReportState;
use crate::models::EvaluationResult;
use crate::report::INVALID_INPUT_MESSAGE;
use crate::theme::{
    status_color, ACCENT, BG_PANEL, BG_ROW_ALT, BORDER_SUBTLE, GREEN_OK, PANEL_BORDER,
    RED_EXCEEDS, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::utils::format_ratio;

const PLACEHOLDER: &str = "Enter levels and drift ratios, then press Enter to check.";

fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(PANEL_BORDER)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_PANEL))
}

/// Render the report (left) and the ratio table (right)
pub fn render_results(frame: &mut Frame, area: Rect, state: &ReportState) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let report = Paragraph::new(report_lines(state))
        .block(panel(" Report ".to_string()))
        .wrap(Wrap { trim: false });
    frame.render_widget(report, panels[0]);

    render_table(frame, panels[1], &state.results);
}

/// Styled lines for the report panel.
///
/// A parse error replaces the whole report with the error message.
pub fn report_lines(state: &ReportState) -> Vec<Line<'static>> {
    if let Some(err) = &state.error {
        return vec![
            Line::styled(INVALID_INPUT_MESSAGE, Style::default().fg(RED_EXCEEDS)),
            Line::styled(err.to_string(), Style::default().fg(TEXT_MUTED)),
        ];
    }

    if state.report.is_empty() {
        return vec![Line::styled(PLACEHOLDER, Style::default().fg(TEXT_MUTED))];
    }

    state
        .report
        .lines()
        .map(|line| {
            let style = if line.starts_with("Level ") {
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
            } else if line.contains(" exceeds ") {
                Style::default().fg(RED_EXCEEDS)
            } else if line.contains(" within ") {
                Style::default().fg(GREEN_OK)
            } else {
                Style::default()
            };
            Line::styled(line.to_string(), style)
        })
        .collect()
}

/// Table of (level, seismic ratio, wind ratio) in input order
fn render_table(frame: &mut Frame, area: Rect, results: &[EvaluationResult]) {
    let header = Row::new(vec!["Level", "Seismic Drift Ratio", "Wind Drift Ratio"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let bg = if i % 2 == 1 { BG_ROW_ALT } else { BG_PANEL };
            Row::new(vec![
                Cell::from(result.id.to_string()).style(Style::default().fg(TEXT_PRIMARY)),
                Cell::from(format_ratio(result.seismic_ratio))
                    .style(Style::default().fg(status_color(result.seismic_status))),
                Cell::from(format_ratio(result.wind_ratio))
                    .style(Style::default().fg(status_color(result.wind_status))),
            ])
            .style(Style::default().bg(bg))
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Length(20),
        Constraint::Length(17),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(format!(" Levels ({}) ", results.len())));

    frame.render_widget(table, area);
}
