//! Input form rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::{InputField, Mode};
use crate::theme::{ACCENT, BG_PANEL, BORDER_SUBTLE, PANEL_BORDER, TEXT_MUTED, TEXT_PRIMARY};

/// Column where field values start (widest label plus a space)
const LABEL_WIDTH: usize = 22;

/// Render the three labelled input fields and place the cursor in the
/// focused one
pub fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.mode == Mode::Form;
    let border_color = if active { ACCENT } else { BORDER_SUBTLE };

    let block = Block::default()
        .title(" Drift Ratio Checker ")
        .borders(Borders::ALL)
        .border_type(PANEL_BORDER)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_width = (inner.width as usize).saturating_sub(LABEL_WIDTH);
    let mut lines = Vec::with_capacity(InputField::ALL.len());

    for (row, field) in InputField::ALL.into_iter().enumerate() {
        let focused = active && app.focus == field;
        let (visible, cursor_col) = app.field(field).visible_window(value_width);

        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        let label = format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH);

        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(visible, Style::default().fg(TEXT_PRIMARY)),
        ]));

        if focused && value_width > 0 && (row as u16) < inner.height {
            frame.set_cursor_position((
                inner.x + (LABEL_WIDTH + cursor_col) as u16,
                inner.y + row as u16,
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
