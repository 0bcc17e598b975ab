//! Export prompt, status line and key hint bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::StatusMessage;
use crate::input::TextInput;
use crate::models::Mode;
use crate::theme::{message_color, ACCENT, BG_PANEL, PANEL_BORDER, TEXT_PRIMARY};

/// Keybinding hints for the current mode
pub fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Form => " Enter: Check | Tab/↑↓: Next field | Ctrl+S: Export | Esc: Quit ",
        Mode::Export => " Enter: Save | Esc: Cancel | Ctrl+U: Clear path ",
    }
}

/// Render the destination path input shown while exporting
pub fn render_export_prompt(frame: &mut Frame, area: Rect, input: &TextInput) {
    let block = Block::default()
        .title(" Export Report To ")
        .borders(Borders::ALL)
        .border_type(PANEL_BORDER)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (visible, cursor_col) = input.visible_window(inner.width as usize);
    frame.render_widget(
        Paragraph::new(visible).style(Style::default().fg(TEXT_PRIMARY)),
        inner,
    );

    if inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor_col as u16, inner.y));
    }
}

/// Render the latest status message, if any
pub fn render_status_line(frame: &mut Frame, area: Rect, status: Option<&StatusMessage>) {
    let Some(status) = status else {
        return;
    };
    let line = Paragraph::new(format!(" {}", status.text))
        .style(Style::default().fg(message_color(status.level)));
    frame.render_widget(line, area);
}

/// Render the bottom bar with keybinding hints
pub fn render_key_hints(frame: &mut Frame, area: Rect, mode: Mode) {
    let hints = Paragraph::new(key_hints(mode)).style(Style::default().fg(Color::Black).bg(ACCENT));
    frame.render_widget(hints, area);
}
