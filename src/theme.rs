//! Theme module for drift-ratio-checker
//!
//! Centralized color palette and border set. Status colors follow the
//! report: green for levels within the limit, red for exceedances.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::models::{DriftStatus, StatusLevel};

// ============================================================================
// Background Colors
// ============================================================================

/// Panel background (#11161d)
pub const BG_PANEL: Color = Color::Rgb(17, 22, 29);

/// Alternate table row background (#1b222c)
pub const BG_ROW_ALT: Color = Color::Rgb(27, 34, 44);

// ============================================================================
// Borders and Accent
// ============================================================================

/// Border of unfocused panels (#2a3442)
pub const BORDER_SUBTLE: Color = Color::Rgb(42, 52, 66);

/// Accent for focused fields and headings (#347083)
pub const ACCENT: Color = Color::Rgb(52, 112, 131);

/// Border style used for every panel
pub const PANEL_BORDER: BorderType = BorderType::Rounded;

// ============================================================================
// Status Colors
// ============================================================================

/// Within the allowable limit (#4ade80)
pub const GREEN_OK: Color = Color::Rgb(74, 222, 128);

/// Warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Exceeds the limit, or an error (#f87171)
pub const RED_EXCEEDS: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Muted text for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

pub fn status_color(status: DriftStatus) -> Color {
    match status {
        DriftStatus::Ok => GREEN_OK,
        DriftStatus::Exceeds => RED_EXCEEDS,
    }
}

pub fn message_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => TEXT_PRIMARY,
        StatusLevel::Success => GREEN_OK,
        StatusLevel::Warning => AMBER_WARNING,
        StatusLevel::Error => RED_EXCEEDS,
    }
}
