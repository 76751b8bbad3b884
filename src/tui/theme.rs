//! Indigo & Amber color theme for the leadwizard TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Indigo: active step, focused borders, progress gauge.
pub const PRIMARY: Color = Color::Rgb(0x5C, 0x6B, 0xC0);
/// Light indigo: wizard title, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x9F, 0xA8, 0xDA);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Amber: selected options, calls to action.
pub const ACCENT: Color = Color::Rgb(0xFF, 0xC1, 0x07);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Near-black: base background.
pub const BG_BASE: Color = Color::Rgb(0x12, 0x13, 0x1C);
/// Surface: step sidebar, gauge track.
pub const BG_SURFACE: Color = Color::Rgb(0x1E, 0x20, 0x2E);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE8, 0xE8, 0xF0);
/// Placeholders, unvisited steps.
pub const TEXT_MUTED: Color = Color::Rgb(0x8A, 0x8C, 0x9E);
/// Hidden steps, key hints.
pub const TEXT_DIM: Color = Color::Rgb(0x52, 0x54, 0x66);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Validation errors, failed saves.
pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
/// Completed steps, saved drafts.
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
/// Unsaved changes, rejected submits.
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Step title.
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[^N]:next").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}
