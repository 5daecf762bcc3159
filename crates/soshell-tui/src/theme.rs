//! Palette and semantic styling for the dashboard.
//!
//! Colors track the original web app's Tailwind choices: blue accents on a
//! gray-900 canvas, green/red trend pills.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const ACCENT_BLUE: Color = Color::Rgb(37, 99, 235); // #2563eb — blue-600
pub const LIGHT_BLUE: Color = Color::Rgb(96, 165, 250); // #60a5fa — blue-400
pub const SUCCESS_GREEN: Color = Color::Rgb(34, 197, 94); // #22c55e — green-500
pub const ERROR_RED: Color = Color::Rgb(239, 68, 68); // #ef4444 — red-500

// ── Extended Palette ──────────────────────────────────────────────────

pub const TEXT_WHITE: Color = Color::Rgb(243, 244, 246); // #f3f4f6 — gray-100
pub const DIM_GRAY: Color = Color::Rgb(156, 163, 175); // #9ca3af — gray-400
pub const BORDER_GRAY: Color = Color::Rgb(75, 85, 99); // #4b5563 — gray-600
pub const BG_HIGHLIGHT: Color = Color::Rgb(31, 41, 55); // #1f2937 — gray-800
pub const BG_DARK: Color = Color::Rgb(17, 24, 39); // #111827 — gray-900

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default()
        .fg(LIGHT_BLUE)
        .add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_BLUE)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Active nav entry.
pub fn nav_active() -> Style {
    Style::default()
        .fg(ACCENT_BLUE)
        .add_modifier(Modifier::BOLD)
}

/// Inactive nav entry.
pub fn nav_inactive() -> Style {
    Style::default().fg(DIM_GRAY)
}

/// Post author name.
pub fn author_style() -> Style {
    Style::default()
        .fg(TEXT_WHITE)
        .add_modifier(Modifier::BOLD)
}

/// Body text.
pub fn body_style() -> Style {
    Style::default().fg(TEXT_WHITE)
}

/// Secondary text (timestamps, counters, footers).
pub fn muted() -> Style {
    Style::default().fg(DIM_GRAY)
}

/// Upward trend pill.
pub fn trend_up() -> Style {
    Style::default()
        .fg(SUCCESS_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Downward trend pill.
pub fn trend_down() -> Style {
    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
}

/// Flat trend pill.
pub fn trend_flat() -> Style {
    Style::default().fg(DIM_GRAY).add_modifier(Modifier::BOLD)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default()
        .fg(LIGHT_BLUE)
        .add_modifier(Modifier::BOLD)
}
