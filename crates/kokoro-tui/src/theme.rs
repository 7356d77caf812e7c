//! Color palette and style constants for the kokoro TUI.

use kokoro_proto::render::{Sender, PALETTE_SIZE};
use ratatui::style::{Color, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_BG: Color = Color::Rgb(18, 16, 22);
pub const C_ACCENT: Color = Color::Rgb(255, 121, 176);
pub const C_ERROR: Color = Color::Rgb(255, 80, 80);
pub const C_MUTED: Color = Color::Rgb(78, 72, 92);
pub const C_SECONDARY: Color = Color::Rgb(126, 118, 146);
pub const C_PRIMARY: Color = Color::Rgb(214, 210, 228);
pub const C_SELECTION_BG: Color = Color::Rgb(34, 28, 44);
pub const C_PANEL_BORDER: Color = Color::Rgb(44, 40, 56);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(186, 120, 220);
pub const C_INPUT_BG: Color = Color::Rgb(24, 20, 32);
pub const C_INPUT_FG: Color = Color::Rgb(255, 214, 120);
pub const C_TIMESTAMP: Color = Color::Rgb(96, 90, 116);
pub const C_USER: Color = Color::Rgb(120, 180, 255);
pub const C_BOT: Color = Color::Rgb(255, 121, 176);
pub const C_SYSTEM: Color = Color::Rgb(140, 140, 160);
pub const C_TOAST_INFO: Color = Color::Rgb(80, 160, 220);
pub const C_TOAST_SUCCESS: Color = Color::Rgb(80, 200, 120);
pub const C_TOAST_WARNING: Color = Color::Rgb(255, 184, 80);
pub const C_TOAST_ERROR: Color = Color::Rgb(255, 95, 95);
pub const C_MODE_NORMAL: Color = Color::Rgb(126, 118, 146);
pub const C_MODE_TYPING: Color = Color::Rgb(255, 214, 120);
pub const C_MODE_EMERGENCY: Color = Color::Rgb(255, 80, 80);

/// Card accents: lime, orange, cyan, pink.
pub const CARD_PALETTE: [Color; PALETTE_SIZE] = [
    Color::Rgb(170, 230, 90),
    Color::Rgb(255, 160, 70),
    Color::Rgb(80, 210, 230),
    Color::Rgb(255, 121, 176),
];

pub fn sender_color(sender: Sender) -> Color {
    match sender {
        Sender::User => C_USER,
        Sender::Bot => C_BOT,
        Sender::System => C_SYSTEM,
        Sender::Error => C_ERROR,
    }
}

pub fn card_accent(index: usize) -> Color {
    CARD_PALETTE[index % PALETTE_SIZE]
}

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_default() -> Style {
    Style::default().fg(C_PRIMARY)
}

pub fn style_secondary() -> Style {
    Style::default().fg(C_SECONDARY)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}
