//! Status bar — bottom line with input mode and the keys for the focused pane.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::action::ComponentId;
use crate::theme::{C_ACCENT, C_MODE_EMERGENCY, C_MODE_NORMAL, C_MODE_TYPING, C_MUTED};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    /// A text field has focus; printable keys go to it.
    Typing,
    Normal,
    Emergency,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Typing => "TYPING",
            Self::Normal => "NORMAL",
            Self::Emergency => "HELP IS AVAILABLE",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Typing => C_MODE_TYPING,
            Self::Normal => C_MODE_NORMAL,
            Self::Emergency => C_MODE_EMERGENCY,
        }
    }
}

fn keys_for(mode: InputMode, focused: Option<ComponentId>) -> &'static str {
    if mode == InputMode::Emergency {
        return " q/Esc quit";
    }
    match focused {
        Some(ComponentId::ChatInput) => " Enter send  Esc clear  Tab next pane  F1 help  Ctrl+C quit",
        Some(ComponentId::ChatLog) => " ↑↓/jk scroll  g/G top/bottom  Tab next pane  ? help  q quit",
        Some(ComponentId::MoodPicker) => " ←→/hl move  Space select  Enter get music  Tab next pane  ? help  q quit",
        Some(ComponentId::Recommendations) => " ↑↓/jk select  p preview  y copy link  Tab next pane  ? help  q quit",
        Some(ComponentId::Journal) => " Enter add entry  ↑↓ scroll  Ctrl+X clear  Tab next pane  F1 help  Ctrl+C quit",
        _ => " Tab next pane  ? help  q quit",
    }
}

/// Draw the keybindings footer bar (one row).
pub fn draw_keys_bar(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    focused: Option<ComponentId>,
    in_flight: usize,
) {
    let mut spans = vec![Span::styled(
        format!(" {} ", mode.label()),
        Style::default().fg(mode.color()).add_modifier(Modifier::BOLD),
    )];
    if in_flight > 0 {
        spans.push(Span::styled("●", Style::default().fg(C_ACCENT)));
    }
    spans.push(Span::styled(keys_for(mode, focused), Style::default().fg(C_MUTED)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
