//! TextInput — single-line editor on top of tui-input, used by the chat box
//! and the journal.

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{C_INPUT_BG, C_INPUT_FG, C_MUTED, C_SECONDARY};

#[derive(Debug, PartialEq)]
pub enum InputAction {
    /// Enter pressed; carries the text and leaves the input empty.
    Submitted(String),
    Changed,
    /// Esc on an already empty input.
    Cancelled,
    None,
}

pub struct TextInput {
    input: Input,
    prompt: &'static str,
    placeholder: String,
}

impl TextInput {
    pub fn new(prompt: &'static str, placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            prompt,
            placeholder: placeholder.into(),
        }
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    pub fn clear(&mut self) {
        self.input = Input::default();
    }

    /// Esc clears the text first, and only cancels once the input is empty.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Esc => {
                if self.input.value().is_empty() {
                    InputAction::Cancelled
                } else {
                    self.clear();
                    InputAction::Changed
                }
            }
            KeyCode::Enter => {
                let text = self.input.value().to_string();
                self.clear();
                InputAction::Submitted(text)
            }
            _ => match self.input.handle_event(&Event::Key(key)) {
                Some(_) => InputAction::Changed,
                None => InputAction::None,
            },
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let prompt_w = self.prompt.width() + 1;
        let width = (area.width as usize).saturating_sub(prompt_w + 1);
        let scroll = self.input.visual_scroll(width);
        let value = self.input.value();

        let body = if value.is_empty() {
            Span::styled(self.placeholder.as_str(), Style::default().fg(C_MUTED))
        } else {
            Span::styled(
                skip_columns(value, scroll).to_string(),
                Style::default().fg(C_INPUT_FG),
            )
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", self.prompt), Style::default().fg(C_SECONDARY)),
            body,
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(C_INPUT_BG)),
            area,
        );

        if focused && area.width > 0 {
            let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
            let x = area.x + prompt_w as u16 + cursor;
            frame.set_cursor_position((x.min(area.x + area.width - 1), area.y));
        }
    }
}

/// `s` with its first `cols` display columns cut off.
fn skip_columns(s: &str, cols: usize) -> &str {
    let mut seen = 0;
    for (i, ch) in s.char_indices() {
        if seen >= cols {
            return &s[i..];
        }
        seen += ch.width().unwrap_or(0);
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_submits_and_clears() {
        let mut input = TextInput::new("›", "type…");
        type_str(&mut input, "hi there");
        assert_eq!(input.text(), "hi there");
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            InputAction::Submitted("hi there".into())
        );
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_esc_clears_then_cancels() {
        let mut input = TextInput::new("›", "type…");
        type_str(&mut input, "abc");
        assert_eq!(input.handle_key(key(KeyCode::Esc)), InputAction::Changed);
        assert_eq!(input.text(), "");
        assert_eq!(input.handle_key(key(KeyCode::Esc)), InputAction::Cancelled);
    }

    #[test]
    fn test_backspace_edits() {
        let mut input = TextInput::new("›", "type…");
        type_str(&mut input, "abc");
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), InputAction::Changed);
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_skip_columns_counts_wide_chars_by_width() {
        assert_eq!(skip_columns("😊ab", 0), "😊ab");
        assert_eq!(skip_columns("😊ab", 2), "ab");
        assert_eq!(skip_columns("a😊b", 3), "b");
        assert_eq!(skip_columns("abc", 5), "");
    }
}
