//! MoodPicker component — four mood buttons and the "get music" submit.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use kokoro_proto::mood::Mood;

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{style_muted, style_secondary, C_ACCENT, C_BG, C_PRIMARY},
    widgets::pane_chrome::pane_chrome,
};

pub struct MoodPicker {
    cursor: usize,
    /// Button hit areas from the last draw.
    buttons: Vec<(Rect, Mood)>,
}

impl MoodPicker {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            buttons: Vec::new(),
        }
    }

    fn cursor_mood(&self) -> Mood {
        Mood::ALL[self.cursor.min(Mood::ALL.len() - 1)]
    }
}

fn button_text(mood: Mood) -> String {
    format!(" {} ", mood.display())
}

impl Component for MoodPicker {
    fn id(&self) -> ComponentId {
        ComponentId::MoodPicker
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = (self.cursor + 1).min(Mood::ALL.len() - 1);
            }
            KeyCode::Char(' ') => return vec![Action::SelectMood(self.cursor_mood())],
            KeyCode::Char(c @ '1'..='4') => {
                self.cursor = c as usize - '1' as usize;
                return vec![Action::SelectMood(self.cursor_mood())];
            }
            KeyCode::Enter => return vec![Action::SubmitMood],
            _ => {}
        }
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return vec![];
        }
        let hit = self.buttons.iter().find(|(r, _)| {
            event.column >= r.x
                && event.column < r.x + r.width
                && event.row >= r.y
                && event.row < r.y + r.height
        });
        match hit {
            Some(&(_, mood)) => vec![Action::SelectMood(mood)],
            None => vec![],
        }
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        if let Action::SelectMood(mood) = action {
            if let Some(pos) = Mood::ALL.iter().position(|m| m == mood) {
                self.cursor = pos;
            }
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let block = pane_chrome("how are you feeling?", focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        self.buttons.clear();
        let mut spans = Vec::new();
        let mut x = inner.x;
        for (i, mood) in Mood::ALL.iter().copied().enumerate() {
            let text = button_text(mood);
            let w = UnicodeWidthStr::width(text.as_str()) as u16;
            let mut style = if state.mood.is_selected(mood) {
                Style::default()
                    .fg(C_BG)
                    .bg(C_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(C_PRIMARY)
            };
            if focused && i == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            self.buttons.push((
                Rect {
                    x,
                    y: inner.y,
                    width: w,
                    height: 1,
                },
                mood,
            ));
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
            x = x.saturating_add(w + 1);
        }

        let display = state.mood_display.as_deref().unwrap_or("none");
        let lines = vec![
            Line::from(spans),
            Line::from(vec![
                Span::styled(" Mood: ", style_secondary()),
                Span::styled(display, Style::default().fg(C_PRIMARY)),
            ]),
            Line::from(Span::styled(
                " space select · enter get music",
                style_muted(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
