//! JournalPanel component — saved entries above, an entry box below.
//!
//! Clearing needs Ctrl+X twice within a few seconds.

use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{style_default, style_muted, C_ERROR, C_SECONDARY, C_TIMESTAMP},
    widgets::{
        pane_chrome::{pane_chrome, Badge},
        scroll::FollowScroll,
        text_input::{InputAction, TextInput},
        wrap::wrap_text,
    },
};

const CLEAR_CONFIRM_WINDOW: Duration = Duration::from_secs(3);

pub struct JournalPanel {
    input: TextInput,
    scroll: FollowScroll,
    clear_armed: Option<Instant>,
}

impl JournalPanel {
    pub fn new() -> Self {
        Self {
            input: TextInput::new("✎", "Write a journal entry…"),
            scroll: FollowScroll::new(),
            clear_armed: None,
        }
    }

    pub fn is_clear_armed(&self) -> bool {
        self.clear_armed.is_some()
    }
}

impl Component for JournalPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Journal
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.code == KeyCode::Char('x') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.clear_armed.take().is_some() {
                return vec![Action::ClearJournal];
            }
            self.clear_armed = Some(Instant::now());
            return vec![Action::Warn(
                "Press Ctrl+X again to delete all entries".into(),
            )];
        }
        self.clear_armed = None;

        match key.code {
            KeyCode::Up => self.scroll.up(1),
            KeyCode::Down => self.scroll.down(1),
            KeyCode::PageUp => self.scroll.up(10),
            KeyCode::PageDown => self.scroll.down(10),
            _ => {
                return match self.input.handle_key(key) {
                    InputAction::Submitted(text) => vec![Action::AddJournalEntry(text)],
                    InputAction::Cancelled => vec![Action::FocusPane(ComponentId::ChatInput)],
                    _ => vec![],
                };
            }
        }
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, _area: Rect, _state: &AppState) -> Vec<Action> {
        match event.kind {
            MouseEventKind::ScrollUp => self.scroll.up(3),
            MouseEventKind::ScrollDown => self.scroll.down(3),
            _ => {}
        }
        vec![]
    }

    fn tick(&mut self, _state: &AppState) -> Vec<Action> {
        if self
            .clear_armed
            .is_some_and(|at| at.elapsed() > CLEAR_CONFIRM_WINDOW)
        {
            self.clear_armed = None;
        }
        vec![]
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        if matches!(action, Action::AddJournalEntry(_) | Action::ClearJournal) {
            self.scroll.bottom();
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let count = format!("{} entries", state.journal.len());
        let badge = if self.is_clear_armed() {
            Badge {
                text: "clear all? ^X",
                color: C_ERROR,
            }
        } else {
            Badge {
                text: &count,
                color: C_SECONDARY,
            }
        };
        let block = pane_chrome("journal", focused, Some(badge));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        let (list_area, input_area) = (chunks[0], chunks[1]);

        if state.journal.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  No entries yet. Write something below.",
                    style_muted(),
                )),
                list_area,
            );
        } else {
            let width = (list_area.width as usize).saturating_sub(1);
            let mut rows: Vec<Line> = Vec::new();
            for entry in &state.journal {
                rows.push(Line::from(Span::styled(
                    format!(" {}", entry.timestamp),
                    Style::default().fg(C_TIMESTAMP).add_modifier(Modifier::BOLD),
                )));
                for row in wrap_text(&entry.text, width) {
                    rows.push(Line::from(Span::styled(format!(" {}", row), style_default())));
                }
                rows.push(Line::from(""));
            }
            let height = list_area.height as usize;
            let offset = self.scroll.resolve(rows.len(), height);
            let visible: Vec<Line> = rows.into_iter().skip(offset).take(height).collect();
            frame.render_widget(Paragraph::new(visible), list_area);
        }

        self.input.draw(frame, input_area, focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(p: &mut JournalPanel, key: KeyEvent) -> Vec<Action> {
        let state = AppState::new(Vec::new());
        p.handle_key(key, &state)
    }

    fn ctrl_x() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_clear_needs_two_presses() {
        let mut p = JournalPanel::new();
        assert!(matches!(press(&mut p, ctrl_x())[..], [Action::Warn(_)]));
        assert!(p.is_clear_armed());
        assert_eq!(press(&mut p, ctrl_x()), vec![Action::ClearJournal]);
        assert!(!p.is_clear_armed());
    }

    #[test]
    fn test_other_key_disarms_clear() {
        let mut p = JournalPanel::new();
        press(&mut p, ctrl_x());
        press(&mut p, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(!p.is_clear_armed());
        assert!(matches!(press(&mut p, ctrl_x())[..], [Action::Warn(_)]));
    }

    #[test]
    fn test_enter_adds_entry_even_when_blank() {
        let mut p = JournalPanel::new();
        assert_eq!(
            press(&mut p, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            vec![Action::AddJournalEntry(String::new())]
        );
        for c in "slept well".chars() {
            press(&mut p, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(
            press(&mut p, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            vec![Action::AddJournalEntry("slept well".into())]
        );
    }
}
