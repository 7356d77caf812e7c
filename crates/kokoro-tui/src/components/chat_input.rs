//! ChatInput component — the message box under the chat log.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    widgets::{
        pane_chrome::pane_chrome,
        text_input::{InputAction, TextInput},
    },
};

pub struct ChatInput {
    input: TextInput,
}

impl ChatInput {
    pub fn new() -> Self {
        Self {
            input: TextInput::new("›", "Tell me how you're feeling…"),
        }
    }
}

impl Component for ChatInput {
    fn id(&self) -> ComponentId {
        ComponentId::ChatInput
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match self.input.handle_key(key) {
            InputAction::Submitted(text) if !text.trim().is_empty() => {
                vec![Action::SendChat(text)]
            }
            InputAction::Cancelled => vec![Action::FocusPane(ComponentId::ChatLog)],
            _ => vec![],
        }
    }

    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, _state: &AppState) {
        let block = pane_chrome("message", focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.input.draw(frame, inner, focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn press(c: &mut ChatInput, state: &AppState, code: KeyCode) -> Vec<Action> {
        c.handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    #[test]
    fn test_enter_sends_text() {
        let state = AppState::new(Vec::new());
        let mut c = ChatInput::new();
        for ch in "hi".chars() {
            press(&mut c, &state, KeyCode::Char(ch));
        }
        assert_eq!(
            press(&mut c, &state, KeyCode::Enter),
            vec![Action::SendChat("hi".into())]
        );
        assert_eq!(c.input.text(), "");
    }

    #[test]
    fn test_blank_enter_sends_nothing() {
        let state = AppState::new(Vec::new());
        let mut c = ChatInput::new();
        press(&mut c, &state, KeyCode::Char(' '));
        assert!(press(&mut c, &state, KeyCode::Enter).is_empty());
    }
}
