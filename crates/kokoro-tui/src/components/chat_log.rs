//! ChatLog component — the conversation, newest at the bottom.
//!
//! Sticks to the newest line unless the user has scrolled up.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::{AppState, ChatLine},
    component::Component,
    theme::{sender_color, style_default, style_muted, C_ACCENT, C_TIMESTAMP},
    widgets::{
        pane_chrome::{pane_chrome, Badge},
        scroll::FollowScroll,
        wrap::wrap_text,
    },
};

pub struct ChatLog {
    scroll: FollowScroll,
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            scroll: FollowScroll::new(),
        }
    }

    pub fn jump_to_newest(&mut self) {
        self.scroll.bottom();
    }
}

/// Visual rows for one line: a header with time and sender, the wrapped
/// text indented by two columns, then a spacer.
fn line_rows(line: &ChatLine, width: usize) -> Vec<Line<'static>> {
    let color = sender_color(line.sender);
    let mut rows = vec![Line::from(vec![
        Span::styled(
            line.at.format("%H:%M:%S ").to_string(),
            Style::default().fg(C_TIMESTAMP),
        ),
        Span::styled(
            format!("{} {}", line.sender.icon(), line.sender.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])];
    let text_style = match line.sender {
        kokoro_proto::render::Sender::Error => Style::default().fg(color),
        _ => style_default(),
    };
    for row in wrap_text(&line.visible_text(), width.saturating_sub(2)) {
        rows.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(row, text_style),
        ]));
    }
    rows.push(Line::from(""));
    rows
}

impl Component for ChatLog {
    fn id(&self) -> ComponentId {
        ComponentId::ChatLog
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(1),
            KeyCode::PageUp => self.scroll.up(10),
            KeyCode::PageDown => self.scroll.down(10),
            KeyCode::Home | KeyCode::Char('g') => self.scroll.top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll.bottom(),
            KeyCode::Enter | KeyCode::Char('i') => {
                return vec![Action::FocusPane(ComponentId::ChatInput)];
            }
            _ => {}
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

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        // Sending a message always brings the reply into view.
        if matches!(action, Action::SendChat(_) | Action::SubmitMood) {
            self.jump_to_newest();
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let badge = (state.in_flight > 0).then(|| Badge {
            text: "thinking…",
            color: C_ACCENT,
        });
        let block = pane_chrome("kokoro", focused, badge);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.chat.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  Say hello, or pick a mood to get started.",
                    style_muted(),
                )),
                inner,
            );
            return;
        }

        let width = inner.width as usize;
        let rows: Vec<Line> = state
            .chat
            .iter()
            .flat_map(|l| line_rows(l, width))
            .collect();
        let height = inner.height as usize;
        let offset = self.scroll.resolve(rows.len(), height);
        let visible: Vec<Line> = rows.into_iter().skip(offset).take(height).collect();
        frame.render_widget(Paragraph::new(visible), inner);
    }
}
