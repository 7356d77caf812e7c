//! Recommendations component — the track cards of the latest prediction.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use kokoro_proto::render::{Cover, Preview, TrackCard};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{card_accent, style_muted, style_secondary, C_PRIMARY, C_SELECTION_BG},
    widgets::pane_chrome::pane_chrome,
};

const CARD_HEIGHT: usize = 3;
const BAR_CELLS: u32 = 10;

pub struct Recommendations {
    selected: usize,
    offset: usize,
}

impl Recommendations {
    pub fn new() -> Self {
        Self {
            selected: 0,
            offset: 0,
        }
    }

    /// Back to the first card, for a freshly rendered panel.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    fn selected_card<'a>(&self, state: &'a AppState) -> Option<&'a TrackCard> {
        state.panel.cards().get(self.selected)
    }
}

/// `███████░░░ 72%`
pub fn popularity_bar(popularity: u32) -> String {
    let p = popularity.min(100);
    let filled = ((p * BAR_CELLS + 50) / 100) as usize;
    format!(
        "{}{} {}%",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS as usize - filled),
        p
    )
}

fn card_rows(card: &TrackCard, playing: bool) -> [Line<'static>; CARD_HEIGHT] {
    let accent = Style::default().fg(card_accent(card.accent));
    let cover = match &card.cover {
        Cover::Image(_) => '◼',
        Cover::Glyph(c) => *c,
    };
    let preview = match (&card.preview, playing) {
        (Preview::Audio(_), true) => Span::styled("■ playing", accent.add_modifier(Modifier::BOLD)),
        (Preview::Audio(_), false) => Span::styled("▶ preview", accent),
        (Preview::Unavailable, _) => Span::styled("no preview", style_muted()),
    };
    let mut actions = vec![Span::styled("▌ ", accent), Span::raw("  "), preview];
    if card.link.is_some() {
        actions.push(Span::raw("  "));
        actions.push(Span::styled("↗ link", accent));
    }

    [
        Line::from(vec![
            Span::styled("▌ ", accent),
            Span::styled(format!("{} ", cover), accent),
            Span::styled(
                card.name.clone(),
                Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("▌ ", accent),
            Span::raw("  "),
            Span::styled(card.artist.clone(), style_secondary()),
            Span::raw("  "),
            Span::styled(popularity_bar(card.popularity), accent),
        ]),
        Line::from(actions),
    ]
}

impl Component for Recommendations {
    fn id(&self) -> ComponentId {
        ComponentId::Recommendations
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        let count = state.panel.cards().len();
        if count == 0 {
            return vec![];
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(count - 1);
            }
            KeyCode::Char('p') | KeyCode::Enter => {
                return match self.selected_card(state).map(|c| &c.preview) {
                    Some(Preview::Audio(url)) => vec![Action::TogglePreview(url.clone())],
                    _ => vec![Action::Warn("No preview for this track".into())],
                };
            }
            KeyCode::Char('y') => {
                return match self.selected_card(state).and_then(|c| c.link.clone()) {
                    Some(link) => vec![Action::CopyToClipboard(link)],
                    None => vec![Action::Warn("No link for this track".into())],
                };
            }
            _ => {}
        }
        vec![]
    }

    fn handle_mouse(&mut self, event: MouseEvent, _area: Rect, state: &AppState) -> Vec<Action> {
        let count = state.panel.cards().len();
        match event.kind {
            MouseEventKind::ScrollUp => self.selected = self.selected.saturating_sub(1),
            MouseEventKind::ScrollDown if count > 0 => {
                self.selected = (self.selected + 1).min(count - 1);
            }
            _ => {}
        }
        vec![]
    }

    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let block = pane_chrome("music for you", focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let summary = match state.panel.summary() {
            Some(s) => s,
            None => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "  ♪ Share how you feel or pick a mood,",
                        style_secondary(),
                    )),
                    Line::from(Span::styled(
                        "    and music picked for you shows up here.",
                        style_muted(),
                    )),
                ];
                frame.render_widget(Paragraph::new(lines), inner);
                return;
            }
        };

        let cards = state.panel.cards();
        self.selected = self.selected.min(cards.len().saturating_sub(1));
        let per_page = ((inner.height as usize).saturating_sub(1) / CARD_HEIGHT).max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + per_page {
            self.offset = self.selected + 1 - per_page;
        }

        let mut lines = vec![Line::from(Span::styled(format!(" {}", summary), style_muted()))];
        for (i, card) in cards.iter().enumerate().skip(self.offset).take(per_page) {
            let playing = match &card.preview {
                Preview::Audio(url) => state.previewing.as_deref() == Some(url.as_str()),
                Preview::Unavailable => false,
            };
            let highlight = focused && i == self.selected;
            for row in card_rows(card, playing) {
                lines.push(if highlight {
                    row.style(Style::default().bg(C_SELECTION_BG))
                } else {
                    row
                });
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
