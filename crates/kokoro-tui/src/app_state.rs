//! AppState — shared read-only data passed to all components during render/event.
//!
//! Components read this but never mutate it.
//! The App event loop is the only thing that writes to AppState.

use chrono::{DateTime, Local};

use kokoro_proto::journal::JournalEntry;
use kokoro_proto::mood::MoodSelector;
use kokoro_proto::render::{RecommendationPanel, Sender};

use crate::widgets::status_bar::InputMode;

/// Appended to a line while its reveal is in progress.
pub const REVEAL_CURSOR: char = '▌';

/// One line in the chat log. Never persisted.
#[derive(Debug, Clone)]
pub struct ChatLine {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub at: DateTime<Local>,
    /// Characters revealed so far; `None` once the whole line is visible.
    pub revealed: Option<usize>,
}

impl ChatLine {
    pub fn new(id: u64, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            text: text.into(),
            at: Local::now(),
            revealed: None,
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Text as currently shown, with the reveal cursor while revealing.
    pub fn visible_text(&self) -> String {
        match self.revealed {
            None => self.text.clone(),
            Some(n) => {
                let mut shown: String = self.text.chars().take(n).collect();
                shown.push(REVEAL_CURSOR);
                shown
            }
        }
    }

    /// Advance the reveal to `shown` characters. Returns true when complete.
    pub fn reveal_to(&mut self, shown: usize) -> bool {
        if shown >= self.char_count() {
            self.revealed = None;
            true
        } else {
            self.revealed = Some(shown);
            false
        }
    }
}

/// What the emergency screen shows.
#[derive(Debug, Clone)]
pub struct EmergencyView {
    pub target: String,
    /// Readable text of the target, if it could be loaded.
    pub body: Option<String>,
}

pub struct AppState {
    // ── Chat ────────────────────────────────────────────────────────────────
    pub chat: Vec<ChatLine>,
    /// Submissions still waiting on the services.
    pub in_flight: usize,

    // ── Recommendations ─────────────────────────────────────────────────────
    pub panel: RecommendationPanel,
    /// Preview URL currently playing through mpv.
    pub previewing: Option<String>,

    // ── Mood ────────────────────────────────────────────────────────────────
    pub mood: MoodSelector,
    /// Display field written on selection, e.g. "😊 Happy".
    pub mood_display: Option<String>,

    // ── Journal ─────────────────────────────────────────────────────────────
    pub journal: Vec<JournalEntry>,

    // ── UI mode ─────────────────────────────────────────────────────────────
    pub input_mode: InputMode,
    pub emergency: Option<EmergencyView>,
}

impl AppState {
    pub fn new(journal: Vec<JournalEntry>) -> Self {
        Self {
            chat: Vec::new(),
            in_flight: 0,
            panel: RecommendationPanel::default(),
            previewing: None,
            mood: MoodSelector::new(),
            mood_display: None,
            journal,
            input_mode: InputMode::Typing,
            emergency: None,
        }
    }

    pub fn line_mut(&mut self, id: u64) -> Option<&mut ChatLine> {
        self.chat.iter_mut().rev().find(|l| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_shows_cursor_while_revealing() {
        let mut line = ChatLine::new(1, Sender::Bot, "héllo");
        line.revealed = Some(0);
        assert_eq!(line.visible_text(), "▌");
        assert!(!line.reveal_to(2));
        assert_eq!(line.visible_text(), "hé▌");
        assert!(line.reveal_to(5));
        assert_eq!(line.visible_text(), "héllo");
        assert!(line.revealed.is_none());
    }

    #[test]
    fn test_fresh_state_starts_with_placeholder() {
        let state = AppState::new(Vec::new());
        assert!(state.panel.is_placeholder());
        assert!(state.mood.selected().is_none());
        assert!(state.emergency.is_none());
    }

    #[test]
    fn test_line_mut_finds_by_id() {
        let mut state = AppState::new(Vec::new());
        state.chat.push(ChatLine::new(7, Sender::User, "a"));
        state.chat.push(ChatLine::new(8, Sender::Bot, "b"));
        assert_eq!(state.line_mut(8).map(|l| l.text.clone()), Some("b".into()));
        assert!(state.line_mut(9).is_none());
    }
}
