//! Action enum — all user-initiated intents.

use kokoro_proto::mood::Mood;

/// Unique identifier for a focusable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    ChatInput,
    ChatLog,
    MoodPicker,
    Recommendations,
    Journal,
    HelpOverlay,
    Emergency,
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ── Submissions ──────────────────────────────────────────────────────────
    SendChat(String),
    SelectMood(Mood),
    SubmitMood,

    // ── Journal ──────────────────────────────────────────────────────────────
    AddJournalEntry(String),
    ClearJournal,

    // ── Tracks ───────────────────────────────────────────────────────────────
    CopyToClipboard(String),
    TogglePreview(String),

    // ── Navigation ───────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusPane(ComponentId),

    // ── UI ───────────────────────────────────────────────────────────────────
    ToggleHelp,
    /// Show a warning toast.
    Warn(String),

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
}
