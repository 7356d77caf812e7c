pub mod chat_input;
pub mod chat_log;
pub mod emergency;
pub mod help_overlay;
pub mod journal_panel;
pub mod mood_picker;
pub mod recommendations;
