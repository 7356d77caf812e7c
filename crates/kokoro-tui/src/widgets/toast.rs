//! Toast notifications — transient status messages in the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::theme::{C_TOAST_ERROR, C_TOAST_INFO, C_TOAST_SUCCESS, C_TOAST_WARNING};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    fn style(self) -> (ratatui::style::Color, &'static str) {
        match self {
            Self::Info => (C_TOAST_INFO, "·"),
            Self::Success => (C_TOAST_SUCCESS, "✓"),
            Self::Warning => (C_TOAST_WARNING, "!"),
            Self::Error => (C_TOAST_ERROR, "✗"),
        }
    }
}

struct Toast {
    message: String,
    severity: Severity,
    expires: Instant,
}

const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub struct ToastManager {
    toasts: VecDeque<Toast>,
    /// Persistent "waiting" toast, animated each tick until dismissed.
    spinner: Option<(String, usize)>,
    max_visible: usize,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
            spinner: None,
            max_visible: 4,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity, duration: Duration) {
        let msg = message.into();
        self.toasts.retain(|t| t.message != msg);
        self.toasts.push_back(Toast {
            message: msg,
            severity,
            expires: Instant::now() + duration,
        });
        while self.toasts.len() > self.max_visible * 2 {
            self.toasts.pop_front();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, Severity::Info, Duration::from_secs(3));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, Severity::Success, Duration::from_secs(3));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(message, Severity::Warning, Duration::from_secs(4));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, Severity::Error, Duration::from_secs(5));
    }

    pub fn spinner(&mut self, message: impl Into<String>) {
        self.spinner = Some((message.into(), 0));
    }

    pub fn dismiss_spinner(&mut self) {
        self.spinner = None;
    }

    /// Drop expired toasts and advance the spinner frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| t.expires > now);
        if let Some((_, frame)) = self.spinner.as_mut() {
            *frame = (*frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty() && self.spinner.is_none()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        if self.is_empty() {
            return;
        }
        let max_width = (area.width / 2).clamp(30, 60);
        let mut rows: Vec<(String, ratatui::style::Color)> = Vec::new();

        if let Some((msg, f)) = &self.spinner {
            rows.push((format!(" {} {} ", SPINNER_FRAMES[*f], msg), C_TOAST_INFO));
        }
        for toast in self.toasts.iter().rev().take(self.max_visible) {
            let (color, icon) = toast.severity.style();
            rows.push((format!(" {} {} ", icon, toast.message), color));
        }

        for (i, (text, color)) in rows.into_iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let w = (text.chars().count() as u16).min(max_width);
            let toast_area = Rect {
                x: area.x + area.width.saturating_sub(w + 1),
                y,
                width: w,
                height: 1,
            };
            frame.render_widget(Clear, toast_area);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    text,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))),
                toast_area,
            );
        }
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_messages_collapse() {
        let mut t = ToastManager::new();
        t.warning("Please select a mood first!");
        t.warning("Please select a mood first!");
        assert_eq!(t.toasts.len(), 1);
    }

    #[test]
    fn test_expired_toasts_are_dropped() {
        let mut t = ToastManager::new();
        t.push("gone", Severity::Info, Duration::ZERO);
        t.tick();
        assert!(t.is_empty());
    }

    #[test]
    fn test_spinner_persists_until_dismissed() {
        let mut t = ToastManager::new();
        t.spinner("waiting");
        t.tick();
        assert!(!t.is_empty());
        t.dismiss_spinner();
        assert!(t.is_empty());
    }
}
