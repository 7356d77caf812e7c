//! Emergency screen — replaces the whole UI once the safety check trips.
//!
//! Shows the configured resource as plain text when it can be read, and
//! built-in guidance otherwise. The only way out is quitting.

use std::path::Path;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::{
    action::{Action, ComponentId},
    app_state::{AppState, EmergencyView},
    component::Component,
    components::help_overlay::centered_rect,
    theme::{style_default, style_muted, C_BG, C_ERROR, C_PRIMARY},
};

const GUIDANCE: &[&str] = &[
    "If you are thinking about suicide or about ending your life,",
    "please reach out to someone right now.",
    "",
    "• Call or text 988 (Suicide & Crisis Lifeline, US)",
    "• Text HOME to 741741 (Crisis Text Line)",
    "• Call your local emergency number",
    "• Find a helpline in your country: https://findahelpline.com",
    "",
    "Talking to someone you trust can help too.",
];

/// Build the emergency view for `target`, reading it if possible.
pub fn load(target: &str) -> EmergencyView {
    let body = match std::fs::read_to_string(Path::new(target)) {
        Ok(raw) => {
            let text = if target.ends_with(".html") || target.ends_with(".htm") {
                html_to_text(&raw)
            } else {
                raw
            };
            (!text.trim().is_empty()).then_some(text)
        }
        Err(e) => {
            warn!("emergency: cannot read {}: {}", target, e);
            None
        }
    };
    EmergencyView {
        target: target.to_string(),
        body,
    }
}

/// Visible text of an HTML page, one block per line.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let root = Selector::parse("body")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .unwrap_or_else(|| document.root_element());

    let mut out = String::with_capacity(html.len());
    collect_text(root, &mut out);

    let lines: Vec<&str> = out
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    lines.join("\n")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if matches!(name, "script" | "style" | "noscript" | "template") {
        return;
    }
    let block = matches!(
        name,
        "p" | "br" | "li" | "div" | "section" | "h1" | "h2" | "h3" | "h4" | "tr" | "ul" | "ol"
    );

    if block {
        out.push('\n');
    }
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(&text.replace('\u{a0}', " "));
        } else if let Some(child) = ElementRef::wrap(child) {
            collect_text(child, out);
        }
    }
    if block {
        out.push('\n');
    }
}

pub struct Emergency;

impl Component for Emergency {
    fn id(&self) -> ComponentId {
        ComponentId::Emergency
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
            _ => vec![],
        }
    }

    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool, state: &AppState) {
        let Some(view) = &state.emergency else {
            return;
        };

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(C_BG)), area);

        let mut lines = vec![
            Line::from(Span::styled(
                "You are not alone.",
                Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        match &view.body {
            Some(body) => lines.extend(body.lines().map(|l| Line::from(Span::styled(l.to_string(), style_default())))),
            None => lines.extend(GUIDANCE.iter().map(|l| Line::from(Span::styled(*l, style_default())))),
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("({})", view.target),
            style_muted(),
        )));

        let height = (lines.len() as u16 + 2).min(area.height);
        let popup = centered_rect(80, height, area);
        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(C_ERROR))
                        .title(Span::styled(
                            " help is available ",
                            Style::default().fg(C_ERROR).add_modifier(Modifier::BOLD),
                        )),
                )
                .wrap(Wrap { trim: false }),
            popup,
        );
    }
}
