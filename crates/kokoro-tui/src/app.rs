//! App — component-based event loop.
//!
//! - `App` owns all components and `AppState` (read-only for components).
//! - A `tokio::mpsc` channel carries `AppMessage`s in from the terminal
//!   reader, submission tasks and reveal tasks.
//! - The loop draws a frame, then waits on the channel or a tick.
//! - Components return `Vec<Action>`; the App applies each Action.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use kokoro_proto::client::HttpClient;
use kokoro_proto::config::Config;
use kokoro_proto::error::JournalError;
use kokoro_proto::journal::JournalStore;
use kokoro_proto::mood::Mood;
use kokoro_proto::orchestrator::{InputSource, Orchestrator, Outcome};
use kokoro_proto::protocol::Track;
use kokoro_proto::render::{RecommendationPanel, Sender};

use crate::{
    action::{Action, ComponentId},
    app_state::{AppState, ChatLine},
    component::Component,
    components::{
        chat_input::ChatInput, chat_log::ChatLog, emergency, emergency::Emergency,
        help_overlay::HelpOverlay, journal_panel::JournalPanel, mood_picker::MoodPicker,
        recommendations::Recommendations,
    },
    focus::FocusRing,
    frontend::ChannelFrontend,
    preview::{PreviewPlayer, PreviewState},
    reveal::{RevealScheduler, RevealStep},
    theme::C_BG,
    widgets::{status_bar::{self, InputMode}, toast::ToastManager},
};

// ── Internal event bus ────────────────────────────────────────────────────────

pub enum AppMessage {
    Event(Event),
    /// A line for the chat log.
    Chat { sender: Sender, text: String },
    /// Replace the recommendation panel.
    Recommendations(Option<Vec<Track>>),
    /// The safety check tripped; switch to the emergency screen.
    Navigate(String),
    Reveal(RevealStep),
    SubmissionDone(Outcome),
}

impl From<RevealStep> for AppMessage {
    fn from(step: RevealStep) -> Self {
        Self::Reveal(step)
    }
}

/// Pane rectangles from the last draw, for mouse hit-testing.
#[derive(Default, Clone)]
struct PaneAreas {
    chat_log: Rect,
    chat_input: Rect,
    mood_picker: Rect,
    recommendations: Rect,
    journal: Rect,
}

pub struct App {
    state: AppState,
    orchestrator: Arc<Orchestrator<HttpClient>>,
    journal: JournalStore,
    reveal: RevealScheduler,
    reveal_enabled: bool,
    preview: PreviewPlayer,

    focus: FocusRing,
    toast: ToastManager,
    pane_areas: PaneAreas,

    chat_log: ChatLog,
    chat_input: ChatInput,
    mood_picker: MoodPicker,
    recommendations: Recommendations,
    journal_panel: JournalPanel,
    help_overlay: HelpOverlay,
    emergency: Emergency,

    tx: Option<mpsc::Sender<AppMessage>>,
    next_line_id: u64,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: &Config,
        orchestrator: Arc<Orchestrator<HttpClient>>,
        journal: JournalStore,
    ) -> Self {
        let entries = journal.load_all();
        info!("journal: loaded {} entries", entries.len());

        Self {
            state: AppState::new(entries),
            orchestrator,
            journal,
            reveal: RevealScheduler::new(&config.reveal),
            reveal_enabled: config.reveal.enabled,
            preview: PreviewPlayer::new(config.preview.enabled),
            focus: FocusRing::new(vec![
                ComponentId::ChatInput,
                ComponentId::ChatLog,
                ComponentId::MoodPicker,
                ComponentId::Recommendations,
                ComponentId::Journal,
            ]),
            toast: ToastManager::new(),
            pane_areas: PaneAreas::default(),
            chat_log: ChatLog::new(),
            chat_input: ChatInput::new(),
            mood_picker: MoodPicker::new(),
            recommendations: Recommendations::new(),
            journal_panel: JournalPanel::new(),
            help_overlay: HelpOverlay::new(),
            emergency: Emergency,
            tx: None,
            next_line_id: 0,
            should_quit: false,
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        let (tx, mut rx) = mpsc::channel::<AppMessage>(1024);
        self.tx = Some(tx.clone());

        // ── Background task: keyboard/mouse events ────────────────────────────
        let event_tx = tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(AppMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // Toast expiry + spinner animation.
        let mut toast_tick = tokio::time::interval(Duration::from_millis(100));
        toast_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // Component maintenance and preview reaping.
        let mut ui_tick = tokio::time::interval(Duration::from_millis(250));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // ── Main loop ─────────────────────────────────────────────────────────
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(msg) = rx.recv() => {
                    const MAX_DRAIN: usize = 256;
                    self.handle_message(msg).await;
                    // Reveal steps arrive in bursts; fold them into one frame.
                    for _ in 0..MAX_DRAIN {
                        match rx.try_recv() {
                            Ok(next) => self.handle_message(next).await,
                            Err(_) => break,
                        }
                    }
                    needs_redraw = true;
                }

                _ = ui_tick.tick() => {
                    let tick_actions: Vec<Action> = {
                        let s = &self.state;
                        let mut all = Vec::new();
                        all.extend(self.chat_log.tick(s));
                        all.extend(self.chat_input.tick(s));
                        all.extend(self.mood_picker.tick(s));
                        all.extend(self.recommendations.tick(s));
                        all.extend(self.journal_panel.tick(s));
                        all
                    };
                    for action in tick_actions {
                        self.dispatch(action).await;
                    }
                    if let Some(url) = self.preview.poll() {
                        debug!("preview finished: {}", url);
                        self.state.previewing = None;
                    }
                    needs_redraw = true;
                }

                _ = toast_tick.tick() => {
                    if !self.toast.is_empty() {
                        self.toast.tick();
                        needs_redraw = true;
                    }
                }
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        self.reveal.abort_all();
        self.preview.stop();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        info!("kokoro exiting");

        Ok(())
    }

    async fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Event(Event::Key(key)) => {
                for action in self.handle_key(key) {
                    self.dispatch(action).await;
                }
            }
            AppMessage::Event(Event::Mouse(mouse)) => {
                for action in self.handle_mouse(mouse) {
                    self.dispatch(action).await;
                }
            }
            AppMessage::Event(_) => {}

            // Nothing renders behind the emergency screen.
            AppMessage::Chat { .. } | AppMessage::Recommendations(_) | AppMessage::Reveal(_)
                if self.state.emergency.is_some() => {}

            AppMessage::Chat { sender, text } => self.push_line(sender, text),
            AppMessage::Recommendations(tracks) => {
                self.state.panel = RecommendationPanel::project(tracks.as_deref());
                self.recommendations.reset();
                if let Some(summary) = self.state.panel.summary() {
                    debug!("recommendations: {}", summary);
                }
            }
            AppMessage::Reveal(RevealStep { id, shown }) => {
                let done = self
                    .state
                    .line_mut(id)
                    .map_or(true, |line| line.reveal_to(shown));
                if done {
                    self.reveal.finish(id);
                }
            }
            AppMessage::Navigate(target) => {
                info!(
                    "navigating to emergency resource {} ({} reveals aborted)",
                    target,
                    self.reveal.active()
                );
                self.reveal.abort_all();
                self.preview.stop();
                self.state.previewing = None;
                self.help_overlay.visible = false;
                self.state.emergency = Some(emergency::load(&target));
                self.sync_input_mode();
            }
            AppMessage::SubmissionDone(outcome) => {
                self.state.in_flight = self.state.in_flight.saturating_sub(1);
                if self.state.in_flight == 0 {
                    self.toast.dismiss_spinner();
                }
                debug!("submission finished: {:?}", outcome);
            }
        }
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Action::Quit];
        }

        if self.state.emergency.is_some() {
            return self.emergency.handle_key(key, &self.state);
        }

        // Help overlay captures all keys when visible.
        if self.help_overlay.visible {
            return self.help_overlay.handle_key(key, &self.state);
        }

        match key.code {
            KeyCode::F(1) => return vec![Action::ToggleHelp],
            KeyCode::Tab => return vec![Action::FocusNext],
            KeyCode::BackTab => return vec![Action::FocusPrev],
            _ => {}
        }

        if self.state.input_mode == InputMode::Normal && key.modifiers == KeyModifiers::NONE {
            match key.code {
                KeyCode::Char('q') => return vec![Action::Quit],
                KeyCode::Char('?') => return vec![Action::ToggleHelp],
                _ => {}
            }
        }

        let s = &self.state;
        match self.focus.current() {
            Some(ComponentId::ChatInput) => self.chat_input.handle_key(key, s),
            Some(ComponentId::ChatLog) => self.chat_log.handle_key(key, s),
            Some(ComponentId::MoodPicker) => self.mood_picker.handle_key(key, s),
            Some(ComponentId::Recommendations) => self.recommendations.handle_key(key, s),
            Some(ComponentId::Journal) => self.journal_panel.handle_key(key, s),
            _ => vec![],
        }
    }

    // ── Mouse handling ────────────────────────────────────────────────────────

    fn handle_mouse(&mut self, event: MouseEvent) -> Vec<Action> {
        if self.state.emergency.is_some() || self.help_overlay.visible {
            return vec![];
        }
        let relevant = matches!(
            event.kind,
            MouseEventKind::Down(_) | MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
        );
        if !relevant {
            return vec![];
        }

        fn hit(r: Rect, col: u16, row: u16) -> bool {
            r.width > 0
                && r.height > 0
                && col >= r.x
                && col < r.x + r.width
                && row >= r.y
                && row < r.y + r.height
        }

        let areas = self.pane_areas.clone();
        let (col, row) = (event.column, event.row);
        let s = &self.state;

        // Focus follows the click; the pane also gets the event.
        macro_rules! click_pane {
            ($component:expr, $area:expr) => {{
                let id = $component.id();
                let mut actions = $component.handle_mouse(event, $area, s);
                if matches!(event.kind, MouseEventKind::Down(_)) && !self.focus.is_focused(id) {
                    actions.insert(0, Action::FocusPane(id));
                }
                return actions;
            }};
        }

        if hit(areas.chat_log, col, row) {
            click_pane!(self.chat_log, areas.chat_log);
        }
        if hit(areas.chat_input, col, row) {
            click_pane!(self.chat_input, areas.chat_input);
        }
        if hit(areas.mood_picker, col, row) {
            click_pane!(self.mood_picker, areas.mood_picker);
        }
        if hit(areas.recommendations, col, row) {
            click_pane!(self.recommendations, areas.recommendations);
        }
        if hit(areas.journal, col, row) {
            click_pane!(self.journal_panel, areas.journal);
        }
        vec![]
    }

    // ── Action dispatcher ─────────────────────────────────────────────────────

    async fn dispatch(&mut self, action: Action) {
        // Components see every action first.
        let secondary: Vec<Action> = {
            let s = &self.state;
            let mut out = Vec::new();
            out.extend(self.chat_log.on_action(&action, s));
            out.extend(self.chat_input.on_action(&action, s));
            out.extend(self.mood_picker.on_action(&action, s));
            out.extend(self.recommendations.on_action(&action, s));
            out.extend(self.journal_panel.on_action(&action, s));
            out.extend(self.help_overlay.on_action(&action, s));
            out.extend(self.emergency.on_action(&action, s));
            out
        };

        self.apply_action(action).await;

        // Secondary actions are applied one level deep.
        for a in secondary {
            self.apply_action(a).await;
        }
    }

    async fn apply_action(&mut self, action: Action) {
        debug!("apply_action: {:?}", action);
        match action {
            // ── Submissions ───────────────────────────────────────────────────
            Action::SendChat(text) => {
                self.submit(InputSource::ChatBox, text);
            }
            Action::SelectMood(mood) => self.select_mood(mood),
            Action::SubmitMood => match self.state.mood.submit() {
                Ok((mood, prompt)) => self.submit(InputSource::MoodButton(mood), prompt),
                Err(e) => {
                    self.toast.warning(e.to_string());
                    self.push_line(Sender::Error, e.to_string());
                }
            },

            // ── Journal ───────────────────────────────────────────────────────
            Action::AddJournalEntry(text) => match self.journal.append(&text) {
                Ok(entry) => {
                    self.state.journal.push(entry);
                    self.toast.success("entry saved");
                }
                Err(JournalError::Empty) => {
                    self.toast.warning(JournalError::Empty.to_string());
                }
                Err(e) => {
                    warn!("journal: {}", e);
                    self.toast.error(format!("could not save entry: {}", e));
                }
            },
            Action::ClearJournal => match self.journal.clear_all() {
                Ok(()) => {
                    self.state.journal.clear();
                    self.toast.info("journal cleared");
                }
                Err(e) => {
                    warn!("journal: {}", e);
                    self.toast.error(format!("could not clear journal: {}", e));
                }
            },

            // ── Tracks ────────────────────────────────────────────────────────
            Action::CopyToClipboard(text) => {
                match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.clone())) {
                    Ok(()) => {
                        let display = if text.chars().count() > 40 {
                            format!("{}…", text.chars().take(40).collect::<String>())
                        } else {
                            text
                        };
                        self.toast.success(format!("copied: {}", display));
                    }
                    Err(e) => {
                        warn!("clipboard error: {}", e);
                        self.toast.error(format!("clipboard error: {}", e));
                    }
                }
            }
            Action::TogglePreview(url) => match self.preview.toggle(&url) {
                Ok(PreviewState::Started) => {
                    self.state.previewing = Some(url);
                    self.toast.info("playing preview");
                }
                Ok(PreviewState::Stopped) => {
                    self.state.previewing = None;
                }
                Err(e) => {
                    warn!("preview: {:#}", e);
                    self.state.previewing = self.preview.current().map(String::from);
                    self.toast.error(format!("{:#}", e));
                }
            },

            // ── Navigation ────────────────────────────────────────────────────
            Action::FocusNext => {
                self.focus.next();
                self.sync_input_mode();
            }
            Action::FocusPrev => {
                self.focus.prev();
                self.sync_input_mode();
            }
            Action::FocusPane(id) => {
                self.focus.set(id);
                self.sync_input_mode();
            }

            // ── UI ────────────────────────────────────────────────────────────
            Action::ToggleHelp => {}
            Action::Warn(msg) => self.toast.warning(msg),

            Action::Quit => self.should_quit = true,
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Run one submission on its own task. Its output comes back through
    /// the message channel.
    fn submit(&mut self, source: InputSource, input: String) {
        let Some(tx) = self.tx.clone() else {
            return;
        };
        self.state.in_flight += 1;
        self.toast.spinner("waiting for Kokoro…");

        let orchestrator = self.orchestrator.clone();
        tokio::spawn(async move {
            let view = ChannelFrontend::new(tx.clone());
            let outcome = orchestrator.submit(source, &input, &view).await;
            let _ = tx.send(AppMessage::SubmissionDone(outcome)).await;
        });
    }

    fn select_mood(&mut self, mood: Mood) {
        let display = self.state.mood.select(mood);
        self.state.mood_display = Some(display);
        self.push_line(
            Sender::System,
            format!(
                "Mood selected: {} {}",
                mood.emoji(),
                mood.label().to_uppercase()
            ),
        );
    }

    fn push_line(&mut self, sender: Sender, text: String) {
        let id = self.next_line_id;
        self.next_line_id += 1;

        let mut line = ChatLine::new(id, sender, text);
        if sender == Sender::Bot && self.reveal_enabled && line.char_count() > 0 {
            if let Some(tx) = self.tx.clone() {
                line.revealed = Some(0);
                self.reveal.schedule(id, line.char_count(), tx);
            }
        }
        self.state.chat.push(line);
    }

    fn sync_input_mode(&mut self) {
        self.state.input_mode = if self.state.emergency.is_some() {
            InputMode::Emergency
        } else {
            match self.focus.current() {
                Some(ComponentId::ChatInput) | Some(ComponentId::Journal) => InputMode::Typing,
                _ => InputMode::Normal,
            }
        };
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(C_BG)), area);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let (body_area, status_area) = (outer[0], outer[1]);

        if self.state.emergency.is_some() {
            self.emergency.draw(frame, body_area, true, &self.state);
            status_bar::draw_keys_bar(frame, status_area, self.state.input_mode, None, 0);
            return;
        }

        // ── Body: conversation left, mood / music / journal right ────────────
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(body_area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Percentage(35),
            ])
            .split(columns[1]);

        self.pane_areas = PaneAreas {
            chat_log: left[0],
            chat_input: left[1],
            mood_picker: right[0],
            recommendations: right[1],
            journal: right[2],
        };

        let focused = self.focus.current();
        let s = &self.state;
        self.chat_log
            .draw(frame, left[0], focused == Some(ComponentId::ChatLog), s);
        self.chat_input
            .draw(frame, left[1], focused == Some(ComponentId::ChatInput), s);
        self.mood_picker
            .draw(frame, right[0], focused == Some(ComponentId::MoodPicker), s);
        self.recommendations.draw(
            frame,
            right[1],
            focused == Some(ComponentId::Recommendations),
            s,
        );
        self.journal_panel
            .draw(frame, right[2], focused == Some(ComponentId::Journal), s);

        status_bar::draw_keys_bar(
            frame,
            status_area,
            self.state.input_mode,
            focused,
            self.state.in_flight,
        );

        // ── Overlays ──────────────────────────────────────────────────────────
        if self.help_overlay.visible {
            self.help_overlay.draw(frame, area, false, &self.state);
        }
        self.toast.draw(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokoro_proto::storage::LocalStorage;

    fn app(dir: &std::path::Path) -> App {
        let mut config = Config::default();
        config.reveal.enabled = false;
        config.preview.enabled = false;
        let client = HttpClient::new(&config.services).unwrap();
        let orchestrator = Arc::new(Orchestrator::new(client, "/nonexistent/emergency.html"));
        App::new(&config, orchestrator, JournalStore::new(LocalStorage::new(dir)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_select_mood_announces_choice() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.dispatch(Action::SelectMood(Mood::Angry)).await;

        assert_eq!(app.state.mood.selected(), Some(Mood::Angry));
        assert_eq!(app.state.mood_display.as_deref(), Some("😠 Angry"));
        let last = app.state.chat.last().unwrap();
        assert_eq!(last.sender, Sender::System);
        assert_eq!(last.text, "Mood selected: 😠 ANGRY");
    }

    #[tokio::test]
    async fn test_submit_without_mood_is_an_error_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.dispatch(Action::SubmitMood).await;

        assert_eq!(app.state.in_flight, 0);
        let last = app.state.chat.last().unwrap();
        assert_eq!(last.sender, Sender::Error);
        assert_eq!(last.text, "Please select a mood first!");
    }

    #[tokio::test]
    async fn test_journal_entries_persist_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.dispatch(Action::AddJournalEntry("   ".into())).await;
        assert!(app.state.journal.is_empty());

        app.dispatch(Action::AddJournalEntry("slept well".into())).await;
        assert_eq!(app.state.journal.len(), 1);

        let reopened = self::app(dir.path());
        assert_eq!(reopened.state.journal.len(), 1);
        assert_eq!(reopened.state.journal[0].text, "slept well");

        app.dispatch(Action::ClearJournal).await;
        assert!(app.state.journal.is_empty());
        assert!(self::app(dir.path()).state.journal.is_empty());
    }

    #[tokio::test]
    async fn test_emergency_screen_drops_later_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.handle_message(AppMessage::Navigate("/nonexistent/emergency.html".into()))
            .await;
        assert!(app.state.emergency.is_some());
        assert_eq!(app.state.input_mode, InputMode::Emergency);

        app.handle_message(AppMessage::Chat {
            sender: Sender::Bot,
            text: "late reply".into(),
        })
        .await;
        app.handle_message(AppMessage::Recommendations(Some(Vec::new())))
            .await;
        assert!(app.state.chat.is_empty());
        assert!(app.state.panel.is_placeholder());

        // Only quitting leaves the screen.
        assert!(app.handle_key(key(KeyCode::Tab)).is_empty());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), vec![Action::Quit]);
    }

    #[tokio::test]
    async fn test_submission_done_never_underflows() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.handle_message(AppMessage::SubmissionDone(Outcome::Ignored))
            .await;
        assert_eq!(app.state.in_flight, 0);
    }

    #[tokio::test]
    async fn test_help_overlay_captures_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        for action in app.handle_key(key(KeyCode::F(1))) {
            app.dispatch(action).await;
        }
        assert!(app.help_overlay.visible);
        assert!(app.handle_key(key(KeyCode::Tab)).is_empty());

        for action in app.handle_key(key(KeyCode::Esc)) {
            app.dispatch(action).await;
        }
        assert!(!app.help_overlay.visible);
    }

    #[tokio::test]
    async fn test_q_only_quits_outside_text_boxes() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        // Chat input has focus at start.
        assert!(app.handle_key(key(KeyCode::Char('q'))).is_empty());

        app.dispatch(Action::FocusPane(ComponentId::ChatLog)).await;
        assert_eq!(app.state.input_mode, InputMode::Normal);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), vec![Action::Quit]);
    }
}
