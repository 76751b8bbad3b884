use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::core::drafts::DraftStore;
use crate::core::leads::LeadRecord;
use crate::core::wizard::{AutoSaveScheduler, SubmitOutcome, Wizard, WizardOptions};

use super::events::{AppEvent, Notification, NotificationLevel};
use super::theme;
use super::views::wizard::{WizardInput, WizardViewState};

/// Where the app persists its output.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub leads_dir: PathBuf,
}

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Wizard view state (owns the wizard session).
    pub wizard: WizardViewState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Draft storage for auto-save; `None` disables auto-save.
    drafts: Option<DraftStore>,
    paths: AppPaths,
    /// Debounces auto-saves into `AppEvent::AutoSaveDue`.
    autosave: AutoSaveScheduler,
    /// Receiver for backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender for pushing events from within the app.
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    /// Must be called from within a tokio runtime.
    pub fn new(
        wizard: Wizard,
        drafts: Option<DraftStore>,
        paths: AppPaths,
        autosave_window: Duration,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let tx = event_tx.clone();
        let autosave = AutoSaveScheduler::spawn(autosave_window, move || {
            let _ = tx.send(AppEvent::AutoSaveDue);
        });

        Self {
            running: true,
            wizard: WizardViewState::new(wizard),
            notifications: Vec::new(),
            notification_counter: 0,
            drafts,
            paths,
            autosave,
            event_rx,
            event_tx,
        }
    }

    /// Queue an event from outside the loop.
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
        elapsed_tick: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut elapsed_interval = tokio::time::interval(elapsed_tick);
        // The first tick of an interval completes immediately
        elapsed_interval.tick().await;
        let mut event_stream = EventStream::new();

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                _ = elapsed_interval.tick() => {
                    self.handle_event(AppEvent::ElapsedTick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        // Don't lose edits made inside the last debounce window
        self.save_draft();
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                if is_quit_key(&crossterm_event) {
                    self.running = false;
                    return;
                }
                match self.wizard.handle_input(&crossterm_event) {
                    WizardInput::Edited => self.autosave.touch(),
                    WizardInput::Submit => self.submit(),
                    WizardInput::Consumed | WizardInput::Ignored => {}
                }
            }
            AppEvent::Tick => self.on_tick(),
            AppEvent::ElapsedTick => self.wizard.wizard_mut().tick(),
            AppEvent::AutoSaveDue => self.save_draft(),
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    fn save_draft(&mut self) {
        let Some(drafts) = &self.drafts else {
            return;
        };

        let result = self
            .wizard
            .wizard_mut()
            .flush_auto_save_with(|snapshot| {
                drafts.save(snapshot)?;
                Ok(())
            });

        if let Err(e) = result {
            log::error!("Auto-save failed: {e:#}");
            self.push_notification(format!("Auto-save failed: {e}"), NotificationLevel::Error);
        }
    }

    fn submit(&mut self) {
        let leads_dir = self.paths.leads_dir.clone();
        let wizard = self.wizard.wizard_mut();
        let session_id = wizard.id();
        let definition_id = wizard.definition().id.clone();
        let elapsed = wizard.progress().elapsed_seconds;

        let outcome = wizard.submit(|state| {
            LeadRecord::new(session_id, definition_id, elapsed, state.clone()).write_to(&leads_dir)
        });
        self.wizard.sync_step();

        match outcome {
            Ok(SubmitOutcome::Submitted(path)) => {
                self.autosave.cancel();
                if let Some(drafts) = &self.drafts {
                    if let Err(e) = drafts.delete(session_id) {
                        log::warn!("Failed to remove draft {session_id}: {e}");
                    }
                }
                self.push_notification(
                    format!("Lead saved to {}", path.display()),
                    NotificationLevel::Success,
                );
                self.start_new_session();
            }
            Ok(SubmitOutcome::Rejected { step_index, errors }) => {
                let step = self.wizard.wizard().current_step().title.clone();
                log::info!("Submit rejected at step {step_index} with {} errors", errors.len());
                self.push_notification(
                    format!("Please fix \"{step}\" before submitting"),
                    NotificationLevel::Warning,
                );
            }
            Ok(SubmitOutcome::NotAtTerminalStep) => {
                self.push_notification(
                    "Finish the remaining steps first".to_string(),
                    NotificationLevel::Info,
                );
            }
            Err(e) => {
                log::error!("Failed to write lead: {e:#}");
                self.push_notification(format!("Failed to save lead: {e}"), NotificationLevel::Error);
            }
        }
    }

    fn start_new_session(&mut self) {
        let definition = self.wizard.wizard().definition().clone();
        match Wizard::new(definition, WizardOptions::default()) {
            Ok(wizard) => self.wizard.replace(wizard),
            Err(e) => {
                // The same definition already validated once
                log::error!("Failed to start a new session: {e}");
                self.running = false;
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        let mut notification = Notification::new(message, level);
        notification.id = self.notification_counter;
        self.notifications.push(notification);

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([Constraint::Min(10), Constraint::Length(1)]).split(area);

        self.wizard.render(frame, chunks[0]);
        self.render_status_bar(frame, chunks[1]);
        self.render_notifications(frame, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let wizard = self.wizard.wizard();

        let save_status = match (self.drafts.is_some(), wizard.is_dirty(), wizard.last_auto_save()) {
            (false, _, _) => Span::styled("drafts off", theme::dim()),
            (true, true, _) => Span::styled("unsaved", Style::default().fg(theme::WARNING)),
            (true, false, Some(at)) => Span::styled(
                format!("saved {}", at.with_timezone(&chrono::Local).format("%H:%M:%S")),
                Style::default().fg(theme::SUCCESS),
            ),
            (true, false, None) => Span::styled("no changes", theme::muted()),
        };

        let status = Line::from(vec![
            Span::styled(" LEADWIZARD ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                wizard.definition().title.clone(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled("Draft:", theme::key_hint()),
            Span::raw(" "),
            save_status,
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1;

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(&n.message),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }
}

fn is_quit_key(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c') | KeyCode::Char('q'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            ..
        })
    )
}
