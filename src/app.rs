//! Application state management.
//!
//! The App owns the history store, the generation manager, and the panel
//! widgets, and runs the event loop: user input and generation results
//! arrive over channels, state is mutated on this single task, and the
//! screen is redrawn after every event.

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::Receiver;

use crate::event::mouse::MouseAction;
use crate::event::output::OutputAction;
use crate::event::{self, UserEvent};
use crate::export::clipboard::ClipboardCapability;
use crate::export::{copy_text, open_pdf, BrowserWindow, OsCopyCommand, SystemClipboard};
use crate::generate::{EndpointClient, GenerateRequest, GenerationManager, GenerationUpdate};
use crate::history::{FileStorage, HistoryStore};
use crate::render::{render_history, HistoryItem, TextSink};
use crate::ui::form::FormPane;
use crate::ui::history::HistoryPanel;
use crate::ui::layout::AppLayout;
use crate::ui::output::OutputPanel;
use crate::ui::status::StatusLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Form,
    Output,
    History,
}

pub struct App {
    // backend
    store: HistoryStore<FileStorage>,
    generation: GenerationManager,

    // frontend widgets, visible to the ui module
    pub(crate) form: FormPane,
    pub(crate) output: OutputPanel,
    pub(crate) history: HistoryPanel,
    pub(crate) status: StatusLine,

    active_pane: ActivePane,
    generating: bool,
    exit: bool,
    /// Copy request queued by a key handler, run on the main task so the
    /// clipboard never crosses threads.
    pending_copy: Option<String>,

    layout: AppLayout,

    user_events: Receiver<std::io::Result<UserEvent>>,
}

impl App {
    pub fn new() -> Result<Self> {
        let store = HistoryStore::new(FileStorage::open_default());
        let mut history = HistoryPanel::new();
        render_history(&store, Some(&mut history));

        Ok(Self {
            store,
            generation: GenerationManager::new(EndpointClient::from_env()),
            form: FormPane::new(),
            output: OutputPanel::new(),
            history,
            status: StatusLine::new(),
            active_pane: ActivePane::Form,
            generating: false,
            exit: false,
            pending_copy: None,
            // Resized on first draw
            layout: AppLayout::build(ratatui::layout::Rect {
                x: 0,
                y: 0,
                width: 80,
                height: 24,
            }),
            user_events: event::init_user_event(),
        })
    }

    pub fn get_active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn layout(&self) -> &AppLayout {
        &self.layout
    }

    fn next_pane(&mut self) {
        self.active_pane = match self.active_pane {
            ActivePane::Form => ActivePane::Output,
            ActivePane::Output => ActivePane::History,
            ActivePane::History => ActivePane::Form,
        };
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            if self.exit {
                break Ok(());
            }
            tokio::select! {
                res = self.user_events.recv() => {
                    let user_evt = res.context("User event stream ended")?;
                    self.handle_user_event(user_evt?)?;
                }
                update = self.generation.recv_update() => {
                    if let Some(update) = update {
                        self.handle_generation_update(update);
                    }
                }
            }
            // Copy runs here, on the main task, after the handler returned
            if let Some(text) = self.pending_copy.take() {
                self.copy_to_clipboard(&text).await;
            }
            self.draw(terminal)?;
        }
    }

    pub fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            if self.layout.full_area != area {
                self.layout = AppLayout::build(area);
            }
            use ratatui::widgets::Widget;
            (&*self).render(area, frame.buffer_mut());
        })?;
        self.update_cursor_position(terminal)?;
        Ok(())
    }

    /// The hardware cursor tracks the form input; it is hidden elsewhere.
    fn update_cursor_position(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        if self.active_pane == ActivePane::Form {
            if let Some(pos) = self.form.cursor_position(self.layout.form_area) {
                terminal.show_cursor()?;
                terminal.set_cursor_position(pos)?;
                return Ok(());
            }
        }
        terminal.hide_cursor()?;
        Ok(())
    }

    fn handle_user_event(&mut self, event: UserEvent) -> Result<()> {
        match event {
            UserEvent::Key(key_evt) if matches!(key_evt.kind, KeyEventKind::Press) => {
                // Ctrl+Q => quit
                if key_evt.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key_evt.code, KeyCode::Char('q') | KeyCode::Char('Q'))
                {
                    self.exit = true;
                    return Ok(());
                }
                // Tab => cycle panes
                if key_evt.code == KeyCode::Tab {
                    self.next_pane();
                    return Ok(());
                }

                match self.active_pane {
                    ActivePane::Form => {
                        if let Some(req) = event::form::handle_key_event(&mut self.form, key_evt) {
                            self.submit(req);
                        }
                    }
                    ActivePane::Output => {
                        match event::output::handle_key_event(&mut self.output, key_evt) {
                            OutputAction::Copy(text) => self.request_copy(text),
                            OutputAction::Export(text) => self.export_pdf(&text),
                            OutputAction::None => {}
                        }
                    }
                    ActivePane::History => {
                        if let Some(item) =
                            event::history::handle_key_event(&mut self.history, key_evt)
                        {
                            self.activate_item(&item);
                        }
                    }
                }
            }
            UserEvent::Mouse(mouse) => {
                match event::mouse::handle_mouse_event(&mouse, &self.layout, &mut self.history) {
                    MouseAction::Focus(pane) => self.active_pane = pane,
                    MouseAction::ActivateHistory(item) => {
                        self.active_pane = ActivePane::History;
                        self.activate_item(&item);
                    }
                    MouseAction::None => {}
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self, req: GenerateRequest) {
        if self.generating {
            self.status.set_text("Génération déjà en cours…");
            return;
        }
        self.generating = true;
        self.status
            .set_text(&format!("Génération en cours : {}…", req.topic));
        self.generation.request(req);
    }

    /// Generated content flows save → display → re-render history.
    fn handle_generation_update(&mut self, update: GenerationUpdate) {
        self.generating = false;
        match update {
            GenerationUpdate::Done { topic, text } => {
                self.store.save_to_history(&topic, &text);
                self.output.set_text(&text);
                self.status.set_text(&format!("Contenu généré : {topic}"));
                render_history(&self.store, Some(&mut self.history));
            }
            GenerationUpdate::Error { topic, message } => {
                self.status
                    .set_text(&format!("Échec de génération pour {topic} : {message}"));
            }
        }
    }

    fn activate_item(&mut self, item: &HistoryItem) {
        item.activate(Some(&mut self.output), Some(&mut self.status));
    }

    fn request_copy(&mut self, text: String) {
        if text.is_empty() {
            self.status.set_text("Aucun contenu à copier");
            return;
        }
        self.pending_copy = Some(text);
    }

    async fn copy_to_clipboard(&mut self, text: &str) {
        let mut primary = SystemClipboard::open();
        let mut fallback = OsCopyCommand;
        let ok = copy_text(
            text,
            primary.as_mut().map(|c| c as &mut dyn ClipboardCapability),
            Some(&mut fallback),
        )
        .await;
        self.status.set_text(if ok {
            "Copié dans le presse-papiers"
        } else {
            "Copie impossible"
        });
    }

    fn export_pdf(&mut self, text: &str) {
        if text.is_empty() {
            self.status.set_text("Aucun contenu à exporter");
            return;
        }
        let mut opener = BrowserWindow::new();
        if open_pdf(text, &mut opener, Some(&mut self.status)) {
            self.status
                .set_text("Export PDF : choisis “Enregistrer en PDF” dans le navigateur");
        } else {
            self.status.set_text("Échec de l’export PDF");
        }
    }
}
