use crate::event::AppEvent;
use crate::screens::tasks::{TasksAction, TasksScreen};
use crate::screens::{self, Screen};
use crate::storage::StorageClient;
use crate::tasks::store::TaskStore;
use crate::theme::Theme;
use eframe::egui::{self, RichText};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub struct MochaApp {
    rx: Receiver<AppEvent>,
    storage: StorageClient,
    theme: Theme,
    screen: Screen,
    store: TaskStore,
    tasks_screen: TasksScreen,
    diagnostics_log: Vec<String>,
}

impl MochaApp {
    pub fn new(rx: Receiver<AppEvent>, storage: StorageClient) -> Self {
        // One load per process; the list stays empty until it resolves.
        storage.load_tasks();

        Self {
            rx,
            storage,
            theme: Theme::default(),
            screen: Screen::Home,
            store: TaskStore::new(),
            tasks_screen: TasksScreen::new(),
            diagnostics_log: Vec::new(),
        }
    }

    fn timestamp() -> String {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(duration) => duration.as_secs().to_string(),
            Err(_) => "0".to_string(),
        }
    }

    fn log_diagnostic(&mut self, message: impl Into<String>) {
        self.diagnostics_log
            .push(format!("[{}] {}", Self::timestamp(), message.into()));
    }

    fn persist_tasks(&self) {
        // Full-list snapshot; write failures come back as StorageError.
        self.storage.persist_tasks(self.store.tasks().to_vec());
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.apply_event(event, ctx),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.log_diagnostic("storage event channel disconnected");
                    break;
                }
            }
        }
    }

    fn apply_event(&mut self, event: AppEvent, ctx: &egui::Context) {
        match event {
            AppEvent::TasksLoaded(tasks) => {
                self.store.replace(tasks);
                ctx.request_repaint();
            }
            AppEvent::StorageError(message) => {
                self.log_diagnostic(message);
            }
        }
    }

    fn apply_action(&mut self, action: TasksAction) {
        match action {
            TasksAction::Add { title, due_date } => {
                if self.store.add(&title, &due_date) {
                    self.tasks_screen.clear_inputs();
                    self.persist_tasks();
                }
            }
            TasksAction::Remove(id) => {
                self.store.remove(id);
                self.persist_tasks();
            }
            TasksAction::Navigate(screen) => {
                self.screen = screen;
            }
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(self.theme.header_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.screen.title())
                            .strong()
                            .color(self.theme.text_primary),
                    );
                });
            });
    }
}

impl eframe::App for MochaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);
        self.render_header(ctx);

        match self.screen {
            Screen::Home => {
                if let Some(screen) = screens::home::show(ctx, &self.theme) {
                    self.screen = screen;
                }
            }
            Screen::Tasks => {
                let action = self.tasks_screen.show(
                    ctx,
                    &self.theme,
                    &self.store,
                    &self.diagnostics_log,
                );
                if let Some(action) = action {
                    self.apply_action(action);
                }
            }
        }

        // Storage workers report between frames; keep a slow tick so their
        // events drain without user input.
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}
