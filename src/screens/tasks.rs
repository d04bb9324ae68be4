use crate::screens::Screen;
use crate::tasks::store::TaskStore;
use crate::theme::Theme;
use crate::ui::calendar::{self, CalendarState};
use eframe::egui::{self, Button, CornerRadius, RichText, ScrollArea};

/// What the task screen asked the app to do this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksAction {
    Add { title: String, due_date: String },
    Remove(i64),
    Navigate(Screen),
}

/// Task entry screen: inputs, inline calendar, the task list and the
/// diagnostics panel.
///
/// All transient view state lives here, on the instance; two task screens
/// would not interfere with each other.
pub struct TasksScreen {
    title_input: String,
    due_date_input: String,
    calendar: CalendarState,
}

impl TasksScreen {
    pub fn new() -> Self {
        Self {
            title_input: String::new(),
            due_date_input: String::new(),
            calendar: CalendarState::current_month(),
        }
    }

    /// Called by the app after an accepted add, matching the source's
    /// clear-on-save behavior. Rejected input stays in the fields.
    pub fn clear_inputs(&mut self) {
        self.title_input.clear();
        self.due_date_input.clear();
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        store: &TaskStore,
        diagnostics: &[String],
    ) -> Option<TasksAction> {
        let mut action = None;

        egui::CentralPanel::default()
            .frame(theme.screen_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("tasks_screen")
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("Your Task")
                                    .size(30.0)
                                    .color(theme.text_primary),
                            );
                        });
                        ui.add_space(theme.spacing_8);

                        let mut submit = false;
                        let title_response = ui.add(
                            egui::TextEdit::singleline(&mut self.title_input)
                                .hint_text("Enter your task...")
                                .desired_width(f32::INFINITY),
                        );
                        if title_response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            submit = true;
                        }

                        ui.add(
                            egui::TextEdit::singleline(&mut self.due_date_input)
                                .hint_text("Enter due date (YYYY-MM-DD)...")
                                .desired_width(f32::INFINITY),
                        );

                        theme.calendar_frame().show(ui, |ui| {
                            if let Some(day) = calendar::month_grid(
                                ui,
                                theme,
                                &mut self.calendar,
                                &self.due_date_input,
                            ) {
                                self.due_date_input = day;
                            }
                        });

                        ui.add_space(theme.spacing_8);
                        let save = Button::new(
                            RichText::new("Save Task").strong().color(theme.text_primary),
                        )
                        .fill(theme.accent)
                        .corner_radius(CornerRadius::same(theme.radius_8));
                        submit |= ui.add(save).clicked();

                        if submit {
                            action = Some(TasksAction::Add {
                                title: self.title_input.clone(),
                                due_date: self.due_date_input.clone(),
                            });
                        }

                        ui.add_space(theme.spacing_12);
                        if store.is_empty() {
                            ui.label(RichText::new("No tasks yet").color(theme.text_muted));
                        }
                        for task in store.tasks() {
                            theme.card_frame().show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.vertical(|ui| {
                                        ui.label(format!("\u{1F518} {}", task.title));
                                        ui.label(
                                            RichText::new(task.due_date.as_str())
                                                .color(theme.text_muted),
                                        );
                                    });
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            if ui.button("\u{1F5D1}").clicked() {
                                                action = Some(TasksAction::Remove(task.id));
                                            }
                                        },
                                    );
                                });
                            });
                        }

                        ui.add_space(theme.spacing_12);
                        egui::CollapsingHeader::new("Diagnostics")
                            .default_open(false)
                            .show(ui, |ui| {
                                if diagnostics.is_empty() {
                                    ui.label(RichText::new("Nothing logged").small());
                                }
                                for entry in diagnostics {
                                    ui.label(RichText::new(entry).small());
                                }
                            });

                        ui.add_space(theme.spacing_16);
                        ui.vertical_centered(|ui| {
                            let back = Button::new(
                                RichText::new("BACK").strong().color(theme.text_on_light),
                            )
                            .fill(theme.input_fill)
                            .corner_radius(CornerRadius::same(theme.radius_12));
                            if ui.add(back).clicked() {
                                action = Some(TasksAction::Navigate(Screen::Home));
                            }
                        });
                    });
            });

        action
    }
}
