use crate::screens::Screen;
use crate::theme::Theme;
use eframe::egui::{self, Button, CornerRadius, RichText};

/// Decorative landing screen. Returns a navigation request when the user
/// presses ADD TASK; nothing here touches the task store.
pub fn show(ctx: &egui::Context, theme: &Theme) -> Option<Screen> {
    let mut navigate_to = None;

    egui::CentralPanel::default()
        .frame(theme.screen_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("\u{1F431}  \u{1F431}  \u{1F431}").size(40.0));
                ui.add_space(8.0);
                ui.label(
                    RichText::new("TO-DO")
                        .size(50.0)
                        .italics()
                        .color(theme.text_primary),
                );
                ui.add_space(16.0);
                ui.label(RichText::new("\u{1F47B}").size(56.0));
                ui.add_space(8.0);
                ui.label(RichText::new("Your Tasks").color(theme.text_muted));
                ui.add_space(32.0);

                let add_task = Button::new(
                    RichText::new("ADD TASK")
                        .strong()
                        .italics()
                        .color(theme.text_on_light),
                )
                .fill(theme.input_fill)
                .corner_radius(CornerRadius::same(theme.radius_12));
                if ui.add(add_task).clicked() {
                    navigate_to = Some(Screen::Tasks);
                }
            });

            // Bottom mascots, pinned like the source layout.
            egui::TopBottomPanel::bottom("home_decorations")
                .show_separator_line(false)
                .frame(egui::Frame::new().fill(theme.background))
                .show_inside(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("\u{1F9A6}").size(40.0));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new("\u{1F43E}").size(40.0));
                        });
                    });
                });
        });

    navigate_to
}
