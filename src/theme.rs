use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, Stroke, TextStyle};

/// Warm cocoa palette shared by both screens.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub header: Color32,
    pub card: Color32,
    pub card_hover: Color32,
    pub accent: Color32,
    pub accent_muted: Color32,
    pub today: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_disabled: Color32,
    pub text_on_light: Color32,
    pub input_fill: Color32,
    pub border_subtle: Color32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub spacing_16: f32,
    pub radius_8: u8,
    pub radius_12: u8,
    pub calendar_day_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0x6B, 0x4C, 0x29),
            header: Color32::from_rgb(0x32, 0x14, 0x14),
            card: Color32::from_rgb(0x48, 0x3D, 0x2C),
            card_hover: Color32::from_rgb(0x55, 0x48, 0x34),
            accent: Color32::from_rgb(0xFF, 0xA5, 0x00),
            accent_muted: Color32::from_rgb(0xD9, 0x8C, 0x00),
            today: Color32::from_rgb(0xFF, 0x63, 0x47),
            text_primary: Color32::WHITE,
            text_muted: Color32::from_rgb(0xAA, 0xAA, 0xAA),
            text_disabled: Color32::GRAY,
            text_on_light: Color32::BLACK,
            input_fill: Color32::WHITE,
            border_subtle: Color32::from_rgba_premultiplied(255, 255, 255, 13),
            spacing_8: 8.0,
            spacing_12: 12.0,
            spacing_16: 16.0,
            radius_8: 8,
            radius_12: 12,
            calendar_day_size: 32.0,
        }
    }
}

impl Theme {
    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.override_text_color = Some(self.text_primary);
        visuals.widgets.noninteractive.fg_stroke.color = self.text_primary;
        visuals.widgets.noninteractive.bg_fill = self.card;
        visuals.widgets.noninteractive.weak_bg_fill = self.card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::NONE;
        visuals.widgets.inactive.bg_fill = self.card;
        visuals.widgets.inactive.fg_stroke.color = self.text_primary;
        visuals.widgets.inactive.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.bg_fill = self.card_hover;
        visuals.widgets.hovered.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.fg_stroke.color = self.text_primary;
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::NONE;
        visuals.widgets.active.fg_stroke.color = self.text_primary;
        visuals.widgets.open.bg_fill = self.card_hover;
        visuals.widgets.open.bg_stroke = Stroke::NONE;
        visuals.selection.bg_fill = self.accent_muted;
        visuals.hyperlink_color = self.accent;
        visuals.window_fill = self.background;
        visuals.window_stroke = Stroke::NONE;
        visuals.window_corner_radius = CornerRadius::same(self.radius_12);

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(30.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(15.0));
        style.text_styles.insert(TextStyle::Monospace, FontId::monospace(13.0));
        style.text_styles.insert(TextStyle::Button, FontId::proportional(15.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(12.0));
        ctx.set_style(style);
    }

    pub fn header_frame(&self) -> Frame {
        Frame::new()
            .fill(self.header)
            .inner_margin(Margin::symmetric(self.spacing_16 as i8, 10))
    }

    pub fn screen_frame(&self) -> Frame {
        Frame::new()
            .fill(self.background)
            .inner_margin(Margin::same(self.spacing_16 as i8))
    }

    pub fn card_frame(&self) -> Frame {
        Frame::new()
            .fill(self.card)
            .inner_margin(Margin::same(self.spacing_12 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
            .stroke(Stroke::NONE)
    }

    pub fn calendar_frame(&self) -> Frame {
        Frame::new()
            .fill(self.card)
            .inner_margin(Margin::same(self.spacing_8 as i8))
            .corner_radius(CornerRadius::same(self.radius_8))
            .stroke(Stroke::new(1.0, self.border_subtle))
    }
}
