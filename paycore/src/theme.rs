//! slowPay theme — soft blue card on a transparent window
//!
//! The viewport itself is transparent; [`PayTheme::card_frame`] paints the
//! rounded card everything else sits on.

use egui::{Color32, FontFamily, FontId, Margin, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct PayColors;

impl PayColors {
    pub const CARD: Color32 = Color32::from_rgb(0xea, 0xf0, 0xff);
    pub const FIELD: Color32 = Color32::WHITE;
    pub const ACCENT: Color32 = Color32::from_rgb(0x72, 0x86, 0xd3);
    pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x6a, 0x7e, 0xd0);
    pub const TRACK: Color32 = Color32::from_rgb(0xc3, 0xd5, 0xff);
    pub const EDIT: Color32 = Color32::from_rgb(0xf7, 0x8c, 0xa0);
    pub const EDIT_HOVER: Color32 = Color32::from_rgb(0xf9, 0x74, 0x8f);
    pub const TEXT: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
    pub const MUTED: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
    pub const ERROR: Color32 = Color32::from_rgb(0xc0, 0x39, 0x2b);
}

/// Theme configuration for the widget
pub struct PayTheme {
    pub font_size_body: f32,
    pub font_size_amount: f32,
    pub font_size_small: f32,
    pub card_padding: f32,
    pub card_rounding: f32,
    pub item_spacing: f32,
}

impl Default for PayTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_amount: 32.0,
            font_size_small: 12.0,
            card_padding: 8.0,
            card_rounding: 8.0,
            item_spacing: 6.0,
        }
    }
}

impl PayTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_amount, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = PayColors::CARD;
        visuals.panel_fill = Color32::TRANSPARENT;
        visuals.extreme_bg_color = PayColors::FIELD;
        visuals.override_text_color = Some(PayColors::TEXT);
        visuals.window_rounding = Rounding::same(self.card_rounding);
        visuals.menu_rounding = Rounding::same(self.card_rounding);
        visuals.window_shadow = egui::epaint::Shadow::NONE;

        let field = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::NONE;
            ws.rounding = Rounding::same(10.0);
        };
        field(&mut visuals.widgets.inactive);
        field(&mut visuals.widgets.hovered);
        field(&mut visuals.widgets.active);

        visuals.selection.bg_fill = PayColors::TRACK;
        visuals.selection.stroke = Stroke::new(1.0, PayColors::ACCENT);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 6.0);

        ctx.set_style(style);
    }

    /// Rounded card filling the whole viewport
    pub fn card_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(PayColors::CARD)
            .rounding(Rounding::same(self.card_rounding))
            .inner_margin(Margin::same(self.card_padding))
    }

    pub fn amount_font(&self) -> FontId {
        FontId::proportional(self.font_size_amount)
    }
}
