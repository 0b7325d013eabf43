//! Custom widgets — title bar controls, progress bar, pill buttons

use egui::{Color32, Response, Sense, Stroke, Ui, Widget};

use crate::theme::PayColors;

/// Action returned by the title bar controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TitleAction {
    None,
    /// Close control: hide the widget, keep running
    Hide,
    /// Menu entry: terminate
    Quit,
}

/// Menu and close control for the right end of the title bar.
pub fn title_bar_controls(ui: &mut Ui) -> TitleAction {
    let mut action = TitleAction::None;

    if close_button(ui).on_hover_text("hide").clicked() {
        action = TitleAction::Hide;
    }

    ui.menu_button("≡", |ui| {
        if ui.button("quit").clicked() {
            action = TitleAction::Quit;
            ui.close_menu();
        }
    });

    action
}

/// Round close control with an X, filled on hover
pub fn close_button(ui: &mut Ui) -> Response {
    let size = egui::vec2(16.0, 16.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let color = if response.hovered() {
            painter.circle_filled(rect.center(), rect.width() / 2.0, PayColors::EDIT_HOVER);
            Color32::WHITE
        } else {
            PayColors::MUTED
        };
        let m = 4.5;
        let stroke = Stroke::new(1.5, color);
        painter.line_segment(
            [rect.left_top() + egui::vec2(m, m), rect.right_bottom() - egui::vec2(m, m)],
            stroke,
        );
        painter.line_segment(
            [rect.right_top() + egui::vec2(-m, m), rect.left_bottom() + egui::vec2(m, -m)],
            stroke,
        );
    }
    response
}

/// Thin rounded bar; `ratio` is clamped to [0, 1].
pub fn progress_bar(ui: &mut Ui, ratio: f64) -> Response {
    let height = 6.0;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let rounding = height / 2.0;
        painter.rect_filled(rect, rounding, PayColors::TRACK);

        let fill_w = rect.width() * ratio.clamp(0.0, 1.0) as f32;
        if fill_w > 0.0 {
            let fill = egui::Rect::from_min_size(rect.min, egui::vec2(fill_w, height));
            painter.rect_filled(fill, rounding, PayColors::ACCENT);
        }
    }
    response
}

/// Full-width pill button with white bold text
pub struct PillButton<'a> {
    text: &'a str,
    fill: Color32,
    hover: Color32,
}

impl<'a> PillButton<'a> {
    /// Primary action (save)
    pub fn accent(text: &'a str) -> Self {
        Self { text, fill: PayColors::ACCENT, hover: PayColors::ACCENT_HOVER }
    }

    /// Secondary action (back to settings)
    pub fn edit(text: &'a str) -> Self {
        Self { text, fill: PayColors::EDIT, hover: PayColors::EDIT_HOVER }
    }
}

impl<'a> Widget for PillButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired = egui::vec2(ui.available_width(), 32.0);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() { self.hover } else { self.fill };
            let painter = ui.painter();
            painter.rect_filled(rect, 10.0, fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(14.0),
                Color32::WHITE,
            );
        }

        response
    }
}

/// Caption above a single-line text field
pub fn labelled_field(ui: &mut Ui, label: &str, value: &mut String, hint: &str) -> Response {
    ui.vertical(|ui| {
        ui.label(label);
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(ui.available_width())
                .margin(egui::vec2(8.0, 6.0)),
        )
    })
    .inner
}
