//! paycore — shared library for the slowPay salary widget

pub mod animation;
pub mod autohide;
pub mod clock;
pub mod earnings;
pub mod logging;
pub mod repaint;
pub mod schedule;
pub mod store;
pub mod theme;
pub mod widgets;

pub use autohide::{AutoHideConfig, EdgeDock};
pub use earnings::{compute, EarningsSnapshot, WorkStatus};
pub use repaint::RepaintController;
pub use schedule::{ScheduleForm, WorkScheduleConfig};
pub use theme::PayTheme;

/// Gap between the widget and the right edge of the screen on first launch
pub const START_MARGIN_RIGHT: f32 = 10.0;
/// Gap to the bottom edge, clearing a typical taskbar
pub const START_MARGIN_BOTTOM: f32 = 80.0;

/// Where the widget opens: tucked into the bottom-right corner of `screen`.
pub fn start_position(screen: egui::Rect, window: egui::Vec2) -> egui::Pos2 {
    egui::Pos2::new(
        screen.right() - window.x - START_MARGIN_RIGHT,
        screen.bottom() - window.y - START_MARGIN_BOTTOM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        let pos = start_position(screen, egui::vec2(320.0, 220.0));
        assert_eq!(pos, egui::Pos2::new(1590.0, 780.0));
    }
}
