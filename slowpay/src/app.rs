//! slowPay app — two pages in a frameless, edge-docking card

use std::time::Instant;

use egui::{Align, Align2, CentralPanel, Context, FontId, Layout, Pos2, Rect, RichText, Sense, Vec2};
use paycore::autohide::{AutoHideConfig, EdgeDock};
use paycore::clock::Clock;
use paycore::earnings::{compute, format_amount, EarningsSnapshot};
use paycore::repaint::{RepaintController, Ticker};
use paycore::schedule::{ScheduleForm, WorkScheduleConfig};
use paycore::store::{load_schedule, save_schedule, SettingsStore};
use paycore::theme::{PayColors, PayTheme};
use paycore::widgets::{labelled_field, progress_bar, title_bar_controls, PillButton, TitleAction};
use tracing::{debug, error, info};

pub const WINDOW_SIZE: Vec2 = Vec2 { x: 320.0, y: 220.0 };

/// Used until the first frame reports the real monitor size
const FALLBACK_SCREEN: Vec2 = Vec2 { x: 1920.0, y: 1080.0 };

const TITLE_BAR_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Settings,
    Result,
}

pub struct SlowPayApp<S: SettingsStore> {
    page: Page,
    form: ScheduleForm,
    form_error: Option<String>,
    /// Shown on the result page when the schedule couldn't be written
    save_error: Option<String>,
    schedule: Option<WorkScheduleConfig>,
    snapshot: EarningsSnapshot,
    store: S,
    clock: Box<dyn Clock>,
    theme: PayTheme,
    dock: EdgeDock,
    earnings_tick: Ticker,
    pointer_poll: Ticker,
    repaint: RepaintController,
    pointer_inside: bool,
    placed: bool,
}

impl<S: SettingsStore> SlowPayApp<S> {
    pub fn new(store: S, clock: Box<dyn Clock>, auto_hide: AutoHideConfig) -> Self {
        let schedule = load_schedule(&store);
        let (page, form) = match &schedule {
            Some(cfg) => {
                info!(?cfg, "loaded schedule");
                (Page::Result, ScheduleForm::from_config(cfg))
            }
            None => {
                info!("no saved schedule, opening settings");
                (Page::Settings, ScheduleForm::default())
            }
        };

        let screen = Rect::from_min_size(Pos2::ZERO, FALLBACK_SCREEN);
        let start = paycore::start_position(screen, WINDOW_SIZE);
        let pointer_poll = Ticker::new(auto_hide.poll_interval);

        let mut app = Self {
            page,
            form,
            form_error: None,
            save_error: None,
            schedule,
            snapshot: EarningsSnapshot::zero(),
            store,
            clock,
            theme: PayTheme::default(),
            dock: EdgeDock::new(auto_hide, screen, WINDOW_SIZE, start),
            earnings_tick: Ticker::every_second(),
            pointer_poll,
            repaint: RepaintController::new(),
            pointer_inside: false,
            placed: false,
        };
        app.refresh_snapshot();
        app
    }

    fn refresh_snapshot(&mut self) {
        if let Some(cfg) = &self.schedule {
            self.snapshot = compute(self.clock.now(), cfg);
        }
    }

    /// Validate the form, persist it, and switch to the result page.
    fn save(&mut self) {
        let cfg = match self.form.parse() {
            Ok(cfg) => cfg,
            Err(e) => {
                debug!("rejected settings: {e}");
                self.form_error = Some(e.to_string());
                return;
            }
        };
        self.form_error = None;
        self.save_error = match save_schedule(&mut self.store, &cfg) {
            Ok(()) => None,
            Err(e) => {
                error!("couldn't save settings: {e}");
                Some(format!("not saved, lost on restart: {e}"))
            }
        };
        self.apply(cfg);
    }

    fn apply(&mut self, cfg: WorkScheduleConfig) {
        info!(?cfg, "applying schedule");
        self.schedule = Some(cfg);
        self.refresh_snapshot();
        self.page = Page::Result;
    }

    fn edit_settings(&mut self) {
        self.page = Page::Settings;
    }

    fn move_window(ctx: &Context, pos: Pos2) {
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
    }

    /// Pick up the monitor size, and place the window on the first frame it
    /// is known.
    fn sync_viewport(&mut self, ctx: &Context) {
        let monitor = ctx.input(|i| i.viewport().monitor_size);
        let Some(size) = monitor else {
            return;
        };
        self.dock.set_screen(Rect::from_min_size(Pos2::ZERO, size));
        if !self.placed {
            let pos = paycore::start_position(self.dock.screen(), WINDOW_SIZE);
            self.dock.moved_to(pos);
            Self::move_window(ctx, pos);
            self.placed = true;
        }
    }

    /// Pointer position in screen coordinates, while it is over the window.
    ///
    /// Measured from where the window really is. Moves we've asked for land a
    /// frame or more later, so the dock's own position runs ahead during a drag.
    fn global_pointer(&self, ctx: &Context) -> Option<Pos2> {
        let (local, window) = ctx.input(|i| (i.pointer.hover_pos(), i.viewport().inner_rect));
        let origin = window.map_or(self.dock.position(), |r| r.min);
        Some(origin + local?.to_vec2())
    }

    fn track_hover(&mut self, ctx: &Context, now: Instant) {
        let inside = ctx.input(|i| i.pointer.hover_pos().is_some());
        if inside != self.pointer_inside {
            self.pointer_inside = inside;
            if inside {
                self.dock.pointer_entered();
            } else {
                self.dock.pointer_left(now);
            }
        }
    }

    fn title_bar(&mut self, ui: &mut egui::Ui, now: Instant) -> TitleAction {
        let (bar, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), TITLE_BAR_HEIGHT), Sense::hover());
        let drag = ui.interact(bar, ui.id().with("title_drag"), Sense::drag());

        ui.painter().text(
            bar.left_center(),
            Align2::LEFT_CENTER,
            "slowPay",
            FontId::proportional(12.0),
            PayColors::MUTED,
        );

        let mut controls = ui.child_ui(bar, Layout::right_to_left(Align::Center));
        let action = title_bar_controls(&mut controls);

        let ctx = ui.ctx().clone();
        if drag.drag_started() {
            if let Some(pointer) = self.global_pointer(&ctx) {
                self.dock.press(pointer);
            }
        } else if drag.dragged() && self.dock.is_dragging() {
            if let Some(pos) = self.global_pointer(&ctx).and_then(|p| self.dock.drag_to(p)) {
                Self::move_window(&ctx, pos);
            }
        }
        if self.dock.is_dragging() && ctx.input(|i| i.pointer.primary_released()) {
            self.end_drag(&ctx, now);
        }

        action
    }

    fn end_drag(&mut self, ctx: &Context, now: Instant) {
        if let Some(pos) = self.dock.release() {
            Self::move_window(ctx, pos);
        }
        // the pointer may have wandered off during the drag
        if !self.pointer_inside {
            self.dock.pointer_left(now);
        }
    }

    fn handle_title_action(ctx: &Context, action: TitleAction) {
        Self::handle_title_action(ctx, action);
    }

    fn settings_page(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.form;
        ui.columns(2, |cols| {
            labelled_field(&mut cols[0], "monthly salary (¥)", &mut form.salary, "6600");
            labelled_field(&mut cols[1], "work days / month", &mut form.days, "22");
        });
        ui.columns(2, |cols| {
            labelled_field(&mut cols[0], "clock in", &mut form.start, "HH:MM");
            labelled_field(&mut cols[1], "clock out", &mut form.end, "HH:MM");
        });

        if let Some(err) = &self.form_error {
            ui.colored_label(PayColors::ERROR, err);
        }

        ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
            if ui.add(PillButton::accent("save and start")).clicked() {
                self.save();
            }
        });
    }

    fn result_page(&mut self, ui: &mut egui::Ui) {
        let snap = self.snapshot;
        ui.label(format!("time to clock-out: {}", snap.countdown_text()));
        ui.label(RichText::new(format!("status: {}", snap.status.label())).color(PayColors::MUTED));
        ui.add_space(4.0);
        progress_bar(ui, snap.progress_ratio);
        ui.add_space(4.0);
        ui.label(RichText::new(format_amount(snap.earned_amount)).font(self.theme.amount_font()).strong());
        ui.label(format!("today total: {}", format_amount(snap.day_total_amount)));
        if let Some(err) = &self.save_error {
            ui.colored_label(PayColors::ERROR, err);
        }

        ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
            if ui.add(PillButton::edit("edit settings")).clicked() {
                self.edit_settings();
            }
        });
    }
}

impl<S: SettingsStore + 'static> eframe::App for SlowPayApp<S> {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.repaint.begin_frame();

        self.sync_viewport(ctx);
        self.track_hover(ctx, now);

        if self.earnings_tick.poll(now) {
            self.refresh_snapshot();
        }
        if self.dock.is_hidden() && self.pointer_poll.poll(now) {
            if let Some(cursor) = self.global_pointer(ctx) {
                self.dock.poll_pointer(cursor, now);
            }
        }

        let frame = self.theme.card_frame();
        let action = CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| {
                let action = self.title_bar(ui, now);
                ui.add_space(6.0);
                match self.page {
                    Page::Settings => self.settings_page(ui),
                    Page::Result => self.result_page(ui),
                }
                action
            })
            .inner;

        Self::handle_title_action(ctx, action);

        if let Some(pos) = self.dock.tick(now) {
            Self::move_window(ctx, pos);
        }

        self.repaint.wake_at(self.earnings_tick.next_due());
        if self.dock.is_hidden() {
            self.repaint.wake_at(self.pointer_poll.next_due());
        }
        self.repaint.wake_at(self.dock.next_deadline());
        self.repaint.set_continuous(self.dock.is_animating() || self.dock.is_dragging());
        self.repaint.end_frame(ctx, now);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0; 4]
    }
}
