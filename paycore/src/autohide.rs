//! Edge docking — snap to a screen edge, slide away, come back on hover
//!
//! `EdgeDock` is a plain state machine over the window's top-left corner.
//! It never talks to the windowing system itself: the app feeds it pointer
//! events, screen geometry and the current `Instant`, and moves the real
//! window to whatever [`EdgeDock::position`] says.
//!
//! ```text
//!   Visible --(pointer away for hide_delay, edge set)--> Hiding
//!   Hiding  --(slide done)--> Hidden
//!   Hidden  --(pointer touches the exposed strip)--> Showing
//!   Showing --(slide done)--> Visible
//! ```
//!
//! Only one slide runs at a time: `auto_hide` only starts from `Visible`
//! and `show_full` only from `Hidden`.

use egui::{Pos2, Rect, Vec2};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

use crate::animation::{SlideAnimation, SLIDE_DURATION};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoHideConfig {
    /// Pixels left on screen while hidden, also the width of the hot strip
    pub margin: f32,
    /// Distance under which a released window jumps to the edge
    pub snap_threshold: f32,
    pub animation: Duration,
    /// How long the pointer must stay away before the window hides
    pub hide_delay: Duration,
    /// How often the app should report the pointer while hidden
    pub poll_interval: Duration,
}

impl Default for AutoHideConfig {
    fn default() -> Self {
        Self {
            margin: 5.0,
            snap_threshold: 20.0,
            animation: SLIDE_DURATION,
            hide_delay: Duration::from_millis(500),
            poll_interval: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DockState {
    /// On screen. `edge` is where it will hide to, if anywhere.
    Visible { edge: Option<Edge> },
    Hiding { edge: Edge, anim: SlideAnimation, restore: Pos2 },
    Hidden { edge: Edge, restore: Pos2 },
    Showing { edge: Edge, anim: SlideAnimation },
}

#[derive(Debug, Clone)]
pub struct EdgeDock {
    config: AutoHideConfig,
    screen: Rect,
    size: Vec2,
    position: Pos2,
    state: DockState,
    /// Pointer offset from the window corner while dragging
    grab: Option<Vec2>,
    hide_at: Option<Instant>,
}

impl EdgeDock {
    pub fn new(config: AutoHideConfig, screen: Rect, size: Vec2, position: Pos2) -> Self {
        let mut dock = Self {
            config,
            screen,
            size,
            position,
            state: DockState::Visible { edge: None },
            grab: None,
            hide_at: None,
        };
        dock.state = DockState::Visible { edge: dock.classify(position) };
        dock
    }

    pub fn config(&self) -> &AutoHideConfig {
        &self.config
    }

    pub fn state(&self) -> DockState {
        self.state
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn hidden_edge(&self) -> Option<Edge> {
        match self.state {
            DockState::Visible { edge } => edge,
            DockState::Hiding { edge, .. }
            | DockState::Hidden { edge, .. }
            | DockState::Showing { edge, .. } => Some(edge),
        }
    }

    /// True from the moment a hide starts until a show starts.
    pub fn is_hidden(&self) -> bool {
        matches!(self.state, DockState::Hiding { .. } | DockState::Hidden { .. })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, DockState::Hiding { .. } | DockState::Showing { .. })
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    pub fn hide_pending(&self) -> bool {
        self.hide_at.is_some()
    }

    /// Earliest instant at which `tick` has something to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let anim_end = match self.state {
            DockState::Hiding { anim, .. } | DockState::Showing { anim, .. } => Some(anim.ends_at()),
            _ => None,
        };
        match (self.hide_at, anim_end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn set_screen(&mut self, screen: Rect) {
        if screen == self.screen {
            return;
        }
        debug!(?screen, "screen geometry changed");
        self.screen = screen;
        self.reclassify();
    }

    pub fn set_window_size(&mut self, size: Vec2) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.reclassify();
    }

    /// The window was moved by someone else (initial placement, the OS).
    /// Ignored unless the window is resting on screen.
    pub fn moved_to(&mut self, position: Pos2) {
        if self.grab.is_none() && matches!(self.state, DockState::Visible { .. }) {
            self.position = position;
            self.reclassify();
        }
    }

    /// Mouse button went down on the drag area. Refused unless `Visible`.
    pub fn press(&mut self, pointer: Pos2) -> bool {
        if !matches!(self.state, DockState::Visible { .. }) {
            return false;
        }
        self.hide_at = None;
        self.grab = Some(pointer - self.position);
        true
    }

    /// Follow the pointer. Returns the new window position.
    pub fn drag_to(&mut self, pointer: Pos2) -> Option<Pos2> {
        let grab = self.grab?;
        self.position = pointer - grab;
        self.reclassify();
        Some(self.position)
    }

    /// End of a drag: snap to a nearby edge. Returns the final position.
    pub fn release(&mut self) -> Option<Pos2> {
        self.grab.take()?;
        self.position = self.snapped(self.position);
        self.reclassify();
        debug!(position = ?self.position, edge = ?self.hidden_edge(), "drag released");
        Some(self.position)
    }

    /// Pointer left the window. Arms (or restarts) the hide delay when docked,
    /// or while sliding back out.
    pub fn pointer_left(&mut self, now: Instant) {
        if self.grab.is_some() {
            return;
        }
        if let DockState::Visible { edge: Some(_) } | DockState::Showing { .. } = self.state {
            self.hide_at = Some(now + self.config.hide_delay);
        }
    }

    pub fn pointer_entered(&mut self) {
        self.hide_at = None;
    }

    /// Slide off the docked edge. No-op unless `Visible` against an edge.
    pub fn auto_hide(&mut self, now: Instant) -> bool {
        let edge = match self.state {
            DockState::Visible { edge: Some(edge) } if self.grab.is_none() => edge,
            _ => return false,
        };
        self.hide_at = None;
        let restore = self.position;
        let target = self.hidden_position(edge);
        debug!(?edge, "hiding");
        self.state = if target == self.position {
            DockState::Hidden { edge, restore }
        } else {
            let anim = SlideAnimation::new(self.position, target, now, self.config.animation);
            DockState::Hiding { edge, anim, restore }
        };
        true
    }

    /// Slide back to where the window was before hiding. No-op unless `Hidden`.
    pub fn show_full(&mut self, now: Instant) -> bool {
        let (edge, restore) = match self.state {
            DockState::Hidden { edge, restore } => (edge, restore),
            _ => return false,
        };
        debug!(?edge, "showing");
        self.state = if restore == self.position {
            DockState::Visible { edge: self.classify(restore) }
        } else {
            let anim = SlideAnimation::new(self.position, restore, now, self.config.animation);
            DockState::Showing { edge, anim }
        };
        true
    }

    /// Periodic pointer check while hidden. Reveals the window when the
    /// pointer sits on the strip still showing at the docked edge.
    pub fn poll_pointer(&mut self, cursor: Pos2, now: Instant) -> bool {
        let edge = match self.state {
            DockState::Hidden { edge, .. } => edge,
            _ => return false,
        };
        let margin = self.config.margin;
        let hot = match edge {
            Edge::Left => cursor.x <= self.screen.left() + margin,
            Edge::Right => cursor.x >= self.screen.right() - margin,
            Edge::Top => cursor.y <= self.screen.top() + margin,
        };
        trace!(?cursor, hot, "pointer poll");
        hot && self.show_full(now)
    }

    /// Advance timers and any running slide. Returns the new window position
    /// when it changed.
    pub fn tick(&mut self, now: Instant) -> Option<Pos2> {
        let before = self.position;

        match self.state {
            DockState::Hiding { edge, anim, restore } => {
                self.position = anim.position(now);
                if anim.is_finished(now) {
                    self.state = DockState::Hidden { edge, restore };
                }
            }
            DockState::Showing { anim, .. } => {
                self.position = anim.position(now);
                if anim.is_finished(now) {
                    self.state = DockState::Visible { edge: self.classify(self.position) };
                }
            }
            DockState::Visible { .. } | DockState::Hidden { .. } => {}
        }

        // a hide armed during a reveal waits for the slide to land
        let resting = matches!(self.state, DockState::Visible { .. });
        if resting && self.hide_at.is_some_and(|at| now >= at) {
            self.hide_at = None;
            self.auto_hide(now);
        }

        (self.position != before).then_some(self.position)
    }

    fn reclassify(&mut self) {
        if let DockState::Visible { .. } = self.state {
            let edge = self.classify(self.position);
            if edge.is_none() {
                self.hide_at = None;
            }
            self.state = DockState::Visible { edge };
        }
    }

    fn classify(&self, pos: Pos2) -> Option<Edge> {
        if pos.x <= self.screen.left() {
            Some(Edge::Left)
        } else if pos.x + self.size.x >= self.screen.right() {
            Some(Edge::Right)
        } else if pos.y <= self.screen.top() {
            Some(Edge::Top)
        } else {
            None
        }
    }

    fn snapped(&self, pos: Pos2) -> Pos2 {
        let threshold = self.config.snap_threshold;
        let mut out = pos;
        if (pos.x - self.screen.left()).abs() < threshold {
            out.x = self.screen.left();
        }
        if (pos.x + self.size.x - self.screen.right()).abs() < threshold {
            out.x = self.screen.right() - self.size.x;
        }
        if (pos.y - self.screen.top()).abs() < threshold {
            out.y = self.screen.top();
        }
        out
    }

    fn hidden_position(&self, edge: Edge) -> Pos2 {
        let margin = self.config.margin;
        match edge {
            Edge::Left => Pos2::new(self.screen.left() - self.size.x + margin, self.position.y),
            Edge::Right => Pos2::new(self.screen.right() - margin, self.position.y),
            Edge::Top => Pos2::new(self.position.x, self.screen.top() - self.size.y + margin),
        }
    }
}
