use foundation::math::Vec2;
use foundation::time::Time;
use runtime::{EventBus, Ticker};

use crate::events::{Effect, InputEvent};
use crate::state::{ProjectionState, ViewMode};

/// Pixel-to-degree gain for drag and auto-rotation, divided by the
/// current scale so a zoomed-in globe turns more gently.
pub const ROTATION_SENSITIVITY: f64 = 60.0;

/// Floor for the zoom gesture factor. Factors below it clamp to it; the
/// gesture's own accumulated factor is corrected too, so repeated
/// under-floor input cannot drift the baseline.
pub const ZOOM_SENSITIVITY: f64 = 0.5;

/// Interval between auto-rotation steps, seconds.
pub const AUTO_ROTATE_INTERVAL_S: f64 = 1.0 / 60.0;

/// Owns the live [`ProjectionState`] and mediates every mutation of it.
///
/// Rotation has exactly one driver at a time, in strict priority order:
/// an active drag beats the auto-rotate ticker. DragStart cancels the
/// ticker synchronously, before the first DragMove is applied; DragEnd
/// restarts it when eligible. Zoom only touches the scale and may run
/// concurrently with either driver.
#[derive(Debug)]
pub struct InteractionController {
    state: ProjectionState,
    default_scale: f64,
    /// Scale at the last render configure; zoom factors are relative to it.
    initial_scale: f64,
    gesture_factor: f64,
    rotate_ticker: Ticker,
    dragging: bool,
    detail_active: bool,
}

impl InteractionController {
    pub fn new(state: ProjectionState, default_scale: f64) -> Self {
        let initial_scale = state.zoom_scale.unwrap_or(default_scale);
        Self {
            state,
            default_scale,
            initial_scale,
            gesture_factor: 1.0,
            rotate_ticker: Ticker::new(AUTO_ROTATE_INTERVAL_S),
            dragging: false,
            detail_active: false,
        }
    }

    pub fn state(&self) -> &ProjectionState {
        &self.state
    }

    pub fn mode(&self) -> ViewMode {
        self.state.mode
    }

    /// Effective scale: the user's zoom when set, else the mode default.
    pub fn current_scale(&self) -> f64 {
        self.state.zoom_scale.unwrap_or(self.default_scale)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn detail_active(&self) -> bool {
        self.detail_active
    }

    pub fn auto_rotate_active(&self) -> bool {
        self.rotate_ticker.is_active()
    }

    /// The zoom gesture's accumulated factor after clamp correction. The
    /// host feeds this back into its gesture recognizer so an under-floor
    /// gesture cannot drift the baseline for the next one.
    pub fn gesture_factor(&self) -> f64 {
        self.gesture_factor
    }

    /// Generation counter of the auto-rotate ticker, for tests asserting
    /// stop-before-replace ordering.
    pub fn auto_rotate_generation(&self) -> u64 {
        self.rotate_ticker.generation()
    }

    /// Called at the start of every full render pass with the
    /// viewport-derived default scale for the current mode. Re-bases zoom
    /// gestures on the effective scale, like the source rebuilding its
    /// projection per pass.
    pub fn begin_render_pass(&mut self, default_scale: f64) {
        self.default_scale = default_scale;
        self.initial_scale = self.current_scale();
        self.gesture_factor = 1.0;
    }

    /// Applies one input event. Returned effects tell the host what to do;
    /// all state mutation already happened when this returns.
    pub fn handle(&mut self, event: InputEvent, now: Time, bus: &mut EventBus) -> Vec<Effect> {
        match event {
            InputEvent::Hover { code } => {
                if self.detail_active {
                    return Vec::new();
                }
                vec![Effect::TooltipShow { code }]
            }
            InputEvent::Unhover => {
                if self.detail_active {
                    return Vec::new();
                }
                vec![Effect::TooltipHide]
            }
            InputEvent::Click { code, name } => {
                vec![Effect::DetailOpen { code, name }]
            }
            InputEvent::DragStart => {
                // Ordering guarantee: the ticker is dead before any
                // DragMove can rotate.
                self.stop_auto_rotate(bus);
                self.dragging = true;
                bus.emit("drag", "start");
                Vec::new()
            }
            InputEvent::DragMove { dx, dy } => {
                if !self.dragging || self.state.mode == ViewMode::TwoD {
                    return Vec::new();
                }
                let gain = ROTATION_SENSITIVITY / self.current_scale();
                self.state.rotation[0] += dx * gain;
                self.state.rotation[1] -= dy * gain;
                vec![Effect::Repaint]
            }
            InputEvent::DragEnd => {
                self.dragging = false;
                bus.emit("drag", "end");
                self.start_auto_rotate(now, bus);
                Vec::new()
            }
            InputEvent::Zoom { factor } => {
                let clamped = factor.max(ZOOM_SENSITIVITY);
                if clamped != factor {
                    bus.emit("zoom", "factor clamped to floor");
                }
                self.gesture_factor = clamped;
                self.state.zoom_scale = Some(self.initial_scale * clamped);
                vec![Effect::Repaint]
            }
            InputEvent::ResizeSettled { width, height } => {
                // The surface is rebuilt; a stale ticker must not keep
                // mutating a disposed projector.
                self.stop_auto_rotate(bus);
                self.state.center = Vec2::new(width / 2.0, height / 2.0);
                // Rotation survives; so does an explicit user zoom. A None
                // zoom is recomputed from the new viewport by the next pass.
                vec![Effect::RebuildSurface { width, height }]
            }
        }
    }

    /// Drives the auto-rotate ticker. Returns true when the rotation
    /// changed and a repaint is due.
    pub fn advance(&mut self, now: Time) -> bool {
        let ticks = self.rotate_ticker.poll(now);
        if ticks == 0 {
            return false;
        }
        let gain = ROTATION_SENSITIVITY / self.current_scale();
        self.state.rotation[0] -= ticks as f64 * gain;
        true
    }

    /// Starts auto-rotation when eligible: 3d mode, no drag, no detail
    /// selection. Starting while active restarts the schedule (the ticker
    /// enforces the single-live-schedule invariant).
    pub fn start_auto_rotate(&mut self, now: Time, bus: &mut EventBus) {
        if self.state.mode != ViewMode::ThreeD || self.dragging || self.detail_active {
            return;
        }
        self.rotate_ticker.start(now);
        bus.emit("rotate-timer", "started");
    }

    pub fn stop_auto_rotate(&mut self, bus: &mut EventBus) {
        if self.rotate_ticker.is_active() {
            self.rotate_ticker.cancel();
            bus.emit("rotate-timer", "stopped");
        }
    }

    /// Switches view mode: zoom resets to the mode default and the
    /// rotation ticker stops until the next render pass restarts it.
    pub fn set_mode(&mut self, mode: ViewMode, bus: &mut EventBus) {
        self.stop_auto_rotate(bus);
        self.state.mode = mode;
        self.state.zoom_scale = None;
        self.gesture_factor = 1.0;
        bus.emit("view-mode", mode.as_str());
    }

    pub fn toggle_mode(&mut self, bus: &mut EventBus) -> ViewMode {
        let next = self.state.mode.toggled();
        self.set_mode(next, bus);
        next
    }

    /// Entering or leaving detail selection: suppresses hover and
    /// rotation, and resets zoom like a mode toggle.
    pub fn set_detail_active(&mut self, active: bool, bus: &mut EventBus) {
        self.stop_auto_rotate(bus);
        self.detail_active = active;
        self.state.zoom_scale = None;
        self.gesture_factor = 1.0;
        bus.emit("detail", if active { "open" } else { "closed" });
    }

    /// Viewport-derived reconfiguration (detail layout changes, resizes):
    /// new center and default scale, everything else preserved.
    pub fn reconfigure(&mut self, default_scale: f64, center: Vec2) {
        self.default_scale = default_scale;
        self.state.center = center;
    }
}
