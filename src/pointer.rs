//! Trackball behaviour tied to the pointer layer

use core::fmt;

use crate::keycode::{Code, PointerAction};
use crate::keystate::{Duration, Instant, LayerControl};
use crate::layer_state::{Layer, LayerState};

/// Time the auto mouse layer stays on after the last motion or mouse key
pub const AUTO_MOUSE_TIME: Duration = 650;
/// Motion counts needed before the auto mouse layer turns on
pub const AUTO_MOUSE_THRESHOLD: u16 = 10;

const MINIMUM_DEFAULT_DPI: u16 = 400;
const DEFAULT_DPI_CONFIG_STEP: u16 = 200;
const MINIMUM_SNIPING_DPI: u16 = 200;
const SNIPING_DPI_CONFIG_STEP: u16 = 100;

/// Relative motion, `h`/`v` being horizontal and vertical wheel
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionReport {
    pub x: i16,
    pub y: i16,
    pub h: i16,
    pub v: i16,
}

impl MotionReport {
    pub fn moving(x: i16, y: i16) -> Self {
        MotionReport {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerConfig {
    pub pointer_layer: Layer,
    /// Ignore small motion unless the pointer layer is on
    pub pointer_on_pointer_layer_only: bool,
    /// Sniping follows the pointer layer
    pub auto_sniping_on_layer: bool,
    /// Motion at or above this on either axis always passes through
    pub activation_threshold: i16,
    pub default_dpi_steps: u8,
    pub sniping_dpi_steps: u8,
    /// Motion counts per wheel tick while drag-scrolling
    pub dragscroll_buffer: i16,
    pub dragscroll_reverse_y: bool,
}

impl Default for PointerConfig {
    fn default() -> Self {
        PointerConfig {
            pointer_layer: 4,
            pointer_on_pointer_layer_only: false,
            auto_sniping_on_layer: false,
            activation_threshold: 1,
            default_dpi_steps: 16,
            sniping_dpi_steps: 4,
            dragscroll_buffer: 6,
            dragscroll_reverse_y: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerConfigError {
    /// `auto_sniping_on_layer` and `pointer_on_pointer_layer_only` are mutually exclusive
    ConflictingLayerModes,
    NoDpiSteps,
    EmptyDragScrollBuffer,
}

impl fmt::Display for PointerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerConfigError::ConflictingLayerModes => {
                f.write_str("auto sniping and pointer-layer-only motion are mutually exclusive")
            }
            PointerConfigError::NoDpiSteps => f.write_str("DPI step counts must be non-zero"),
            PointerConfigError::EmptyDragScrollBuffer => {
                f.write_str("drag-scroll buffer must be positive")
            }
        }
    }
}

impl PointerConfig {
    pub fn validate(&self) -> Result<(), PointerConfigError> {
        if self.auto_sniping_on_layer && self.pointer_on_pointer_layer_only {
            return Err(PointerConfigError::ConflictingLayerModes);
        }
        if self.default_dpi_steps == 0 || self.sniping_dpi_steps == 0 {
            return Err(PointerConfigError::NoDpiSteps);
        }
        if self.dragscroll_buffer <= 0 {
            return Err(PointerConfigError::EmptyDragScrollBuffer);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct PointerState {
    config: PointerConfig,
    dragscroll: bool,
    sniping: bool,
    default_dpi_step: u8,
    sniping_dpi_step: u8,
    scroll_x: i16,
    scroll_y: i16,
}

impl PointerState {
    pub fn new(config: PointerConfig) -> Self {
        PointerState {
            config,
            dragscroll: false,
            sniping: false,
            default_dpi_step: 0,
            sniping_dpi_step: 0,
            scroll_x: 0,
            scroll_y: 0,
        }
    }

    pub fn config(&self) -> &PointerConfig {
        &self.config
    }

    pub fn dragscroll(&self) -> bool {
        self.dragscroll
    }

    pub fn sniping(&self) -> bool {
        self.sniping
    }

    pub fn set_dragscroll(&mut self, enabled: bool) {
        if self.dragscroll != enabled {
            debug!("dragscroll {}", enabled);
        }
        self.dragscroll = enabled;
        if !enabled {
            self.scroll_x = 0;
            self.scroll_y = 0;
        }
    }

    pub fn set_sniping(&mut self, enabled: bool) {
        if self.sniping != enabled {
            debug!("sniping {}", enabled);
        }
        self.sniping = enabled;
    }

    /// DPI the sensor should run at right now
    pub fn dpi(&self) -> u16 {
        if self.sniping {
            MINIMUM_SNIPING_DPI + self.sniping_dpi_step as u16 * SNIPING_DPI_CONFIG_STEP
        } else {
            MINIMUM_DEFAULT_DPI + self.default_dpi_step as u16 * DEFAULT_DPI_CONFIG_STEP
        }
    }

    /// A pointer key changed state
    pub fn handle(&mut self, action: PointerAction, pressed: bool) {
        match action {
            PointerAction::DpiMod if pressed => {
                self.default_dpi_step =
                    (self.default_dpi_step + 1) % self.config.default_dpi_steps.max(1);
            }
            PointerAction::SnipingDpiMod if pressed => {
                self.sniping_dpi_step =
                    (self.sniping_dpi_step + 1) % self.config.sniping_dpi_steps.max(1);
            }
            PointerAction::DpiMod | PointerAction::SnipingDpiMod => (),
            PointerAction::DragScroll => self.set_dragscroll(pressed),
            PointerAction::Sniping => self.set_sniping(pressed),
        }
    }

    /// Runs whenever the active layers change
    pub fn on_layer_state(&mut self, state: LayerState) {
        let on_pointer_layer = state.cmp(self.config.pointer_layer);
        if self.config.auto_sniping_on_layer {
            self.set_sniping(on_pointer_layer);
        }
        if !on_pointer_layer {
            self.set_dragscroll(false);
            self.set_sniping(false);
        }
    }

    /// Filters one sensor report before it goes to the host
    pub fn task(&mut self, mut report: MotionReport, state: LayerState) -> MotionReport {
        let threshold = self.config.activation_threshold.unsigned_abs();
        if self.config.pointer_on_pointer_layer_only
            && !state.cmp(self.config.pointer_layer)
            && report.x.unsigned_abs() < threshold
            && report.y.unsigned_abs() < threshold
        {
            report.x = 0;
            report.y = 0;
            return report;
        }

        if self.dragscroll {
            let buffer = self.config.dragscroll_buffer.max(1);
            self.scroll_x = self.scroll_x.saturating_add(report.x);
            self.scroll_y = self.scroll_y.saturating_add(report.y);
            let h = self.scroll_x / buffer;
            let v = self.scroll_y / buffer;
            self.scroll_x -= h * buffer;
            self.scroll_y -= v * buffer;

            let v = if self.config.dragscroll_reverse_y { v } else { -v };
            report.h = report.h.saturating_add(h);
            report.v = report.v.saturating_add(v);
            report.x = 0;
            report.y = 0;
        }
        report
    }
}

/// Turns a layer on while the trackball is moving
#[derive(Debug)]
pub struct AutoMouse {
    layer: Layer,
    enabled: bool,
    /// Whether the layer is on because of us
    active: bool,
    motion: u16,
    mouse_keys_held: u8,
    last_activity: Instant,
    timeout: Duration,
    threshold: u16,
}

impl AutoMouse {
    pub fn new(layer: Layer, enabled: bool) -> Self {
        AutoMouse {
            layer,
            enabled,
            active: false,
            motion: 0,
            mouse_keys_held: 0,
            last_activity: 0,
            timeout: AUTO_MOUSE_TIME,
            threshold: AUTO_MOUSE_THRESHOLD,
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn set_layer<K: LayerControl>(&mut self, layer: Layer, keymap: &mut K) {
        if layer != self.layer {
            self.release(keymap);
            self.layer = layer;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled<K: LayerControl>(&mut self, enabled: bool, keymap: &mut K) {
        if !enabled {
            self.release(keymap);
        }
        self.enabled = enabled;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn on_motion<K: LayerControl>(
        &mut self,
        report: &MotionReport,
        now: Instant,
        keymap: &mut K,
    ) {
        if !self.enabled || (report.x == 0 && report.y == 0) {
            return;
        }
        self.last_activity = now;
        if self.active {
            return;
        }
        // Held on by a key, not ours to manage
        if keymap.layer_state().cmp(self.layer) {
            self.motion = 0;
            return;
        }
        self.motion = self
            .motion
            .saturating_add(report.x.unsigned_abs())
            .saturating_add(report.y.unsigned_abs());
        if self.motion > self.threshold && keymap.activate_layer(self.layer) {
            debug!("auto mouse layer {} on", self.layer);
            self.active = true;
            self.motion = 0;
        }
    }

    /// A code was pressed or released
    pub fn on_key<K: LayerControl>(
        &mut self,
        code: &Code,
        pressed: bool,
        now: Instant,
        keymap: &mut K,
    ) {
        if !self.active {
            return;
        }
        if code.is_mouse() {
            if pressed {
                self.mouse_keys_held = self.mouse_keys_held.saturating_add(1);
            } else {
                self.mouse_keys_held = self.mouse_keys_held.saturating_sub(1);
            }
            self.last_activity = now;
        } else if pressed && !code.is_modifier() {
            self.release(keymap);
        }
    }

    pub fn tick<K: LayerControl>(&mut self, now: Instant, keymap: &mut K) {
        if !self.active {
            return;
        }
        if !keymap.layer_state().cmp(self.layer) {
            // Turned off from elsewhere, e.g. a layer key on it was released
            self.release(keymap);
            return;
        }
        // A key holding the layer counts like a held mouse button
        if keymap.layer_held(self.layer) {
            self.last_activity = now;
            return;
        }
        if self.mouse_keys_held == 0 && now >= self.last_activity.saturating_add(self.timeout) {
            self.release(keymap);
        }
    }

    fn release<K: LayerControl>(&mut self, keymap: &mut K) {
        if self.active {
            debug!("auto mouse layer {} off", self.layer);
            if !keymap.layer_held(self.layer) {
                keymap.deactivate_layer(self.layer);
            }
        }
        self.active = false;
        self.motion = 0;
        self.mouse_keys_held = 0;
    }
}
