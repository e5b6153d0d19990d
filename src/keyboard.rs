//! One scan tick of the whole keyboard: keymap, trackball and Caps Word together

use core::fmt;

use heapless::Vec;

use crate::caps_word::CapsWord;
use crate::charybdis::{self, KeymapConfig, KeymapT, LayerId, SIZE};
use crate::config::{DebugConfig, TimingConfig};
use crate::keycode::{Code, Keyboard, RgbAction, SystemAction};
use crate::keystate::{Instant, KeymapError, LayerControl};
use crate::pointer::{AutoMouse, MotionReport, PointerConfig, PointerConfigError, PointerState};
use crate::report::Report;

/// Requests for the board crate, raised on the tick they happen
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Bootloader,
    EepromClear,
    Rgb(RgbAction),
    /// The sensor should switch to this DPI
    Dpi(u16),
}

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub keymap: KeymapConfig,
    pub timing: TimingConfig,
    pub pointer: PointerConfig,
    pub debug: DebugConfig,
    pub auto_mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keymap: KeymapConfig::default(),
            timing: TimingConfig::default(),
            pointer: PointerConfig {
                pointer_layer: LayerId::Pointer.layer(),
                ..Default::default()
            },
            debug: DebugConfig::default(),
            auto_mouse: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    Keymap(KeymapError),
    Pointer(PointerConfigError),
}

impl From<KeymapError> for Error {
    fn from(error: KeymapError) -> Self {
        Error::Keymap(error)
    }
}

impl From<PointerConfigError> for Error {
    fn from(error: PointerConfigError) -> Self {
        Error::Pointer(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Keymap(error) => write!(f, "keymap: {}", error),
            Error::Pointer(error) => write!(f, "pointer: {}", error),
        }
    }
}

#[derive(Debug)]
pub struct Output<const ROLLOVER: usize> {
    pub report: Report<ROLLOVER>,
    pub motion: MotionReport,
    pub events: Vec<Event, 8>,
}

#[derive(Debug)]
pub struct Charybdis<const ROLLOVER: usize> {
    keymap: KeymapT,
    pointer: PointerState,
    auto_mouse: AutoMouse,
    caps_word: CapsWord,
    /// Codes held on the previous tick
    held: Vec<Code, ROLLOVER>,
    debug: DebugConfig,
}

impl<const ROLLOVER: usize> Charybdis<ROLLOVER> {
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.pointer.validate()?;
        let mut keymap = charybdis::build(&config.keymap, &config.timing);
        keymap.validate()?;
        keymap.debug = config.debug;
        if config.debug.enable {
            info!(
                "debug matrix {} keyboard {} mouse {}",
                config.debug.matrix, config.debug.keyboard, config.debug.mouse
            );
        }

        Ok(Charybdis {
            keymap,
            pointer: PointerState::new(config.pointer),
            auto_mouse: AutoMouse::new(config.pointer.pointer_layer, config.auto_mouse),
            caps_word: CapsWord::default(),
            held: Vec::new(),
            debug: config.debug,
        })
    }

    pub fn keymap(&self) -> &KeymapT {
        &self.keymap
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn auto_mouse(&self) -> &AutoMouse {
        &self.auto_mouse
    }

    pub fn caps_word(&self) -> &CapsWord {
        &self.caps_word
    }

    pub fn set_auto_mouse(&mut self, enabled: bool) {
        self.auto_mouse.set_enabled(enabled, &mut self.keymap);
    }

    pub fn tick(
        &mut self,
        presses: &[bool; SIZE],
        motion: MotionReport,
        now: Instant,
    ) -> Output<ROLLOVER> {
        let mut held: Vec<Code, ROLLOVER> = Vec::new();
        self.keymap.process(presses, &mut held, now);
        if core::mem::take(&mut self.keymap.flags.rollover) {
            warn!("more than {} keys held", ROLLOVER);
        }
        if core::mem::take(&mut self.keymap.flags.nop_pressed) {
            let nop = Code::Key(Keyboard::NoEventIndicated);
            self.auto_mouse.on_key(&nop, true, now, &mut self.keymap);
        }

        let dpi = self.pointer.dpi();
        let mut events = Vec::new();

        let pressed: Vec<Code, ROLLOVER> = held
            .iter()
            .filter(|code| !self.held.contains(code))
            .copied()
            .collect();
        let released: Vec<Code, ROLLOVER> = self
            .held
            .iter()
            .filter(|code| !held.contains(code))
            .copied()
            .collect();
        for code in pressed.iter() {
            self.on_press(code, now, &mut events);
        }
        for code in released.iter() {
            self.on_release(code, now);
        }

        self.auto_mouse.on_motion(&motion, now, &mut self.keymap);
        self.auto_mouse.tick(now, &mut self.keymap);
        if let Some(state) = self.keymap.take_layer_change() {
            debug!("layers {}", state.0);
            self.pointer.on_layer_state(state);
        }
        let motion = self.pointer.task(motion, self.keymap.layer_state());
        if self.debug.mouse() && !motion.is_empty() {
            debug!(
                "mouse: x {} y {} h {} v {}",
                motion.x, motion.y, motion.h, motion.v
            );
        }

        if self.pointer.dpi() != dpi {
            push_event(&mut events, Event::Dpi(self.pointer.dpi()));
        }

        self.caps_word.tick(now);
        let mut report = Report::from_codes(&held);
        self.caps_word.apply(&mut report);
        if self.debug.keyboard() && (!pressed.is_empty() || !released.is_empty()) {
            debug!("keyboard: {} keys, buttons {}", report.keys.len(), report.buttons);
        }

        self.held = held;
        Output {
            report,
            motion,
            events,
        }
    }

    fn on_press(&mut self, code: &Code, now: Instant, events: &mut Vec<Event, 8>) {
        match *code {
            Code::Pointer(action) => self.pointer.handle(action, true),
            Code::Rgb(action) => push_event(events, Event::Rgb(action)),
            Code::System(SystemAction::Bootloader) => {
                info!("bootloader requested");
                push_event(events, Event::Bootloader)
            }
            Code::System(SystemAction::EepromClear) => {
                info!("configuration reset requested");
                push_event(events, Event::EepromClear)
            }
            Code::System(SystemAction::CapsWordToggle) => self.caps_word.toggle(now),
            _ => (),
        }
        self.caps_word.on_press(code, now);
        self.auto_mouse.on_key(code, true, now, &mut self.keymap);
    }

    fn on_release(&mut self, code: &Code, now: Instant) {
        if let Code::Pointer(action) = *code {
            self.pointer.handle(action, false);
        }
        self.auto_mouse.on_key(code, false, now, &mut self.keymap);
    }
}

fn push_event(events: &mut Vec<Event, 8>, event: Event) {
    if events.push(event).is_err() {
        warn!("event dropped");
    }
}
