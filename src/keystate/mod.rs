use core::fmt;

use heapless::{Deque, Vec};

pub use crate::keycode::{
    Code, Keyboard, Media, MouseButton, PointerAction, RgbAction, SystemAction,
};
pub use crate::layer_state::{Layer, LayerState};

use crate::config::DebugConfig;

pub mod button;
pub mod layer;
pub mod longpress;
pub mod modtap;
/// Shorthand for `use keystate::KeyShorthand::*` and QMK-style key names
pub mod prelude;

/// Shared state
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Shared;
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct KeyState<State> {
    state: State,
    shared: Shared,
}

impl<State> KeyState<State> {
    fn new(state: State) -> Self {
        KeyState {
            state,
            shared: Shared,
        }
    }

    /// Move to the next state, carrying the shared part along
    fn to<Next>(&self, state: Next) -> KeyState<Next> {
        KeyState {
            state,
            shared: self.shared,
        }
    }
}

/// Something which is like a key (button, layer, mod-tap etc)
trait Keyish {
    /// Whether this can move on to the current layer, or the MCU go to sleep (if all keys are
    /// finished)
    fn is_finished(&self) -> bool;
}

pub type Duration = u64;
pub type Instant = u64;

/// Matrix changes held back while a dual-role key is undecided
const PENDING: usize = 16;

/// One entry of a keymap table
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KeyShorthand {
    Kb(Keyboard),
    /// Shifted symbol, e.g. `{` is `Sh(LeftBrace)`
    Sh(Keyboard),
    Md(Media),
    Ms(MouseButton),
    Pt(PointerAction),
    Rgb(RgbAction),
    Sys(SystemAction),
    /// Falls through to the next active layer below
    Tr,
    /// Momentary layer
    La(Layer),
    /// Hold for the first (a modifier), tap for the second
    MT(Keyboard, Keyboard),
    /// Hold for the layer, tap for the key
    LT(Layer, Keyboard),
    /// Nothing on tap, the action once on a long press
    LP(SystemAction),
}

impl KeyShorthand {
    /// The layer this key switches to, if it switches layers at all
    pub fn layer(&self) -> Option<Layer> {
        match self {
            KeyShorthand::La(layer) | KeyShorthand::LT(layer, _) => Some(*layer),
            _ => None,
        }
    }

    /// The code of a plain key
    fn code(&self) -> Option<Code> {
        match *self {
            KeyShorthand::Kb(key) => Some(Code::Key(key)),
            KeyShorthand::Sh(key) => Some(Code::Shifted(key)),
            KeyShorthand::Md(media) => Some(Code::Media(media)),
            KeyShorthand::Ms(button) => Some(Code::Mouse(button)),
            KeyShorthand::Pt(action) => Some(Code::Pointer(action)),
            KeyShorthand::Rgb(action) => Some(Code::Rgb(action)),
            KeyShorthand::Sys(action) => Some(Code::System(action)),
            _ => None,
        }
    }
}

/// Actual keys containing key-state
#[derive(Debug, PartialEq, Eq)]
enum Key {
    Transparent,
    Button(button::ButtonState),
    Layer(layer::MomentaryState),
    ModTap(modtap::ModTapState<Keyboard, Keyboard>),
    LayerTap(modtap::ModTapState<Layer, Keyboard>),
    LongPress(longpress::LongPressState),
}
impl Key {
    fn new(key: KeyShorthand) -> Self {
        match key {
            KeyShorthand::Tr => Key::Transparent,
            KeyShorthand::La(layer) => Key::Layer(layer::MomentaryState::new(layer)),
            KeyShorthand::MT(mod_, tap) => Key::ModTap(modtap::ModTapState::new(mod_, tap)),
            KeyShorthand::LT(layer, tap) => Key::LayerTap(modtap::ModTapState::new(layer, tap)),
            KeyShorthand::LP(action) => Key::LongPress(longpress::LongPressState::new(action)),
            plain => match plain.code() {
                Some(code) => Key::Button(button::ButtonState::new(code)),
                None => Key::Transparent,
            },
        }
    }

    fn layer(&self) -> Option<Layer> {
        match self {
            Key::Layer(state) => Some(state.layer()),
            Key::LayerTap(state) => Some(state.hold()),
            _ => None,
        }
    }

    /// The layer this key is holding on right now
    fn held_layer(&self) -> Option<Layer> {
        match self {
            Key::Layer(state) if !state.is_finished() => Some(state.layer()),
            Key::LayerTap(state) => state.hold_state(),
            _ => None,
        }
    }

    fn is_undecided(&self) -> bool {
        match self {
            Key::ModTap(state) => state.is_undecided(),
            Key::LayerTap(state) => state.is_undecided(),
            _ => false,
        }
    }
}
impl Keyish for Key {
    fn is_finished(&self) -> bool {
        match self {
            Key::Transparent => true,
            Key::Button(button) => button.is_finished(),
            Key::Layer(layer) => layer.is_finished(),
            Key::ModTap(mod_tap) => mod_tap.is_finished(),
            Key::LayerTap(layer_tap) => layer_tap.is_finished(),
            Key::LongPress(long_press) => long_press.is_finished(),
        }
    }
}
#[derive(Debug, PartialEq, Eq)]
struct Keys<const LAYERS: usize> {
    /// Layer the key was resolved on when it was last pressed
    current: Layer,
    /// Matrix state
    physical: bool,
    /// State the key machines see, lagging `physical` while events are queued
    pressed: bool,
    layers: [Key; LAYERS],
    /// Tapping term of each layer's entry
    mod_timeout: [Duration; LAYERS],
}

impl<const LAYERS: usize> Keys<LAYERS> {
    fn entry(&self) -> &Key {
        &self.layers[self.current as usize]
    }

    /// Highest active layer with something other than a transparent entry
    fn resolve(&self, state: LayerState) -> Layer {
        (1..LAYERS)
            .rev()
            .map(|layer| layer as Layer)
            .find(|layer| {
                state.cmp(*layer) && !matches!(self.layers[*layer as usize], Key::Transparent)
            })
            .unwrap_or(0)
    }
}

/// Layer switching for code outside the keymap (e.g. the auto mouse layer)
pub trait LayerControl {
    fn layer_state(&self) -> LayerState;
    /// Returns whether anything changed
    fn activate_layer(&mut self, layer: Layer) -> bool;
    /// Returns whether anything changed
    fn deactivate_layer(&mut self, layer: Layer) -> bool;
    /// Whether a held key keeps `layer` on
    fn layer_held(&self, layer: Layer) -> bool;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    LayerOutOfRange { key: usize, layer: Layer },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::LayerOutOfRange { key, layer } => {
                write!(f, "key {} switches to missing layer {}", key, layer)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct KeymapFlags {
    pub rollover: bool,
    /// A `KC_NO` key went down; it has no code but still counts as typing
    pub nop_pressed: bool,
}
#[derive(Debug)]
pub struct Keymap<const SIZE: usize, const LAYERS: usize> {
    modtap_config: modtap::ModTapConfig,
    layers: Vec<Layer, LAYERS>,
    keys: [Keys<LAYERS>; SIZE],
    /// Key index and new state, oldest first
    pending: Deque<(usize, bool), PENDING>,
    layer_changed: bool,
    pub flags: KeymapFlags,
    pub debug: DebugConfig,
}

impl<const SIZE: usize, const LAYERS: usize> Keymap<SIZE, LAYERS> {
    pub fn new(
        keymap: [[KeyShorthand; SIZE]; LAYERS],
        mod_timeout: Duration,
        tap_release: Duration,
        tap_repeat: Duration,
    ) -> Self {
        Self::with_tapping_term(
            keymap,
            modtap::ModTapConfig {
                mod_timeout,
                tap_release,
                tap_repeat,
            },
            |_, config| config.mod_timeout,
        )
    }

    /// Like [`Keymap::new`], with the hold threshold of each key chosen by `tapping_term`
    pub fn with_tapping_term(
        keymap: [[KeyShorthand; SIZE]; LAYERS],
        modtap_config: modtap::ModTapConfig,
        tapping_term: impl Fn(&KeyShorthand, &modtap::ModTapConfig) -> Duration,
    ) -> Self {
        let keys: [Keys<LAYERS>; SIZE] = core::array::from_fn(|key| Keys {
            current: 0,
            physical: false,
            pressed: false,
            layers: core::array::from_fn(|layer| Key::new(keymap[layer][key])),
            mod_timeout: core::array::from_fn(|layer| {
                tapping_term(&keymap[layer][key], &modtap_config)
            }),
        });
        Keymap {
            modtap_config,
            keys,
            layers: Default::default(),
            pending: Deque::new(),
            layer_changed: false,
            flags: Default::default(),
            debug: DebugConfig::quiet(),
        }
    }

    /// Checks every layer key points at a layer of this keymap
    pub fn validate(&self) -> Result<(), KeymapError> {
        for (index, key) in self.keys.iter().enumerate() {
            for entry in key.layers.iter() {
                match entry.layer() {
                    Some(layer) if layer as usize >= LAYERS => {
                        return Err(KeymapError::LayerOutOfRange { key: index, layer })
                    }
                    _ => (),
                }
            }
        }
        Ok(())
    }

    /// Hold threshold of the key at `index` on `layer`
    pub fn tapping_term(&self, index: usize, layer: Layer) -> Option<Duration> {
        self.keys
            .get(index)
            .and_then(|key| key.mod_timeout.get(layer as usize))
            .copied()
    }

    /// The active layers changed since the last call
    pub fn take_layer_change(&mut self) -> Option<LayerState> {
        if core::mem::take(&mut self.layer_changed) {
            Some(self.layer_state())
        } else {
            None
        }
    }

    /// Whether some dual-role key is still waiting to become a tap or a hold
    fn undecided(&self) -> bool {
        self.keys.iter().any(|key| key.entry().is_undecided())
    }

    /// Moves matrix changes into the key machines' view. While a dual-role key is undecided
    /// other changes are queued, then replayed one per call in arrival order once it has
    /// decided, so they resolve against the layers it leaves behind.
    fn feed(&mut self, keypresses: &[bool; SIZE]) {
        if !self.undecided() {
            if let Some((index, pressed)) = self.pending.pop_front() {
                self.keys[index].pressed = pressed;
            }
        }
        let hold_back = self.undecided() || !self.pending.is_empty();

        let matrix_debug = self.debug.matrix();
        for (index, (key, pressed)) in self.keys.iter_mut().zip(keypresses).enumerate() {
            if key.physical == *pressed {
                continue;
            }
            if matrix_debug {
                debug!("matrix: key {} pressed {}", index, *pressed);
            }
            key.physical = *pressed;

            // The undecided key's own release is what decides it
            if !hold_back || key.entry().is_undecided() {
                key.pressed = *pressed;
            } else if self.pending.push_back((index, *pressed)).is_err() {
                warn!("key queue full, key {} not held back", index);
                key.pressed = *pressed;
            }
        }
    }

    pub fn process<const ROLLOVER: usize>(
        &mut self,
        keypresses: &[bool; SIZE],
        keys: &mut Vec<Code, ROLLOVER>,
        now: Instant,
    ) {
        self.feed(keypresses);

        for key in self.keys.iter_mut() {
            let pressed = key.pressed;
            if key.layers[key.current as usize].is_finished() {
                key.current = key.resolve(LayerState::from_layers(&self.layers));
            };
            let current = key.current as usize;
            let config = modtap::ModTapConfig {
                mod_timeout: key.mod_timeout[current],
                ..self.modtap_config
            };

            let code = match &mut key.layers[current] {
                Key::Transparent => None,
                Key::Button(state) => {
                    let was_pressed = !state.is_finished();
                    state.button_transition(pressed);
                    let code = state.get_code();
                    if !was_pressed && code.map_or(false, |code| code.is_nop()) {
                        self.flags.nop_pressed = true;
                    }
                    code
                }
                Key::Layer(state) => {
                    if state.layer_transition(pressed, &mut self.layers) {
                        self.layer_changed = true;
                    }
                    None
                }
                Key::ModTap(state) => {
                    state.modtap_transition(pressed, now, &config);
                    state.get_key().map(Code::Key)
                }
                Key::LayerTap(state) => {
                    let was_held = state.hold_state().is_some();
                    state.modtap_transition(pressed, now, &config);
                    let changed = match (was_held, state.hold_state()) {
                        (false, Some(layer)) => layer::activate(&mut self.layers, layer),
                        (true, None) => layer::deactivate(&mut self.layers, state.hold()),
                        _ => false,
                    };
                    self.layer_changed |= changed;
                    state.tap_state().map(Code::Key)
                }
                Key::LongPress(state) => {
                    state.longpress_transition(pressed, now, config.mod_timeout);
                    state.get_action().map(Code::System)
                }
            };

            if let Some(code) = code.filter(|code| !code.is_nop()) {
                if keys.push(code).is_err() {
                    self.flags.rollover = true;
                }
            }
        }
    }
}

impl<const SIZE: usize, const LAYERS: usize> LayerControl for Keymap<SIZE, LAYERS> {
    fn layer_state(&self) -> LayerState {
        LayerState::from_layers(&self.layers)
    }

    fn activate_layer(&mut self, layer: Layer) -> bool {
        let changed = (layer as usize) < LAYERS && layer::activate(&mut self.layers, layer);
        self.layer_changed |= changed;
        changed
    }

    fn deactivate_layer(&mut self, layer: Layer) -> bool {
        let changed = layer::deactivate(&mut self.layers, layer);
        self.layer_changed |= changed;
        changed
    }

    fn layer_held(&self, layer: Layer) -> bool {
        self.keys
            .iter()
            .any(|key| key.entry().held_layer() == Some(layer))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::prelude::*;
    use super::Key;
    use super::Keymap;
    use super::Keys;
    use super::{Code, KeymapError, LayerControl, LayerState};

    fn press<const N: usize>(
        keymap: &mut Keymap<{ N }, 2>,
        presses: [bool; N],
        now: u64,
    ) -> heapless::Vec<Code, 4> {
        let mut keys = heapless::Vec::new();
        keymap.process(&presses, &mut keys, now);
        keys
    }

    #[test]
    fn simple_keyboard() {
        let mut keymap: Keymap<3, 2> = Keymap::new(
            [[Kb(A), La(1), MT(M, T)], [Kb(B), Tr, Tr]],
            2,
            4,
            6,
        );
        let mut keys: heapless::Vec<_, 2> = Default::default();
        assert_eq!(keys, []);

        keymap.process(&[false, false, false], &mut keys, 1);
        assert_eq!(keys, []);
        assert_eq!(
            keymap.keys[0],
            Keys {
                current: 0,
                physical: false,
                pressed: false,
                layers: [Key::new(Kb(A)), Key::new(Kb(B))],
                mod_timeout: [2, 2],
            }
        );

        keys.clear();
        keymap.process(&[true, false, false], &mut keys, 2);
        assert_eq!(keys, [Code::Key(A)]);

        keys.clear();
        keymap.process(&[true, true, false], &mut keys, 3);
        assert_eq!(keys, [Code::Key(A)]);

        keys.clear();
        keymap.process(&[false, true, false], &mut keys, 4);
        assert_eq!(keys, []);

        keys.clear();
        keymap.process(&[true, true, false], &mut keys, 5);
        assert_eq!(keys, [Code::Key(B)]);
        assert_eq!(keymap.keys[0].current, 1);

        keys.clear();
        keymap.process(&[true, false, true], &mut keys, 6);
        assert_eq!(keys, [Code::Key(B)]);

        keys.clear();
        keymap.process(&[true, false, true], &mut keys, 7);
        assert_eq!(keys, [Code::Key(B)]);

        keys.clear();
        keymap.process(&[true, false, true], &mut keys, 8);
        assert_eq!(keys, [Code::Key(B), Code::Key(M)]);
    }

    #[test]
    fn transparent_falls_through() {
        let mut keymap: Keymap<2, 2> = Keymap::new([[La(1), Kb(A)], [Tr, Tr]], 2, 4, 6);
        assert_eq!(press(&mut keymap, [true, false], 0), []);
        assert_eq!(press(&mut keymap, [true, true], 1), [Code::Key(A)]);
        assert_eq!(keymap.keys[1].current, 0);
    }

    #[test]
    fn key_keeps_layer_until_released() {
        let mut keymap: Keymap<2, 2> = Keymap::new([[La(1), Kb(A)], [Tr, Kb(B)]], 2, 4, 6);
        press(&mut keymap, [true, false], 0);
        assert_eq!(press(&mut keymap, [true, true], 1), [Code::Key(B)]);
        // Layer released while B is still down
        assert_eq!(press(&mut keymap, [false, true], 2), [Code::Key(B)]);
        assert_eq!(press(&mut keymap, [false, false], 3), []);
        assert_eq!(press(&mut keymap, [false, true], 4), [Code::Key(A)]);
    }

    #[test]
    fn layer_tap() {
        let mut keymap: Keymap<2, 2> =
            Keymap::new([[LT(1, Space), Kb(A)], [Tr, Kb(B)]], 2, 4, 6);

        // Tap
        assert_eq!(press(&mut keymap, [true, false], 0), []);
        assert_eq!(press(&mut keymap, [false, false], 1), [Code::Key(Space)]);
        assert_eq!(keymap.take_layer_change(), None);

        // Hold, after the repeat window
        assert_eq!(press(&mut keymap, [true, false], 10), []);
        assert_eq!(press(&mut keymap, [true, false], 12), []);
        assert_eq!(keymap.take_layer_change(), Some(LayerState::from_layers(&[1])));
        assert_eq!(press(&mut keymap, [true, true], 13), [Code::Key(B)]);
        assert_eq!(press(&mut keymap, [false, false], 14), []);
        assert_eq!(keymap.take_layer_change(), Some(LayerState::default()));
        assert_eq!(press(&mut keymap, [false, true], 15), [Code::Key(A)]);
    }

    #[test]
    fn roll_off_layer_tap_keeps_order() {
        let mut keymap: Keymap<2, 2> =
            Keymap::new([[LT(1, Space), Kb(A)], [Tr, Kb(B)]], 5, 4, 6);
        assert_eq!(press(&mut keymap, [true, false], 0), []);
        // Held back until the layer tap decides
        assert_eq!(press(&mut keymap, [true, true], 1), []);
        assert_eq!(press(&mut keymap, [false, true], 2), [Code::Key(Space)]);
        assert_eq!(
            press(&mut keymap, [false, true], 3),
            [Code::Key(Space), Code::Key(A)]
        );
        assert_eq!(keymap.take_layer_change(), None);
    }

    #[test]
    fn held_back_press_uses_the_held_layer() {
        let mut keymap: Keymap<2, 2> =
            Keymap::new([[LT(1, Space), Kb(A)], [Tr, Kb(B)]], 5, 4, 6);
        assert_eq!(press(&mut keymap, [true, false], 0), []);
        assert_eq!(press(&mut keymap, [true, true], 1), []);
        assert_eq!(press(&mut keymap, [true, true], 4), []);
        assert_eq!(press(&mut keymap, [true, true], 5), []);
        assert!(keymap.layer_state().cmp(1));
        assert_eq!(press(&mut keymap, [true, true], 6), [Code::Key(B)]);
        assert_eq!(press(&mut keymap, [false, false], 7), []);
        assert!(!keymap.layer_state().cmp(1));
    }

    #[test]
    fn held_back_events_replay_one_per_scan() {
        let mut keymap: Keymap<3, 2> =
            Keymap::new([[MT(LeftGUI, A), Kb(B), Kb(C)], [Tr, Tr, Tr]], 5, 4, 6);
        press(&mut keymap, [true, false, false], 0);
        press(&mut keymap, [true, true, false], 1);
        press(&mut keymap, [true, true, true], 2);
        press(&mut keymap, [true, false, true], 3);
        assert_eq!(press(&mut keymap, [false, false, true], 4), [Code::Key(A)]);
        assert_eq!(
            press(&mut keymap, [false, false, true], 5),
            [Code::Key(A), Code::Key(B)]
        );
        assert_eq!(
            press(&mut keymap, [false, false, true], 6),
            [Code::Key(A), Code::Key(B), Code::Key(C)]
        );
        assert_eq!(
            press(&mut keymap, [false, false, true], 7),
            [Code::Key(A), Code::Key(C)]
        );
        // Queue drained, changes apply straight away again
        assert_eq!(press(&mut keymap, [false, false, false], 20), []);
    }

    #[test]
    fn held_layers() {
        let mut keymap: Keymap<2, 2> = Keymap::new([[La(1), LT(1, A)], [Tr, Tr]], 2, 4, 6);
        press(&mut keymap, [true, false], 0);
        assert!(keymap.layer_held(1));
        assert!(!keymap.layer_held(0));
        press(&mut keymap, [false, false], 1);
        assert!(!keymap.layer_held(1));

        // Undecided is not held
        press(&mut keymap, [false, true], 2);
        assert!(!keymap.layer_held(1));
        press(&mut keymap, [false, true], 4);
        assert!(keymap.layer_held(1));
        press(&mut keymap, [false, false], 5);
        assert!(!keymap.layer_held(1));
    }

    #[test]
    fn long_press_fires_once() {
        let mut keymap: Keymap<1, 2> =
            Keymap::new([[LP(SystemAction::Bootloader)], [Tr]], 3, 4, 6);
        assert_eq!(press(&mut keymap, [true], 0), []);
        assert_eq!(press(&mut keymap, [true], 2), []);
        assert_eq!(
            press(&mut keymap, [true], 3),
            [Code::System(SystemAction::Bootloader)]
        );
        assert_eq!(press(&mut keymap, [true], 4), []);
        assert_eq!(press(&mut keymap, [false], 5), []);

        // Short press does nothing
        assert_eq!(press(&mut keymap, [true], 10), []);
        assert_eq!(press(&mut keymap, [false], 11), []);
        assert_eq!(press(&mut keymap, [false], 20), []);
    }

    #[test]
    fn nop_is_silent() {
        let mut keymap: Keymap<2, 2> = Keymap::new([[XXXXXXX, Sh(Keyboard1)], [Tr, Tr]], 2, 4, 6);
        assert_eq!(
            press(&mut keymap, [true, true], 0),
            [Code::Shifted(Keyboard1)]
        );
        assert!(core::mem::take(&mut keymap.flags.nop_pressed));
        // Only the press is flagged
        assert_eq!(
            press(&mut keymap, [true, true], 1),
            [Code::Shifted(Keyboard1)]
        );
        assert!(!keymap.flags.nop_pressed);
    }

    #[test]
    fn external_layer_control() {
        let mut keymap: Keymap<1, 2> = Keymap::new([[Kb(A)], [Kb(B)]], 2, 4, 6);
        assert!(keymap.activate_layer(1));
        assert!(!keymap.activate_layer(1));
        assert!(!keymap.activate_layer(7));
        assert!(keymap.layer_state().cmp(1));
        assert_eq!(press(&mut keymap, [true], 0), [Code::Key(B)]);
        assert!(keymap.deactivate_layer(1));
        assert!(!keymap.deactivate_layer(1));
        assert_eq!(keymap.take_layer_change(), Some(LayerState::default()));
        assert_eq!(keymap.take_layer_change(), None);
    }

    #[test]
    fn validate_layers() {
        let keymap: Keymap<2, 2> = Keymap::new([[La(1), LT(1, A)], [Tr, Tr]], 2, 4, 6);
        assert_eq!(keymap.validate(), Ok(()));
        let keymap: Keymap<2, 2> = Keymap::new([[Kb(A), LT(3, A)], [Tr, Tr]], 2, 4, 6);
        assert_eq!(
            keymap.validate(),
            Err(KeymapError::LayerOutOfRange { key: 1, layer: 3 })
        );
    }

    #[test]
    fn per_key_tapping_term() {
        let keymap: Keymap<2, 2> = Keymap::with_tapping_term(
            [[MT(LeftGUI, A), Kb(B)], [LP(SystemAction::EepromClear), Tr]],
            super::modtap::ModTapConfig {
                mod_timeout: 5,
                tap_release: 1,
                tap_repeat: 1,
            },
            |key, config| match key {
                LP(_) => config.mod_timeout * 4,
                MT(LeftGUI, _) => config.mod_timeout * 2,
                _ => config.mod_timeout,
            },
        );
        assert_eq!(keymap.tapping_term(0, 0), Some(10));
        assert_eq!(keymap.tapping_term(0, 1), Some(20));
        assert_eq!(keymap.tapping_term(1, 0), Some(5));
        assert_eq!(keymap.tapping_term(2, 0), None);
    }
}
