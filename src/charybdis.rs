//! Charybdis Nano (3x5 + 5 thumbs) keymap
//!
//! The layers started off from the Miryoku layout, trimmed down as a base for further
//! personalization. Entries are in `LAYOUT` order: three rows of ten keys, left half
//! first, then the three left and two right thumb keys.

use crate::config::TimingConfig;
use crate::keystate::modtap::ModTapConfig;
use crate::keystate::prelude::*;
use crate::keystate::{Duration, Keymap};

pub const ROWS: usize = 3;
pub const COLS: usize = 10;
pub const THUMBS: usize = 5;
pub const SIZE: usize = ROWS * COLS + THUMBS;
pub const LAYERS: usize = 7;

pub type KeymapT = Keymap<SIZE, LAYERS>;
pub type LayerMap = [KeyShorthand; SIZE];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LayerId {
    Base = 0,
    Function,
    Navigation,
    Media,
    Pointer,
    Numeral,
    Symbols,
}

impl LayerId {
    pub const fn layer(self) -> Layer {
        self as Layer
    }
}

const FUNCTION: Layer = LayerId::Function.layer();
const NAVIGATION: Layer = LayerId::Navigation.layer();
const MEDIA: Layer = LayerId::Media.layer();
const POINTER: Layer = LayerId::Pointer.layer();
const NUMERAL: Layer = LayerId::Numeral.layer();
const SYMBOLS: Layer = LayerId::Symbols.layer();

const ESC_MED: KeyShorthand = LT(MEDIA, Escape);
const SPC_NAV: KeyShorthand = LT(NAVIGATION, Space);
const TAB_FUN: KeyShorthand = LT(FUNCTION, Tab);
const ENT_SYM: KeyShorthand = LT(SYMBOLS, ReturnEnter);
const BSP_NUM: KeyShorthand = LT(NUMERAL, DeleteBackspace);

/// Alpha block of the base layer
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alphas {
    #[default]
    Qwerty,
    ColemakDhm,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeymapConfig {
    pub alphas: Alphas,
    /// Without a trackball the pointer switches are dead keys
    pub pointing_device: bool,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        KeymapConfig {
            alphas: Alphas::default(),
            pointing_device: true,
        }
    }
}

#[rustfmt::skip]
const QWERTY: LayerMap = [
    KC_Q,    KC_W,    KC_E,    KC_R,    KC_T,    KC_Y,    KC_U,    KC_I,    KC_O,    KC_P,
    KC_A,    KC_S,    KC_D,    KC_F,    KC_G,    KC_H,    KC_J,    KC_K,    KC_L,    KC_QUOT,
    KC_Z,    KC_X,    KC_C,    KC_V,    KC_B,    KC_N,    KC_M,    KC_COMM, KC_DOT,  KC_SLSH,
                      ESC_MED, SPC_NAV, TAB_FUN, ENT_SYM, BSP_NUM,
];

#[rustfmt::skip]
const COLEMAK_DHM: LayerMap = [
    KC_Q,    KC_W,    KC_F,    KC_P,    KC_B,    KC_J,    KC_L,    KC_U,    KC_Y,    KC_QUOT,
    KC_A,    KC_R,    KC_S,    KC_T,    KC_G,    KC_M,    KC_N,    KC_E,    KC_I,    KC_O,
    KC_Z,    KC_X,    KC_C,    KC_D,    KC_V,    KC_K,    KC_H,    KC_COMM, KC_DOT,  KC_SLSH,
                      ESC_MED, SPC_NAV, TAB_FUN, ENT_SYM, BSP_NUM,
];

/// Function keys mirroring the numeral layer on the right, system keys on the inner column.
/// Tab stays on its thumb for auto-repeat.
#[rustfmt::skip]
const FUNCTION_LAYER: LayerMap = [
    XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, KC_PSCR, KC_F7,   KC_F8,   KC_F9,   KC_F12,
    KC_LGUI, KC_LALT, KC_LCTL, KC_LSFT, XXXXXXX, KC_SCRL, KC_F4,   KC_F5,   KC_F6,   KC_F11,
    XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, KC_PAUS, KC_F1,   KC_F2,   KC_F3,   KC_F10,
                      XXXXXXX, XXXXXXX, _______, XXXXXXX, XXXXXXX,
];

/// Cursor keys on the home row, line and page movement below, caps word and insert on the
/// inner column. Enter and backspace are duplicated on the right thumbs.
#[rustfmt::skip]
const NAVIGATION_LAYER: LayerMap = [
    XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
    KC_LGUI, KC_LALT, KC_LCTL, KC_LSFT, XXXXXXX, CW_TOGG, KC_LEFT, KC_DOWN, KC_UP,   KC_RGHT,
    XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, KC_INS,  KC_HOME, KC_PGDN, KC_PGUP, KC_END,
                      XXXXXXX, _______, XXXXXXX, KC_ENT,  KC_BSPC,
];

/// Media and RGB control, symmetrical for left- and right-hand trackballs
#[rustfmt::skip]
const MEDIA_LAYER: LayerMap = [
    XXXXXXX, RGB_RMOD, RGB_TOG, RGB_MOD, XXXXXXX, XXXXXXX, RGB_RMOD, RGB_TOG, RGB_MOD, XXXXXXX,
    KC_MPRV, KC_VOLD,  KC_MUTE, KC_VOLU, KC_MNXT, KC_MPRV, KC_VOLD,  KC_MUTE, KC_VOLU, KC_MNXT,
    XXXXXXX, XXXXXXX,  XXXXXXX, LP_EE_CLR, LP_QK_BOOT,
    LP_QK_BOOT, LP_EE_CLR, XXXXXXX, XXXXXXX, XXXXXXX,
                       _______, KC_MPLY, KC_MSTP, KC_MSTP, KC_MPLY,
];

/// Numerals in numpad positions with symbols around them. `.` is duplicated from the base
/// layer.
#[rustfmt::skip]
const NUMERAL_LAYER: LayerMap = [
    KC_LBRC, KC_7,    KC_8,    KC_9,    KC_RBRC, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
    KC_SCLN, KC_4,    KC_5,    KC_6,    KC_EQL,  XXXXXXX, KC_LSFT, KC_LCTL, KC_LALT, KC_LGUI,
    KC_GRV,  KC_1,    KC_2,    KC_3,    KC_BSLS, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
                      KC_DOT,  KC_0,    KC_MINS, XXXXXXX, _______,
];

/// Shifted numeral layer, so shifted symbols don't need a chord. `(` is duplicated next to
/// `)`.
#[rustfmt::skip]
const SYMBOLS_LAYER: LayerMap = [
    KC_LCBR, KC_AMPR, KC_ASTR, KC_LPRN, KC_RCBR, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
    KC_COLN, KC_DLR,  KC_PERC, KC_CIRC, KC_PLUS, XXXXXXX, KC_LSFT, KC_LCTL, KC_LALT, KC_LGUI,
    KC_TILD, KC_EXLM, KC_AT,   KC_HASH, KC_PIPE, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
                      KC_LPRN, KC_RPRN, KC_UNDS, _______, XXXXXXX,
];

/// Mouse buttons and trackball switches
pub fn pointer_layer(pointing_device: bool) -> LayerMap {
    let pointer = |key: KeyShorthand| if pointing_device { key } else { XXXXXXX };
    let drgscrl = pointer(DRGSCRL);
    let dpi_mod = pointer(DPI_MOD);
    let s_d_mod = pointer(S_D_MOD);
    let sniping = pointer(SNIPING);

    let (boot, clear) = (LP_QK_BOOT, LP_EE_CLR);

    #[rustfmt::skip]
    let layer = [
        XXXXXXX, XXXXXXX, XXXXXXX, dpi_mod, s_d_mod, s_d_mod, dpi_mod, XXXXXXX, XXXXXXX, XXXXXXX,
        KC_LGUI, KC_LALT, KC_LCTL, KC_LSFT, XXXXXXX, XXXXXXX, KC_LSFT, KC_LCTL, KC_LALT, KC_LGUI,
        _______, drgscrl, sniping, clear,   boot,    boot,    clear,   sniping, drgscrl, _______,
                          KC_BTN2, KC_BTN1, KC_BTN3, KC_BTN3, KC_BTN1,
    ];
    layer
}

fn mod_tap(modifier: Keyboard, key: KeyShorthand) -> KeyShorthand {
    match key {
        Kb(tap) => MT(modifier, tap),
        other => other,
    }
}

fn layer_tap(layer: Layer, key: KeyShorthand) -> KeyShorthand {
    match key {
        Kb(tap) => LT(layer, tap),
        other => other,
    }
}

/// Adds GACS (Gui, Alt, Ctl, Shift) home row mods to a ten-column layer, plus right alt on
/// the bottom row
pub fn home_row_mod_gacs(mut layer: LayerMap) -> LayerMap {
    const MODS: [(usize, Keyboard); 10] = [
        (10, LeftGUI),
        (11, LeftAlt),
        (12, LeftControl),
        (13, LeftShift),
        (16, RightShift),
        (17, RightControl),
        (18, LeftAlt),
        (19, RightGUI),
        (23, RightAlt),
        (26, RightAlt),
    ];
    for (index, modifier) in MODS {
        layer[index] = mod_tap(modifier, layer[index]);
    }
    layer
}

/// Makes the outer bottom-row keys hold for the pointer layer
pub fn pointer_mod(mut layer: LayerMap) -> LayerMap {
    for index in [20, 29] {
        layer[index] = layer_tap(POINTER, layer[index]);
    }
    layer
}

pub fn base_layer(alphas: Alphas) -> LayerMap {
    let alphas = match alphas {
        Alphas::Qwerty => QWERTY,
        Alphas::ColemakDhm => COLEMAK_DHM,
    };
    pointer_mod(home_row_mod_gacs(alphas))
}

/// All layers, indexed by [`LayerId`]
pub fn keymap(config: &KeymapConfig) -> [LayerMap; LAYERS] {
    [
        base_layer(config.alphas),
        FUNCTION_LAYER,
        NAVIGATION_LAYER,
        MEDIA_LAYER,
        pointer_layer(config.pointing_device),
        NUMERAL_LAYER,
        SYMBOLS_LAYER,
    ]
}

/// Hold threshold per key. GUI home row mods get the long term so they don't trigger by
/// accident, the long-press keys twice that.
pub fn tapping_term(key: &KeyShorthand, alphas: Alphas, timing: &TimingConfig) -> Duration {
    let right_gui_tap = match alphas {
        Alphas::Qwerty => Apostrophe,
        Alphas::ColemakDhm => O,
    };
    match *key {
        LP(_) => timing.tapping_term_long_press * 2,
        MT(LeftGUI, A) => timing.tapping_term_long_press,
        MT(RightGUI, tap) if tap == right_gui_tap => timing.tapping_term_long_press,
        _ => timing.tapping_term,
    }
}

pub fn build(config: &KeymapConfig, timing: &TimingConfig) -> KeymapT {
    let alphas = config.alphas;
    let timing = *timing;
    Keymap::with_tapping_term(
        keymap(config),
        timing.modtap_config(),
        move |key: &KeyShorthand, _: &ModTapConfig| tapping_term(key, alphas, &timing),
    )
}
