//! For ease and shorthand
use paste::paste;

pub use super::KeyShorthand::{self, *};
pub use super::Keyboard::{self, *};
pub use super::{Layer, Media, MouseButton, PointerAction, RgbAction, SystemAction};

/// Dead key, `KC_NO`
pub const XXXXXXX: KeyShorthand = Kb(NoEventIndicated);
/// Transparent, `KC_TRNS`
pub const _______: KeyShorthand = Tr;

/// `KC_<NAME>` consts for whole table entries
macro_rules! kc {
    ($($name:tt => $key:expr),* $(,)?) => {
        paste! { $( pub const [<KC_ $name>]: KeyShorthand = $key; )* }
    };
}

kc! {
    A => Kb(A), B => Kb(B), C => Kb(C), D => Kb(D), E => Kb(E), F => Kb(F), G => Kb(G),
    H => Kb(H), I => Kb(I), J => Kb(J), K => Kb(K), L => Kb(L), M => Kb(M), N => Kb(N),
    O => Kb(O), P => Kb(P), Q => Kb(Q), R => Kb(R), S => Kb(S), T => Kb(T), U => Kb(U),
    V => Kb(V), W => Kb(W), X => Kb(X), Y => Kb(Y), Z => Kb(Z),

    1 => Kb(Keyboard1), 2 => Kb(Keyboard2), 3 => Kb(Keyboard3), 4 => Kb(Keyboard4),
    5 => Kb(Keyboard5), 6 => Kb(Keyboard6), 7 => Kb(Keyboard7), 8 => Kb(Keyboard8),
    9 => Kb(Keyboard9), 0 => Kb(Keyboard0),

    F1 => Kb(F1), F2 => Kb(F2), F3 => Kb(F3), F4 => Kb(F4), F5 => Kb(F5), F6 => Kb(F6),
    F7 => Kb(F7), F8 => Kb(F8), F9 => Kb(F9), F10 => Kb(F10), F11 => Kb(F11), F12 => Kb(F12),

    ESC => Kb(Escape),
    SPC => Kb(Space),
    TAB => Kb(Tab),
    ENT => Kb(ReturnEnter),
    BSPC => Kb(DeleteBackspace),
    QUOT => Kb(Apostrophe),
    COMM => Kb(Comma),
    DOT => Kb(Dot),
    SLSH => Kb(ForwardSlash),
    SCLN => Kb(Semicolon),
    LBRC => Kb(LeftBrace),
    RBRC => Kb(RightBrace),
    EQL => Kb(Equal),
    MINS => Kb(Minus),
    GRV => Kb(Grave),
    BSLS => Kb(Backslash),

    LGUI => Kb(LeftGUI),
    LALT => Kb(LeftAlt),
    LCTL => Kb(LeftControl),
    LSFT => Kb(LeftShift),

    PSCR => Kb(PrintScreen),
    SCRL => Kb(ScrollLock),
    PAUS => Kb(Pause),
    INS => Kb(Insert),
    HOME => Kb(Home),
    END => Kb(End),
    PGUP => Kb(PageUp),
    PGDN => Kb(PageDown),
    LEFT => Kb(LeftArrow),
    DOWN => Kb(DownArrow),
    UP => Kb(UpArrow),
    RGHT => Kb(RightArrow),

    LCBR => Sh(LeftBrace),
    RCBR => Sh(RightBrace),
    LPRN => Sh(Keyboard9),
    RPRN => Sh(Keyboard0),
    AMPR => Sh(Keyboard7),
    ASTR => Sh(Keyboard8),
    COLN => Sh(Semicolon),
    DLR => Sh(Keyboard4),
    PERC => Sh(Keyboard5),
    CIRC => Sh(Keyboard6),
    PLUS => Sh(Equal),
    TILD => Sh(Grave),
    EXLM => Sh(Keyboard1),
    AT => Sh(Keyboard2),
    HASH => Sh(Keyboard3),
    PIPE => Sh(Backslash),
    UNDS => Sh(Minus),

    MPRV => Md(Media::PreviousTrack),
    MNXT => Md(Media::NextTrack),
    VOLD => Md(Media::VolumeDown),
    VOLU => Md(Media::VolumeUp),
    MUTE => Md(Media::Mute),
    MPLY => Md(Media::PlayPause),
    MSTP => Md(Media::Stop),

    BTN1 => Ms(MouseButton::Left),
    BTN2 => Ms(MouseButton::Right),
    BTN3 => Ms(MouseButton::Middle),
}

pub const DRGSCRL: KeyShorthand = Pt(PointerAction::DragScroll);
pub const DPI_MOD: KeyShorthand = Pt(PointerAction::DpiMod);
pub const S_D_MOD: KeyShorthand = Pt(PointerAction::SnipingDpiMod);
pub const SNIPING: KeyShorthand = Pt(PointerAction::Sniping);

pub const RGB_TOG: KeyShorthand = Rgb(RgbAction::Toggle);
pub const RGB_MOD: KeyShorthand = Rgb(RgbAction::NextMode);
pub const RGB_RMOD: KeyShorthand = Rgb(RgbAction::PreviousMode);

pub const CW_TOGG: KeyShorthand = Sys(SystemAction::CapsWordToggle);

/// Nothing on tap, bootloader on long press
pub const LP_QK_BOOT: KeyShorthand = LP(SystemAction::Bootloader);
/// Nothing on tap, configuration reset on long press
pub const LP_EE_CLR: KeyShorthand = LP(SystemAction::EepromClear);
