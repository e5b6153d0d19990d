//! What a key can produce once its layer and tap/hold state are resolved

pub use usbd_human_interface_device::page::Keyboard;

/// Consumer page usages used by the media layer
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Media {
    NextTrack = 0xB5,
    PreviousTrack = 0xB6,
    Stop = 0xB7,
    PlayPause = 0xCD,
    Mute = 0xE2,
    VolumeUp = 0xE9,
    VolumeDown = 0xEA,
}

impl Media {
    pub fn usage(self) -> u16 {
        self as u16
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Bit in the HID mouse report button field
    pub fn mask(self) -> u8 {
        match self {
            MouseButton::Left => 1 << 0,
            MouseButton::Right => 1 << 1,
            MouseButton::Middle => 1 << 2,
        }
    }
}

/// Trackball behaviour switches
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerAction {
    /// Step the default DPI forward
    DpiMod,
    /// Step the sniping DPI forward
    SnipingDpiMod,
    /// Momentary: motion becomes scrolling
    DragScroll,
    /// Momentary: use the sniping DPI
    Sniping,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbAction {
    Toggle,
    NextMode,
    PreviousMode,
}

/// Requests handled outside the HID report
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemAction {
    /// Reboot into the bootloader
    Bootloader,
    /// Reset persistent configuration to defaults
    EepromClear,
    CapsWordToggle,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Code {
    Key(Keyboard),
    /// Reported as `LeftShift` together with the key
    Shifted(Keyboard),
    Media(Media),
    Mouse(MouseButton),
    Pointer(PointerAction),
    Rgb(RgbAction),
    System(SystemAction),
}

impl Code {
    /// `KC_NO`: occupies the position but never reaches the host
    pub fn is_nop(&self) -> bool {
        matches!(self, Code::Key(Keyboard::NoEventIndicated))
    }

    /// Mouse buttons and trackball switches, which keep the auto mouse layer alive
    pub fn is_mouse(&self) -> bool {
        matches!(self, Code::Mouse(_) | Code::Pointer(_))
    }

    pub fn is_modifier(&self) -> bool {
        match self {
            Code::Key(key) => is_modifier(*key),
            _ => false,
        }
    }
}

impl From<Keyboard> for Code {
    fn from(key: Keyboard) -> Self {
        Code::Key(key)
    }
}

pub fn is_modifier(key: Keyboard) -> bool {
    matches!(
        key,
        Keyboard::LeftControl
            | Keyboard::LeftShift
            | Keyboard::LeftAlt
            | Keyboard::LeftGUI
            | Keyboard::RightControl
            | Keyboard::RightShift
            | Keyboard::RightAlt
            | Keyboard::RightGUI
    )
}

/// `A` through `Z`
pub fn is_letter(key: Keyboard) -> bool {
    (u8::from(Keyboard::A)..=u8::from(Keyboard::Z)).contains(&u8::from(key))
}

/// `1` through `0` on the number row
pub fn is_digit(key: Keyboard) -> bool {
    (u8::from(Keyboard::Keyboard1)..=u8::from(Keyboard::Keyboard0)).contains(&u8::from(key))
}
