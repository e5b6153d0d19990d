//! Run-time knobs, defaulted to the values the keymap was tuned with

use crate::keystate::modtap::ModTapConfig;
use crate::keystate::Duration;

/// Tap/hold timing, in scan ticks (milliseconds on the reference board)
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// How long a dual-role key must be held to count as a hold
    pub tapping_term: Duration,
    /// Longer term for keys that are easy to hold by accident
    pub tapping_term_long_press: Duration,
    /// How long a tap stays in the report after the key is released
    pub tap_release: Duration,
    /// Window after a tap in which pressing again repeats the tap instead of holding
    pub tap_repeat: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            tapping_term: 200,
            tapping_term_long_press: 400,
            tap_release: 10,
            tap_repeat: 200,
        }
    }
}

impl TimingConfig {
    pub fn modtap_config(&self) -> ModTapConfig {
        ModTapConfig {
            mod_timeout: self.tapping_term,
            tap_release: self.tap_release,
            tap_repeat: self.tap_repeat,
        }
    }
}

/// Which debug output is switched on after boot
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebugConfig {
    pub enable: bool,
    /// Log every matrix transition
    pub matrix: bool,
    /// Log every report sent to the host
    pub keyboard: bool,
    /// Log every pointer report
    pub mouse: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        DebugConfig {
            enable: true,
            matrix: true,
            keyboard: false,
            mouse: false,
        }
    }
}

impl DebugConfig {
    /// Everything off, for builds without a debug console
    pub fn quiet() -> Self {
        DebugConfig {
            enable: false,
            matrix: false,
            keyboard: false,
            mouse: false,
        }
    }

    pub fn matrix(&self) -> bool {
        self.enable && self.matrix
    }

    pub fn keyboard(&self) -> bool {
        self.enable && self.keyboard
    }

    pub fn mouse(&self) -> bool {
        self.enable && self.mouse
    }
}
