use super::Duration;
use super::Instant;
use super::KeyState;
use super::Keyish;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModTapConfig {
    /// Time before a held key becomes a `mod` instead of a `tap`
    pub mod_timeout: Duration,
    /// Time during which the `tap` is transmitted after the key is released (it has to be after
    /// the key is released as only then do we know that it isn't a mod)
    pub tap_release: Duration,
    /// Time during which another press counts as a multi-tap (i.e. goes into the tap-state without
    /// waiting for the `mod_timeout`
    pub tap_repeat: Duration,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Unpressed<Hold, Tap> {
    hold: Hold,
    tap: Tap,
}
#[derive(Debug, PartialEq, Eq)]
pub struct Undecided<Hold, Tap> {
    hold: Hold,
    tap: Tap,
    hold_at: Instant,
}
#[derive(Debug, PartialEq, Eq)]
pub struct Held<Hold, Tap> {
    hold: Hold,
    tap: Tap,
}
#[derive(Debug, PartialEq, Eq)]
pub struct Tapped<Hold, Tap> {
    hold: Hold,
    tap: Tap,
    release_at: Instant,
    repeat_until: Instant,
}
#[derive(Debug, PartialEq, Eq)]
pub struct RepeatWait<Hold, Tap> {
    hold: Hold,
    tap: Tap,
    repeat_until: Instant,
}
#[derive(Debug, PartialEq, Eq)]
pub struct Repeating<Hold, Tap> {
    hold: Hold,
    tap: Tap,
}

impl<Hold: Copy, Tap: Copy> KeyState<Unpressed<Hold, Tap>> {
    fn start(&self, hold_at: Instant) -> KeyState<Undecided<Hold, Tap>> {
        let Unpressed { hold, tap } = self.state;
        self.to(Undecided { hold, tap, hold_at })
    }
}

impl<Hold: Copy, Tap: Copy> KeyState<Undecided<Hold, Tap>> {
    fn hold(&self) -> KeyState<Held<Hold, Tap>> {
        let Undecided { hold, tap, .. } = self.state;
        self.to(Held { hold, tap })
    }

    fn tap(&self, release_at: Instant, repeat_until: Instant) -> KeyState<Tapped<Hold, Tap>> {
        let Undecided { hold, tap, .. } = self.state;
        self.to(Tapped {
            hold,
            tap,
            release_at,
            repeat_until,
        })
    }
}

impl<Hold: Copy, Tap: Copy> KeyState<Held<Hold, Tap>> {
    fn release(&self) -> KeyState<Unpressed<Hold, Tap>> {
        let Held { hold, tap } = self.state;
        self.to(Unpressed { hold, tap })
    }
}

impl<Hold: Copy, Tap: Copy> KeyState<Tapped<Hold, Tap>> {
    fn release(&self) -> KeyState<Unpressed<Hold, Tap>> {
        let Tapped { hold, tap, .. } = self.state;
        self.to(Unpressed { hold, tap })
    }

    /// Pressed again after the repeat window, decide afresh
    fn restart(&self, hold_at: Instant) -> KeyState<Undecided<Hold, Tap>> {
        let Tapped { hold, tap, .. } = self.state;
        self.to(Undecided { hold, tap, hold_at })
    }

    fn wait_repeat(&self) -> KeyState<RepeatWait<Hold, Tap>> {
        let Tapped {
            hold,
            tap,
            repeat_until,
            ..
        } = self.state;
        self.to(RepeatWait {
            hold,
            tap,
            repeat_until,
        })
    }
}

impl<Hold: Copy, Tap: Copy> KeyState<RepeatWait<Hold, Tap>> {
    fn repeat(&self) -> KeyState<Repeating<Hold, Tap>> {
        let RepeatWait { hold, tap, .. } = self.state;
        self.to(Repeating { hold, tap })
    }

    fn timeout(&self) -> KeyState<Unpressed<Hold, Tap>> {
        let RepeatWait { hold, tap, .. } = self.state;
        self.to(Unpressed { hold, tap })
    }
}

impl<Hold: Copy, Tap: Copy> KeyState<Repeating<Hold, Tap>> {
    fn release(&self, repeat_until: Instant) -> KeyState<RepeatWait<Hold, Tap>> {
        let Repeating { hold, tap } = self.state;
        self.to(RepeatWait {
            hold,
            tap,
            repeat_until,
        })
    }
}

/// Dual-role key: `Hold` once held past the tapping term, `Tap` otherwise
#[derive(Debug, PartialEq, Eq)]
pub enum ModTapState<Hold, Tap> {
    Unpressed(KeyState<Unpressed<Hold, Tap>>),
    Wait(KeyState<Undecided<Hold, Tap>>),
    Mod(KeyState<Held<Hold, Tap>>),
    Tap(KeyState<Tapped<Hold, Tap>>),
    DoubleTapWait(KeyState<RepeatWait<Hold, Tap>>),
    DoubleTap(KeyState<Repeating<Hold, Tap>>),
}

impl<Hold, Tap> Keyish for ModTapState<Hold, Tap> {
    fn is_finished(&self) -> bool {
        matches!(self, ModTapState::Unpressed(_))
    }
}

impl<Hold: Copy, Tap: Copy> ModTapState<Hold, Tap> {
    pub fn new(hold: Hold, tap: Tap) -> Self {
        Self::Unpressed(KeyState::new(Unpressed { hold, tap }))
    }

    pub fn modtap_transition(&mut self, pressed: bool, now: Instant, modtap_config: &ModTapConfig) {
        match &self {
            Self::Unpressed(state) if pressed => {
                *self = Self::Wait(state.start(now + modtap_config.mod_timeout))
            }
            Self::Unpressed(_state) => (),

            Self::Wait(state) if pressed && state.state.hold_at <= now => {
                *self = Self::Mod(state.hold())
            }
            Self::Wait(state) if !pressed => {
                *self = Self::Tap(state.tap(
                    now + modtap_config.tap_release,
                    now + modtap_config.tap_repeat,
                ))
            }
            Self::Wait(_state) => (),

            Self::Mod(state) if !pressed => *self = Self::Unpressed(state.release()),
            Self::Mod(_state) => (),

            Self::Tap(state)
                if !pressed && state.state.release_at <= now && state.state.repeat_until <= now =>
            {
                *self = Self::Unpressed(state.release())
            }
            Self::Tap(state) if !pressed && state.state.release_at <= now => {
                *self = Self::DoubleTapWait(state.wait_repeat())
            }
            Self::Tap(state) if pressed && state.state.repeat_until <= now => {
                *self = Self::Wait(state.restart(now + modtap_config.mod_timeout))
            }
            Self::Tap(state) if pressed => *self = Self::DoubleTapWait(state.wait_repeat()),
            Self::Tap(_state) => (),

            Self::DoubleTapWait(state) if pressed && state.state.repeat_until > now => {
                *self = Self::DoubleTap(state.repeat())
            }
            Self::DoubleTapWait(state) if state.state.repeat_until <= now => {
                *self = Self::Unpressed(state.timeout())
            }
            Self::DoubleTapWait(_state) => (),

            Self::DoubleTap(state) if !pressed => {
                *self = Self::DoubleTapWait(state.release(now + modtap_config.tap_repeat))
            }
            Self::DoubleTap(_state) => (),
        }
    }

    /// What the key does when held, whatever state it is in
    pub fn hold(&self) -> Hold {
        match self {
            Self::Unpressed(state) => state.state.hold,
            Self::Wait(state) => state.state.hold,
            Self::Mod(state) => state.state.hold,
            Self::Tap(state) => state.state.hold,
            Self::DoubleTapWait(state) => state.state.hold,
            Self::DoubleTap(state) => state.state.hold,
        }
    }

    /// Pressed, but not yet known to be a tap or a hold
    pub fn is_undecided(&self) -> bool {
        matches!(self, Self::Wait(_))
    }

    /// The hold role, while it is in effect
    pub fn hold_state(&self) -> Option<Hold> {
        match self {
            Self::Mod(state) => Some(state.state.hold),
            _ => None,
        }
    }

    /// The tap role, while it is in effect
    pub fn tap_state(&self) -> Option<Tap> {
        match self {
            Self::Tap(state) => Some(state.state.tap),
            Self::DoubleTap(state) => Some(state.state.tap),
            _ => None,
        }
    }
}

impl<Key: Copy> ModTapState<Key, Key> {
    pub fn get_key(&self) -> Option<Key> {
        self.hold_state().or_else(|| self.tap_state())
    }
}
