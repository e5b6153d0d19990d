//! Keys that do nothing on a tap and fire an action once when held long enough

use super::Duration;
use super::Instant;
use super::KeyState;
use super::Keyish;
use super::SystemAction;

#[derive(Debug, PartialEq, Eq)]
pub struct Unpressed {
    action: SystemAction,
}
#[derive(Debug, PartialEq, Eq)]
pub struct Waiting {
    action: SystemAction,
    fire_at: Instant,
}
#[derive(Debug, PartialEq, Eq)]
pub struct Fired {
    action: SystemAction,
}
/// Still held after firing
#[derive(Debug, PartialEq, Eq)]
pub struct Spent {
    action: SystemAction,
}

impl KeyState<Unpressed> {
    fn press(&self, fire_at: Instant) -> KeyState<Waiting> {
        self.to(Waiting {
            action: self.state.action,
            fire_at,
        })
    }
}

impl KeyState<Waiting> {
    fn fire(&self) -> KeyState<Fired> {
        self.to(Fired {
            action: self.state.action,
        })
    }

    fn release(&self) -> KeyState<Unpressed> {
        self.to(Unpressed {
            action: self.state.action,
        })
    }
}

impl KeyState<Fired> {
    fn spend(&self) -> KeyState<Spent> {
        self.to(Spent {
            action: self.state.action,
        })
    }

    fn release(&self) -> KeyState<Unpressed> {
        self.to(Unpressed {
            action: self.state.action,
        })
    }
}

impl KeyState<Spent> {
    fn release(&self) -> KeyState<Unpressed> {
        self.to(Unpressed {
            action: self.state.action,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum LongPressState {
    Unpressed(KeyState<Unpressed>),
    Waiting(KeyState<Waiting>),
    Fired(KeyState<Fired>),
    Spent(KeyState<Spent>),
}

impl Keyish for LongPressState {
    fn is_finished(&self) -> bool {
        matches!(self, LongPressState::Unpressed(_))
    }
}

impl LongPressState {
    pub fn new(action: SystemAction) -> Self {
        Self::Unpressed(KeyState::new(Unpressed { action }))
    }

    pub fn longpress_transition(&mut self, pressed: bool, now: Instant, term: Duration) {
        match &self {
            Self::Unpressed(state) if pressed => *self = Self::Waiting(state.press(now + term)),
            Self::Unpressed(_state) => (),

            Self::Waiting(state) if !pressed => *self = Self::Unpressed(state.release()),
            Self::Waiting(state) if state.state.fire_at <= now => {
                debug!("long press fired");
                *self = Self::Fired(state.fire())
            }
            Self::Waiting(_state) => (),

            Self::Fired(state) if pressed => *self = Self::Spent(state.spend()),
            Self::Fired(state) => *self = Self::Unpressed(state.release()),

            Self::Spent(state) if !pressed => *self = Self::Unpressed(state.release()),
            Self::Spent(_state) => (),
        }
    }

    /// The action, only on the transition into the fired state
    pub fn get_action(&self) -> Option<SystemAction> {
        match self {
            Self::Fired(state) => Some(state.state.action),
            _ => None,
        }
    }
}
