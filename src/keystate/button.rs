use super::Code;
use super::KeyState;
use super::Keyish;

#[derive(Debug, PartialEq, Eq)]
pub struct Unpressed {
    pub(super) code: Code,
}
#[derive(Debug, PartialEq, Eq)]
pub struct Pressed {
    pub(super) code: Code,
}

impl KeyState<Unpressed> {
    fn press(&self) -> KeyState<Pressed> {
        self.to(Pressed {
            code: self.state.code,
        })
    }
}

impl KeyState<Pressed> {
    fn release(&self) -> KeyState<Unpressed> {
        self.to(Unpressed {
            code: self.state.code,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ButtonState {
    Unpressed(KeyState<Unpressed>),
    Pressed(KeyState<Pressed>),
}

impl Keyish for ButtonState {
    fn is_finished(&self) -> bool {
        matches!(self, ButtonState::Unpressed(_))
    }
}

impl ButtonState {
    pub fn new(code: Code) -> Self {
        Self::Unpressed(KeyState::new(Unpressed { code }))
    }

    pub fn button_transition(&mut self, pressed: bool) {
        match &self {
            Self::Unpressed(state) if pressed => *self = Self::Pressed(state.press()),
            Self::Pressed(state) if !pressed => *self = Self::Unpressed(state.release()),
            _ => (),
        };
    }

    pub fn get_code(&self) -> Option<Code> {
        match self {
            ButtonState::Unpressed(_) => None,
            ButtonState::Pressed(KeyState { state, .. }) => Some(state.code),
        }
    }
}
