//! Caps Word: shift letters until the word ends

use crate::keycode::{is_digit, is_letter, is_modifier, Code, Keyboard};
use crate::keystate::{Duration, Instant};
use crate::report::Report;

pub const CAPS_WORD_IDLE_TIMEOUT: Duration = 5_000;

#[derive(Debug)]
pub struct CapsWord {
    active: bool,
    /// The newest press is a letter or `-`
    shifting: bool,
    last_activity: Instant,
    idle_timeout: Duration,
}

impl Default for CapsWord {
    fn default() -> Self {
        Self::new(CAPS_WORD_IDLE_TIMEOUT)
    }
}

impl CapsWord {
    pub fn new(idle_timeout: Duration) -> Self {
        CapsWord {
            active: false,
            shifting: false,
            last_activity: 0,
            idle_timeout,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self, now: Instant) {
        self.active = !self.active;
        self.shifting = false;
        self.last_activity = now;
        debug!("caps word {}", self.active);
    }

    pub fn deactivate(&mut self) {
        if self.active {
            debug!("caps word false");
        }
        self.active = false;
        self.shifting = false;
    }

    /// A code went down
    pub fn on_press(&mut self, code: &Code, now: Instant) {
        if !self.active {
            return;
        }
        if !continues_word(code) {
            self.deactivate();
            return;
        }
        self.last_activity = now;
        match *code {
            Code::Key(key) if is_modifier(key) => (),
            Code::Key(key) => self.shifting = is_letter(key) || key == Keyboard::Minus,
            Code::System(_) => (),
            _ => self.shifting = false,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.active && now >= self.last_activity.saturating_add(self.idle_timeout) {
            self.deactivate();
        }
    }

    /// Shifts the report while the newest press is a letter or `-` that is still held
    pub fn apply<const N: usize>(&self, report: &mut Report<N>) {
        if self.active
            && self.shifting
            && report
                .keys
                .iter()
                .any(|key| is_letter(*key) || *key == Keyboard::Minus)
        {
            report.shift();
        }
    }
}

fn continues_word(code: &Code) -> bool {
    match *code {
        Code::Key(key) => {
            is_letter(key)
                || is_digit(key)
                || matches!(
                    key,
                    Keyboard::Minus
                        | Keyboard::DeleteBackspace
                        | Keyboard::DeleteForward
                        | Keyboard::LeftShift
                        | Keyboard::RightShift
                )
        }
        // `_`
        Code::Shifted(Keyboard::Minus) => true,
        Code::System(_) => true,
        _ => false,
    }
}
