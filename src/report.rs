//! Folding held codes into what the host sees

use heapless::Vec;

use crate::keycode::{Code, Keyboard, Media};

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Report<const N: usize> {
    /// Keyboard usages, each at most once
    pub keys: Vec<Keyboard, N>,
    /// The first media key held
    pub media: Option<Media>,
    /// Mouse button bitmask
    pub buttons: u8,
    /// More keys were held than fit in `keys`
    pub rollover: bool,
}

impl<const N: usize> Report<N> {
    pub fn from_codes(codes: &[Code]) -> Self {
        let mut report = Self::default();
        for code in codes {
            match *code {
                Code::Key(key) => report.push(key),
                Code::Shifted(key) => {
                    report.push(Keyboard::LeftShift);
                    report.push(key);
                }
                Code::Media(media) => {
                    report.media.get_or_insert(media);
                }
                Code::Mouse(button) => report.buttons |= button.mask(),
                Code::Pointer(_) | Code::Rgb(_) | Code::System(_) => (),
            }
        }
        report
    }

    fn push(&mut self, key: Keyboard) {
        if key == Keyboard::NoEventIndicated || self.keys.contains(&key) {
            return;
        }
        if self.keys.push(key).is_err() {
            self.rollover = true;
        }
    }

    pub fn contains(&self, key: Keyboard) -> bool {
        self.keys.contains(&key)
    }

    /// Adds `LeftShift` unless a shift is already there
    pub fn shift(&mut self) {
        if !self.contains(Keyboard::LeftShift) && !self.contains(Keyboard::RightShift) {
            self.push(Keyboard::LeftShift);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.media.is_none() && self.buttons == 0
    }
}
