use super::KeyState;
use super::Keyish;
use super::Layer;

use heapless::Vec;

#[derive(Debug, PartialEq, Eq)]
pub struct Unpressed {
    layer: Layer,
}
#[derive(Debug, PartialEq, Eq)]
pub struct ShiftedLayer {
    layer: Layer,
}

impl KeyState<Unpressed> {
    fn shift(&self) -> KeyState<ShiftedLayer> {
        self.to(ShiftedLayer {
            layer: self.state.layer,
        })
    }
}

impl KeyState<ShiftedLayer> {
    fn release(&self) -> KeyState<Unpressed> {
        self.to(Unpressed {
            layer: self.state.layer,
        })
    }
}

/// Layer active only while the key is held
#[derive(Debug, PartialEq, Eq)]
pub enum MomentaryState {
    Unpressed(KeyState<Unpressed>),
    Pressed(KeyState<ShiftedLayer>),
}

impl Keyish for MomentaryState {
    fn is_finished(&self) -> bool {
        matches!(self, MomentaryState::Unpressed(_))
    }
}

impl MomentaryState {
    pub fn new(layer: Layer) -> Self {
        Self::Unpressed(KeyState::new(Unpressed { layer }))
    }

    pub fn layer(&self) -> Layer {
        match self {
            Self::Unpressed(state) => state.state.layer,
            Self::Pressed(state) => state.state.layer,
        }
    }

    /// Returns whether the set of active layers changed
    pub fn layer_transition<const N: usize>(
        &mut self,
        pressed: bool,
        layers: &mut Vec<Layer, N>,
    ) -> bool {
        match &self {
            Self::Unpressed(state) if pressed => {
                let changed = activate(layers, state.state.layer);
                *self = Self::Pressed(state.shift());
                changed
            }
            Self::Pressed(state) if !pressed => {
                let changed = deactivate(layers, state.state.layer);
                *self = Self::Unpressed(state.release());
                changed
            }
            _ => false,
        }
    }
}

/// Turns `layer` on, returns whether it was off
pub fn activate<const N: usize>(layers: &mut Vec<Layer, N>, layer: Layer) -> bool {
    if layers.contains(&layer) {
        return false;
    }
    if layers.push(layer).is_err() {
        warn!("layer stack full, dropping layer {}", layer);
        return false;
    }
    trace!("layer {} on", layer);
    true
}

/// Turns `layer` off, returns whether it was on
pub fn deactivate<const N: usize>(layers: &mut Vec<Layer, N>, layer: Layer) -> bool {
    let before = layers.len();
    layers.retain(|active| *active != layer);
    if layers.len() != before {
        trace!("layer {} off", layer);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn momentary_layer() {
        let mut state = MomentaryState::new(3);
        let mut layers = Vec::<Layer, 4>::new();

        assert!(!state.layer_transition(false, &mut layers));
        assert!(state.is_finished());

        assert!(state.layer_transition(true, &mut layers));
        assert_eq!(layers, [3]);
        assert!(!state.is_finished());
        assert!(!state.layer_transition(true, &mut layers));

        assert!(state.layer_transition(false, &mut layers));
        assert_eq!(layers, []);
        assert!(state.is_finished());
        assert_eq!(state.layer(), 3);
    }

    #[test]
    fn shared_layer_is_released_by_either_key() {
        let mut left = MomentaryState::new(1);
        let mut right = MomentaryState::new(1);
        let mut layers = Vec::<Layer, 2>::new();

        assert!(left.layer_transition(true, &mut layers));
        assert!(!right.layer_transition(true, &mut layers));
        assert_eq!(layers, [1]);
        assert!(right.layer_transition(false, &mut layers));
        assert_eq!(layers, []);
        assert!(!left.layer_transition(false, &mut layers));
    }

    #[test]
    fn full_stack() {
        let mut layers = Vec::<Layer, 1>::new();
        assert!(activate(&mut layers, 1));
        assert!(!activate(&mut layers, 2));
        assert!(!deactivate(&mut layers, 2));
        assert!(deactivate(&mut layers, 1));
    }
}
