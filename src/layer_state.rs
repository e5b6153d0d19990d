//! Bitmask view of the active layers

pub type Layer = u8;

/// Layers past 31 don't fit the mask and are never on
fn bit(layer: Layer) -> u32 {
    1u32.checked_shl(layer as u32).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(pub u32);

impl LayerState {
    pub fn from_layers(layers: &[Layer]) -> Self {
        layers
            .iter()
            .fold(Self::default(), |state, layer| state.with(*layer))
    }

    pub fn with(self, layer: Layer) -> Self {
        Self(self.0 | bit(layer))
    }

    pub fn without(self, layer: Layer) -> Self {
        Self(self.0 & !bit(layer))
    }

    /// Whether `layer` is on. The base layer counts as on when nothing else is.
    pub fn cmp(&self, layer: Layer) -> bool {
        if self.0 == 0 {
            return layer == 0;
        }
        self.0 & bit(layer) != 0
    }

    pub fn highest(&self) -> Layer {
        match self.0 {
            0 => 0,
            bits => (31 - bits.leading_zeros()) as Layer,
        }
    }
}
