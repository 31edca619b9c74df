//! Bloom post-process parameters.

/// Bloom pass configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomParameters {
    /// Multiplier applied to the blurred highlights when composited
    /// Panel range: 0–5
    pub strength: f32,

    /// Spread of the blur kernel (scales tap spacing)
    /// Panel range: 0–5
    pub radius: f32,

    /// Luminance above which pixels contribute to bloom
    /// Panel range: 0–1
    pub threshold: f32,
}

impl Default for BloomParameters {
    fn default() -> Self {
        Self {
            strength: 0.74,
            radius: 1.0,
            threshold: 0.08,
        }
    }
}

impl BloomParameters {
    /// Whether the bloom chain contributes anything this frame
    pub fn is_enabled(&self) -> bool {
        self.strength > 0.0
    }
}
