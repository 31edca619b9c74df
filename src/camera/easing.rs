//! Easing curves mapping linear motion progress to reshaped progress.

/// Easing applied to a motion's progress before interpolating keyframes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic acceleration from rest
    EaseIn,
    /// Quadratic deceleration to rest
    EaseOut,
    /// Accelerate through the first half, decelerate through the second
    EaseInOut,
}

impl Easing {
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    /// Map progress `t` in [0, 1] to eased progress in [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// Stable identifier used by the panel contract
    pub fn id(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "easeIn",
            Easing::EaseOut => "easeOut",
            Easing::EaseInOut => "easeInOut",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in Easing::ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in Easing::ALL {
            let mut previous = easing.apply(0.0);
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(
                    value >= previous - 1e-6,
                    "{:?} decreased at step {}",
                    easing,
                    step
                );
                previous = value;
            }
        }
    }

    #[test]
    fn test_ease_in_out_is_continuous_at_midpoint() {
        let below = Easing::EaseInOut.apply(0.5 - 1e-4);
        let above = Easing::EaseInOut.apply(0.5);
        assert!((above - 0.5).abs() < 1e-6);
        assert!((above - below).abs() < 1e-3);
    }

    #[test]
    fn test_quadratic_shapes() {
        assert!((Easing::EaseIn.apply(0.5) - 0.25).abs() < 1e-6);
        assert!((Easing::EaseOut.apply(0.5) - 0.75).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(0.25) - 0.125).abs() < 1e-6);
    }
}
