//! Point lights feeding the particle fragment shader.

use glam::Vec3;

/// Number of point lights; the shader declares its light arrays with this length
pub const LIGHT_COUNT: usize = 3;

/// A point light contributing to the fragment light effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    /// Position in world units
    /// Panel ranges: x/y −30–30, z 1–100
    pub position: Vec3,

    /// Brightness contribution before distance attenuation
    /// Panel range: 0–100
    pub intensity: f32,
}

impl LightSource {
    pub const DEFAULT_INTENSITY: f32 = 5.0;

    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            intensity: Self::DEFAULT_INTENSITY,
        }
    }
}

/// Default light rig: two lights above the field, one below
pub fn default_lights() -> [LightSource; LIGHT_COUNT] {
    [
        LightSource::new(Vec3::new(-10.0, 15.0, 20.0)),
        LightSource::new(Vec3::new(10.0, 15.0, 20.0)),
        LightSource::new(Vec3::new(0.0, -10.0, 10.0)),
    ]
}
