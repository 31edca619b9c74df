//! Wave shape, particle grid layout and horizontal drift.

/// Wave displacement parameters pushed to the particle shader each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    /// Peak wave height in world units
    /// Panel range: 0.1–10
    pub amplitude: f32,

    /// Spatial frequency (radians per world unit)
    /// Panel range: 0.01–1
    pub frequency: f32,

    /// Travel speed of the wave along +X (world units per second)
    /// Panel range: 0.1–10
    pub speed: f32,

    /// Speed of the color wave across the field
    /// Panel range: 0.1–3
    pub color_wave_speed: f32,

    /// Base point size in pixels (scaled per particle by depth)
    /// Panel range: 0.5–5
    pub point_size: f32,

    /// Strength of the radial glow falloff (0 = flat sprite, 10 = full glow)
    pub blur_strength: f32,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            amplitude: 3.0,
            frequency: 0.15,
            speed: 5.0,
            color_wave_speed: 0.8,
            point_size: 1.0,
            blur_strength: 2.5,
        }
    }
}

/// Particle grid layout (fixed at scene build time)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleGridConfig {
    /// Particles along X
    pub rows: usize,

    /// Particles along Y
    pub cols: usize,

    /// Distance between neighbouring particles (world units)
    pub spacing: f32,
}

impl Default for ParticleGridConfig {
    fn default() -> Self {
        Self {
            rows: 200,
            cols: 200,
            spacing: 1.0,
        }
    }
}

impl ParticleGridConfig {
    /// Total number of particles in the grid
    pub fn particle_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Horizontal parallax drift: `x += sin(t * rate) * amplitude * (1 - z * depth_falloff)`
///
/// Periodic so the field never walks away from the camera on long sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftConfig {
    /// Peak horizontal offset (world units)
    pub amplitude: f32,

    /// Angular rate of the drift oscillation (radians per second)
    pub rate: f32,

    /// How strongly displaced depth damps the drift (per world unit)
    pub depth_falloff: f32,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            amplitude: 2.0,
            rate: 0.1,
            depth_falloff: 0.08,
        }
    }
}
