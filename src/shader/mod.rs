//! Particle shader program and the uniform block it reads.

pub mod math;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::params::{DriftConfig, LIGHT_COUNT};
use crate::store::ParameterStore;

/// WGSL source of the particle program
pub const PARTICLE_SHADER: &str = include_str!("particles.wgsl");

/// Uniform block for `particles.wgsl`; every member is 16-byte aligned
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub primary: [f32; 4],
    pub secondary: [f32; 4],
    pub ambient: [f32; 4],
    /// xyz = position, w = intensity
    pub light_positions: [[f32; 4]; LIGHT_COUNT],
    /// amplitude, frequency, speed, time
    pub wave: [f32; 4],
    /// point size, glow strength, color wave speed, drift amplitude
    pub style: [f32; 4],
    /// viewport width, viewport height, drift rate, drift depth falloff
    pub viewport: [f32; 4],
}

impl ParticleUniforms {
    /// Snapshot the store into a uniform block for one frame
    pub fn from_store(
        store: &ParameterStore,
        view_proj: Mat4,
        time: f32,
        viewport: (u32, u32),
        drift: &DriftConfig,
    ) -> Self {
        let wave = store.wave();
        let colors = store.colors();
        let lights = store.lights();

        Self {
            view_proj: view_proj.to_cols_array_2d(),
            primary: colors.primary.to_vec4(),
            secondary: colors.secondary.to_vec4(),
            ambient: colors.ambient.to_vec4(),
            light_positions: lights.map(|light| light.position.extend(light.intensity).to_array()),
            wave: [wave.amplitude, wave.frequency, wave.speed, time],
            // Glow strength tracks the blur strength control
            style: [
                wave.point_size,
                wave.blur_strength,
                wave.color_wave_speed,
                drift.amplitude,
            ],
            viewport: [
                viewport.0.max(1) as f32,
                viewport.1.max(1) as f32,
                drift.rate,
                drift.depth_falloff,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LightSlot, ParamField};

    #[test]
    fn test_uniform_block_size() {
        assert_eq!(std::mem::size_of::<ParticleUniforms>(), 208);
        assert_eq!(std::mem::size_of::<ParticleUniforms>() % 16, 0);
    }

    #[test]
    fn test_uniforms_follow_store() {
        let mut store = ParameterStore::new();
        store.set(ParamField::Amplitude, 8.0);
        store.set(ParamField::BlurStrength, 4.0);
        store.set(ParamField::LightIntensity(LightSlot::Third), 42.0);

        let uniforms = ParticleUniforms::from_store(
            &store,
            Mat4::IDENTITY,
            12.5,
            (640, 480),
            &DriftConfig::default(),
        );
        assert_eq!(uniforms.wave, [8.0, 0.15, 5.0, 12.5]);
        assert_eq!(uniforms.style[1], 4.0);
        assert_eq!(uniforms.light_positions[2], [0.0, -10.0, 10.0, 42.0]);
        assert_eq!(uniforms.viewport[..2], [640.0, 480.0]);
    }

    #[test]
    fn test_shader_declares_entry_points() {
        assert!(PARTICLE_SHADER.contains("fn vs_main"));
        assert!(PARTICLE_SHADER.contains("fn fs_main"));
    }
}
