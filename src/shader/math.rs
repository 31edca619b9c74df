//! Host-side mirror of the particle shader formulas.
//!
//! `particles.wgsl` evaluates exactly these expressions per vertex and per
//! fragment; keeping them here lets the behaviour be checked without a GPU.

use glam::{Vec2, Vec3};

use crate::params::{DriftConfig, LightSource, WaveParameters};

/// Hermite smoothstep, identical to the WGSL builtin for `edge0 < edge1`
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Vertical displacement of the particle at `(x, y)` at wave time `t`
pub fn wave_height(wave: &WaveParameters, x: f32, y: f32, t: f32) -> f32 {
    ((x - t * wave.speed) * wave.frequency).sin()
        * (y * wave.frequency * 0.5).cos()
        * wave.amplitude
}

/// Horizontal parallax offset, bounded by `amplitude * (1 + |z| * falloff)`
pub fn drift_offset(drift: &DriftConfig, z: f32, t: f32) -> f32 {
    (t * drift.rate).sin() * drift.amplitude * (1.0 - z * drift.depth_falloff)
}

/// Displaced world position of a particle whose base position is `base`
pub fn displaced_position(
    wave: &WaveParameters,
    drift: &DriftConfig,
    base: Vec3,
    t: f32,
) -> Vec3 {
    let z = base.z + wave_height(wave, base.x, base.y, t);
    Vec3::new(base.x + drift_offset(drift, z, t), base.y, z)
}

/// Blend factor between the near and far look of a particle
pub fn depth_fade(z: f32) -> f32 {
    smoothstep(-3.0, 2.0, z)
}

pub fn vertex_opacity(depth_fade: f32) -> f32 {
    mix(0.6, 1.0, depth_fade)
}

pub fn vertex_color(primary: Vec3, secondary: Vec3, depth_fade: f32) -> Vec3 {
    primary.lerp(secondary, depth_fade)
}

/// Perspective scale applied to the base point size
pub fn point_scale(clip_w: f32) -> f32 {
    (1.5 / (clip_w + 0.8)).clamp(0.6, 2.2)
}

/// Summed light contribution at `position`, clamped to [1, 5]
pub fn light_effect(position: Vec3, lights: &[LightSource]) -> f32 {
    let sum: f32 = lights
        .iter()
        .map(|light| light.intensity / (1.0 + position.distance_squared(light.position) * 0.005))
        .sum();
    (1.0 + sum).clamp(1.0, 5.0)
}

/// Lit fragment color before alpha
pub fn fragment_color(
    primary: Vec3,
    secondary: Vec3,
    ambient: Vec3,
    z: f32,
    light_effect: f32,
) -> Vec3 {
    primary.lerp(secondary, smoothstep(-5.0, 5.0, z)) * light_effect + ambient * 0.5
}

/// Radial glow for a sprite coordinate in [0, 1]², scaled by `strength / 10`
pub fn glow(point_coord: Vec2, strength: f32) -> f32 {
    let dist = point_coord.distance(Vec2::splat(0.5));
    let base = 1.0 - smoothstep(0.0, 0.5, dist);
    mix(1.0, base, strength / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_scenario() {
        let wave = WaveParameters {
            amplitude: 8.0,
            frequency: 0.1,
            speed: 2.0,
            ..WaveParameters::default()
        };
        let height = wave_height(&wave, 0.0, 0.0, 5.0);
        assert!((height - (-1.0f32).sin() * 8.0).abs() < 1e-5);
        assert!((height + 6.73).abs() < 0.01);
    }

    #[test]
    fn test_depth_fade_opacity_monotonic_and_clamped() {
        let mut previous = vertex_opacity(depth_fade(-3.0));
        for step in 0..=500 {
            let z = -3.0 + step as f32 * 0.01;
            let opacity = vertex_opacity(depth_fade(z));
            assert!(opacity >= previous - 1e-6, "decreased at z = {}", z);
            previous = opacity;
        }
        assert_eq!(vertex_opacity(depth_fade(-50.0)), 0.6);
        assert_eq!(vertex_opacity(depth_fade(-3.0)), 0.6);
        assert_eq!(vertex_opacity(depth_fade(2.0)), 1.0);
        assert_eq!(vertex_opacity(depth_fade(50.0)), 1.0);
    }

    #[test]
    fn test_drift_is_bounded() {
        let drift = DriftConfig::default();
        for step in 0..10_000 {
            let t = step as f32 * 3.7;
            assert!(drift_offset(&drift, 0.0, t).abs() <= drift.amplitude + 1e-5);
        }
    }

    #[test]
    fn test_point_scale_clamped() {
        assert_eq!(point_scale(0.0), 1.5 / 0.8);
        assert_eq!(point_scale(-0.5), 2.2);
        assert_eq!(point_scale(1_000.0), 0.6);
    }

    #[test]
    fn test_light_effect_range() {
        let far = [LightSource::new(Vec3::splat(10_000.0)); 3];
        assert!((light_effect(Vec3::ZERO, &far) - 1.0).abs() < 1e-3);

        let near = crate::params::default_lights();
        assert_eq!(light_effect(near[0].position, &near), 5.0);

        let mut dark = near;
        for light in dark.iter_mut() {
            light.intensity = 0.0;
        }
        assert_eq!(light_effect(Vec3::ZERO, &dark), 1.0);
    }

    #[test]
    fn test_glow_center_and_edge() {
        assert_eq!(glow(Vec2::splat(0.5), 2.5), 1.0);
        assert!((glow(Vec2::new(1.0, 0.5), 10.0)).abs() < 1e-6);
        assert_eq!(glow(Vec2::new(1.0, 0.5), 0.0), 1.0);
    }

    #[test]
    fn test_fragment_color_adds_half_ambient() {
        let color = fragment_color(Vec3::ONE, Vec3::ZERO, Vec3::splat(0.4), -10.0, 1.0);
        assert!(color.abs_diff_eq(Vec3::splat(1.2), 1e-6));
    }
}
