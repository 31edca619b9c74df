//! Camera state shared by presets, motions and the projection.

use glam::Vec3;

/// Where the camera is, what it looks at, and how wide it sees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Eye position (world units)
    /// Panel ranges: x/y −50–50, z 1–100
    pub position: Vec3,

    /// Look-at target (world units)
    /// Panel range: −50–50 per axis
    pub look_at: Vec3,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,
}

impl CameraState {
    pub const fn new(position: Vec3, look_at: Vec3, fov_degrees: f32) -> Self {
        Self {
            position,
            look_at,
            fov_degrees,
        }
    }

    /// Component-wise linear interpolation towards `other`
    pub fn lerp(&self, other: &CameraState, t: f32) -> CameraState {
        CameraState {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
            fov_degrees: self.fov_degrees + (other.fov_degrees - self.fov_degrees) * t,
        }
    }

    /// Whether every component is within `epsilon` of `other`
    pub fn approx_eq(&self, other: &CameraState, epsilon: f32) -> bool {
        self.position.abs_diff_eq(other.position, epsilon)
            && self.look_at.abs_diff_eq(other.look_at, epsilon)
            && (self.fov_degrees - other.fov_degrees).abs() <= epsilon
    }
}

impl Default for CameraState {
    /// The "Default View": below the field, tilted up across the wave
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -25.0, 15.0), Vec3::new(0.0, 35.0, 0.0), 75.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = CameraState::default();
        let b = CameraState::new(Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO, 60.0);

        assert!(a.lerp(&b, 0.0).approx_eq(&a, 1e-6));
        assert!(a.lerp(&b, 1.0).approx_eq(&b, 1e-6));

        let mid = a.lerp(&b, 0.5);
        assert!((mid.fov_degrees - 67.5).abs() < 1e-5);
        assert!((mid.position.y - 12.5).abs() < 1e-5);
    }
}
