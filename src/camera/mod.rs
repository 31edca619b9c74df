//! Camera presets, scripted motions and the view-projection for a camera state.

mod easing;
mod engine;
mod motion;
mod presets;

pub use easing::Easing;
pub use engine::{CameraAnimationSession, CameraMotionEngine, MotionState};
pub use motion::{
    CameraMotion, Figure8Path, LinearKeyframes, MotionId, MotionKind, MotionLibrary, OrbitPath,
    SpiralPath,
};
pub use presets::{CameraPreset, PresetId, PresetLibrary};

use glam::{Mat4, Vec3};

use crate::params::{CameraState, RenderConfig};

/// Up vector for a camera looking from `eye` towards `target`
///
/// The camera never rolls, so +Y is up unless the view direction is
/// (anti)parallel to it; straight-down views such as "Top Down" use +Z.
pub fn up_vector(eye: Vec3, target: Vec3) -> Vec3 {
    let forward = (target - eye).normalize_or_zero();
    if forward.cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        Vec3::Y
    }
}

/// World-to-view transform for `camera`
pub fn view_matrix(camera: &CameraState) -> Mat4 {
    Mat4::look_at_rh(
        camera.position,
        camera.look_at,
        up_vector(camera.position, camera.look_at),
    )
}

/// Perspective projection for `camera` on a viewport of `aspect` ratio
pub fn projection_matrix(camera: &CameraState, aspect: f32, render_config: &RenderConfig) -> Mat4 {
    Mat4::perspective_rh(
        camera.fov_degrees.to_radians(),
        aspect,
        render_config.near_plane,
        render_config.far_plane,
    )
}

/// Combined view-projection matrix
pub fn view_proj_matrix(camera: &CameraState, aspect: f32, render_config: &RenderConfig) -> Mat4 {
    projection_matrix(camera, aspect, render_config) * view_matrix(camera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_down_uses_z_up() {
        let camera = PresetId::TopDown.state();
        assert_eq!(up_vector(camera.position, camera.look_at), Vec3::Z);

        let view = view_matrix(&camera);
        assert!(view.is_finite());
    }

    #[test]
    fn test_default_view_uses_y_up() {
        let camera = PresetId::DefaultView.state();
        assert_eq!(up_vector(camera.position, camera.look_at), Vec3::Y);
    }

    #[test]
    fn test_every_preset_projects_finitely() {
        let config = RenderConfig::default();
        for id in PresetId::ALL {
            let matrix = view_proj_matrix(&id.state(), config.aspect_ratio(), &config);
            assert!(matrix.is_finite(), "{}", id.name());
            assert_ne!(matrix, Mat4::ZERO);
        }
    }

    #[test]
    fn test_look_at_projects_to_screen_center() {
        let config = RenderConfig::default();
        let camera = PresetId::DefaultView.state();
        let clip = view_proj_matrix(&camera, config.aspect_ratio(), &config)
            * camera.look_at.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
    }
}
